//! Random-line classifier: a non-learning placeholder.
//!
//! Each progress step draws a fresh line `y = (constant - xCoeff * x) /
//! yCoeff` with random integer coefficients and reports it evaluated at the
//! dataset's minimum and maximum x. Labels and y values are never read;
//! the dataset is never mutated.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::Algorithm;
use crate::dataset::{Point, PointDataset};
use crate::render::SeriesMap;

/// Series name the classifier line is published under.
pub const LINE_SERIES: &str = "Random Classifier Line";

pub struct RandomClassifier {
    rng: StdRng,
}

impl Default for RandomClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomClassifier {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Algorithm for RandomClassifier {
    fn name(&self) -> &'static str {
        "random-classifier"
    }

    fn progress_step(&mut self, data: &mut PointDataset) -> SeriesMap {
        let (x_min, x_max) = data.x_bounds().unwrap_or((0.0, 0.0));

        // Integer coefficients: x in [-10, 10], y fixed at 10, constant in [0, 10].
        let x_coefficient = -((2.0 * self.rng.gen::<f64>() - 1.0) * 10.0).round();
        let y_coefficient = 10.0;
        let constant = self.rng.gen_range(0..=10) as f64;
        debug!(
            "classifier line: xCoeff={}, yCoeff={}, constant={}",
            x_coefficient, y_coefficient, constant
        );

        let y_at = |x: f64| (constant - x_coefficient * x) / y_coefficient;

        let mut series = data.series_by_label();
        series.insert(
            LINE_SERIES.to_string(),
            vec![Point::new(x_min, y_at(x_min)), Point::new(x_max, y_at(x_max))],
        );
        series
    }
}
