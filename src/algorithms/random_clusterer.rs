//! Random-assignment clusterer: the clustering baseline.
//!
//! Each progress step relabels every record whose current label is not the
//! unlabeled sentinel with a uniformly random cluster index in `[0, k)`,
//! rendered as a string. Sentinel-labeled records are never touched; the
//! asymmetry is intentional and mirrors the reference behavior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithms::{clamp_clusters, Algorithm};
use crate::dataset::{PointDataset, UNLABELED};
use crate::render::SeriesMap;

pub struct RandomClusterer {
    clusters: usize,
    rng: StdRng,
}

impl RandomClusterer {
    /// `k` is clamped into `[2, 4]`.
    pub fn new(k: usize) -> Self {
        Self {
            clusters: clamp_clusters(k),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn clusters(&self) -> usize {
        self.clusters
    }
}

impl Algorithm for RandomClusterer {
    fn name(&self) -> &'static str {
        "random-clusterer"
    }

    fn progress_step(&mut self, data: &mut PointDataset) -> SeriesMap {
        let labeled: Vec<String> = data
            .iter()
            .filter(|(_, _, label)| *label != UNLABELED)
            .map(|(name, _, _)| name.to_string())
            .collect();
        for name in &labeled {
            let label = self.rng.gen_range(0..self.clusters).to_string();
            data.set_label(name, label);
        }
        data.series_by_label()
    }
}
