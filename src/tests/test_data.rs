//! Shared fixtures for the test modules.

use crate::dataset::{Point, PointDataset};
use crate::render::{RenderSink, SeriesMap};

pub const SAMPLE_TSD: &str = "@a\tred\t1,1\n@b\tblue\t2,2\n@c\tred\t3,3\n";

pub const DUPLICATE_TSD: &str = "@a\tred\t1,1\n@b\tblue\t2,2\n@a\tgreen\t9,9\n";

/// Four points forming two obvious clusters on the x axis.
pub fn make_square() -> PointDataset {
    let mut data = PointDataset::new();
    data.insert("@p1", "red", Point::new(0.0, 0.0));
    data.insert("@p2", "red", Point::new(0.0, 2.0));
    data.insert("@p3", "blue", Point::new(10.0, 0.0));
    data.insert("@p4", "blue", Point::new(10.0, 2.0));
    data
}

/// Sink double recording every clear/replace it receives.
#[derive(Default)]
pub struct RecordingSink {
    pub clears: usize,
    pub replaced: Vec<SeriesMap>,
}

impl RenderSink for RecordingSink {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn replace_series(&mut self, series: &SeriesMap) {
        self.replaced.push(series.clone());
    }
}
