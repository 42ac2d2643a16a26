//! K-means clustering over the 2-D dataset.
//!
//! One progress step = assign labels, then recompute centroids:
//!
//! - **Assignment**: every record gets the stringified index of its nearest
//!   centroid (Euclidean distance, ties broken toward the lowest index).
//!   The distance scan runs in parallel; label writes are applied in
//!   dataset order, so results are deterministic.
//! - **Recomputation**: each centroid moves to the arithmetic mean of the
//!   records currently assigned to it. A cluster that owns zero records
//!   keeps its previous centroid (frozen) instead of producing a NaN mean.
//!
//! Centroids are seeded once per run from `k` distinct record positions
//! chosen uniformly at random, or injected via `with_initial_centroids`
//! for fully deterministic runs.

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::algorithms::{clamp_clusters, Algorithm};
use crate::dataset::{Point, PointDataset};
use crate::render::SeriesMap;

pub struct KMeansClusterer {
    clusters: usize,
    centroids: Vec<Point>,
    preset: bool,
    rng: StdRng,
}

impl KMeansClusterer {
    /// `k` is clamped into `[2, 4]`.
    pub fn new(k: usize) -> Self {
        Self {
            clusters: clamp_clusters(k),
            centroids: Vec::new(),
            preset: false,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seed the centroid sampling for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Place the initial centroids explicitly. Only honored when the count
    /// matches the cluster count; otherwise random seeding applies.
    pub fn with_initial_centroids(mut self, centroids: Vec<Point>) -> Self {
        self.centroids = centroids;
        self.preset = true;
        self
    }

    pub fn clusters(&self) -> usize {
        self.clusters
    }

    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }

    fn assign_labels(&self, data: &mut PointDataset) {
        let records: Vec<(String, Point)> = data
            .iter()
            .map(|(name, point, _)| (name.to_string(), point))
            .collect();
        let centroids = &self.centroids;
        let nearest: Vec<usize> = records
            .par_iter()
            .map(|(_, point)| nearest_centroid(*point, centroids).0)
            .collect();
        for ((name, _), cluster) in records.iter().zip(nearest) {
            data.set_label(name, cluster.to_string());
        }
    }

    fn recompute_centroids(&mut self, data: &PointDataset) {
        for cluster in 0..self.clusters {
            let key = cluster.to_string();
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            let mut count = 0usize;
            for (_, point, label) in data.iter() {
                if label == key {
                    sum_x += point.x;
                    sum_y += point.y;
                    count += 1;
                }
            }
            if count == 0 {
                trace!("cluster {} owns no records; centroid frozen", cluster);
                continue;
            }
            self.centroids[cluster] = Point::new(sum_x / count as f64, sum_y / count as f64);
        }
    }
}

impl Algorithm for KMeansClusterer {
    fn name(&self) -> &'static str {
        "kmeans-clusterer"
    }

    fn init(&mut self, data: &PointDataset) {
        if self.preset && self.centroids.len() == self.clusters {
            debug!("using {} preset centroids", self.centroids.len());
            return;
        }
        let positions: Vec<Point> = data.iter().map(|(_, point, _)| point).collect();
        let picks = sample(
            &mut self.rng,
            positions.len(),
            self.clusters.min(positions.len()),
        );
        self.centroids = picks.iter().map(|i| positions[i]).collect();
        info!("seeded {} centroids from {} records", self.centroids.len(), positions.len());
    }

    fn progress_step(&mut self, data: &mut PointDataset) -> SeriesMap {
        self.assign_labels(data);
        self.recompute_centroids(data);
        data.series_by_label()
    }
}

/// Linear-scan nearest centroid: returns (index, distance). Ties keep the
/// first-encountered index.
fn nearest_centroid(point: Point, centroids: &[Point]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = point.distance(*centroid);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    (best_index, best_distance)
}
