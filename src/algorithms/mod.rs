//! Iterative algorithm variants and their shared step contract.
//!
//! Every variant implements [`Algorithm`]: an optional one-time `init`
//! (k-means seeds its centroids there) and a `progress_step` that mutates
//! the dataset and returns the post-step series map. Iteration pacing,
//! run-mode selection, and snapshot publication are the run controller's
//! job ([`runner::AlgorithmRun`]) — variants never count iterations
//! themselves.
//!
//! Variant selection is a closed tagged dispatch through [`AlgorithmKind`];
//! there is deliberately no registry, reflection, or directory scanning.

pub mod kmeans;
pub mod random_classifier;
pub mod random_clusterer;
pub mod runner;

use crate::dataset::PointDataset;
use crate::render::SeriesMap;

/// Lower bound on the cluster count accepted by clustering variants.
pub const MIN_CLUSTERS: usize = 2;
/// Upper bound on the cluster count accepted by clustering variants.
pub const MAX_CLUSTERS: usize = 4;

/// Clamp a requested cluster count into the supported `[2, 4]` range.
pub fn clamp_clusters(k: usize) -> usize {
    k.clamp(MIN_CLUSTERS, MAX_CLUSTERS)
}

/// Fixed run configuration, immutable after construction.
///
/// Zero values are lifted to 1 so the run-mode state machine stays total.
/// `update_interval > max_iterations` is accepted and yields a run with zero
/// progress emissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub max_iterations: usize,
    pub update_interval: usize,
    pub continuous: bool,
}

impl RunConfig {
    pub fn new(max_iterations: usize, update_interval: usize, continuous: bool) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            update_interval: update_interval.max(1),
            continuous,
        }
    }

    /// Whether the configuration can emit any progress step at all.
    pub fn emits_progress(&self) -> bool {
        self.update_interval <= self.max_iterations
    }
}

/// Step contract shared by all algorithm variants.
///
/// `progress_step` must leave the dataset in a fully consistent state and
/// return the series map describing it; the returned map is what reaches
/// the rendering sink, unmodified.
pub trait Algorithm: Send {
    fn name(&self) -> &'static str;

    /// Called once per run, before the first progress step, with the
    /// dataset in its pre-run state.
    fn init(&mut self, _data: &PointDataset) {}

    /// Perform one unit of algorithmic work.
    fn progress_step(&mut self, data: &mut PointDataset) -> SeriesMap;
}

/// The closed set of algorithm variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmKind {
    RandomClassifier,
    RandomClusterer,
    KMeans,
}

impl AlgorithmKind {
    /// Construct the variant. `clusters` is clamped to `[2, 4]` and ignored
    /// by the classifier; `seed` makes the variant's randomness
    /// reproducible.
    pub fn build(self, clusters: usize, seed: Option<u64>) -> Box<dyn Algorithm> {
        match self {
            AlgorithmKind::RandomClassifier => {
                let algo = random_classifier::RandomClassifier::new();
                Box::new(match seed {
                    Some(seed) => algo.with_seed(seed),
                    None => algo,
                })
            }
            AlgorithmKind::RandomClusterer => {
                let algo = random_clusterer::RandomClusterer::new(clusters);
                Box::new(match seed {
                    Some(seed) => algo.with_seed(seed),
                    None => algo,
                })
            }
            AlgorithmKind::KMeans => {
                let algo = kmeans::KMeansClusterer::new(clusters);
                Box::new(match seed {
                    Some(seed) => algo.with_seed(seed),
                    None => algo,
                })
            }
        }
    }
}
