//! Iterative algorithm engine for small 2-D labeled point datasets.
//!
//! The crate covers the non-visual core of a point-plotting desktop tool:
//!
//! - **Dataset**: an insertion-ordered collection of named, labeled 2-D
//!   points ([`dataset::PointDataset`]).
//! - **Parser**: tab-separated `name<TAB>label<TAB>x,y` records with
//!   marker-character validation and duplicate detection ([`parser`]).
//! - **Algorithms**: a closed set of iterative variants — a random-line
//!   classifier, a random clusterer, and k-means — behind one step contract
//!   ([`algorithms::Algorithm`], [`algorithms::AlgorithmKind`]).
//! - **Run-mode controller**: continuous or manual/stepwise execution on a
//!   dedicated worker thread per run ([`algorithms::runner::AlgorithmRun`]).
//! - **Rendering sink**: progress snapshots posted through a single delivery
//!   channel; the host decides how and when to draw them ([`render`]).
//! - **Session**: the hosting layer gating load/save/new on `finished()`
//!   ([`session::Session`]).
//!
//! The engine hands every rendering sink a fully consistent post-step
//! snapshot; it never exposes a half-assigned dataset.

pub mod algorithms;
pub mod dataset;
pub mod parser;
pub mod render;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

pub use algorithms::runner::{AlgorithmRun, RunError, STEP_DELAY};
pub use algorithms::{clamp_clusters, Algorithm, AlgorithmKind, RunConfig};
pub use dataset::{Point, PointDataset, NAME_MARKER, UNLABELED};
pub use parser::{check_for_duplicates, parse, ParseError};
pub use render::{drain_into, snapshot_channel, RenderSink, SeriesMap, Snapshot};
pub use session::{Session, SessionError};
pub use store::StoreError;

/// Initialize logging for demos and tests. Safe to call more than once.
pub fn init() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}
