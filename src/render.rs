//! Snapshot delivery toward a host-owned rendering sink.
//!
//! The engine never talks to a widget directly. Every progress step produces
//! a [`Snapshot`] — an immutable copy of the post-step series state — and
//! posts it on a single delivery channel. The host drains the channel on the
//! thread of its choosing and drives its [`RenderSink`], which only knows
//! two operations: clear everything, replace everything. No diffs.

use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver, Sender};

use crate::dataset::Point;

/// One chart series per label: label → plotted positions.
pub type SeriesMap = BTreeMap<String, Vec<Point>>;

/// A fully consistent view of the dataset after one progress step.
#[derive(Clone, Debug)]
pub struct Snapshot {
    /// Iteration the step was performed at (capped at the iteration budget).
    pub iteration: usize,
    pub series: SeriesMap,
}

/// Display surface contract. Implementations replace their whole content on
/// every snapshot.
pub trait RenderSink {
    fn clear(&mut self);
    fn replace_series(&mut self, series: &SeriesMap);
}

/// The designated delivery channel between engine and host.
pub fn snapshot_channel() -> (Sender<Snapshot>, Receiver<Snapshot>) {
    mpsc::channel()
}

/// Apply every pending snapshot to `sink` (clear, then replace, in posting
/// order). Returns how many snapshots were applied.
pub fn drain_into(snapshots: &Receiver<Snapshot>, sink: &mut dyn RenderSink) -> usize {
    let mut applied = 0;
    while let Ok(snapshot) = snapshots.try_recv() {
        sink.clear();
        sink.replace_series(&snapshot.series);
        applied += 1;
    }
    applied
}
