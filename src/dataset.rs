//! Labeled 2-D point dataset: the common input to every algorithm variant.
//!
//! A dataset is a set of *records*, each a named point with a label. Record
//! names are unique, start with the reserved marker character, and keep
//! their insertion order (re-inserting a name overwrites its point and label
//! in place). The point and label key sets are identical at all times;
//! records are only ever added or removed as a whole.

use std::collections::{BTreeMap, HashMap};

/// Reserved marker character every record name must start with.
pub const NAME_MARKER: char = '@';

/// Sentinel label for records that carry no category.
///
/// Clustering algorithms treat this value as "do not touch"; label counting
/// excludes it (case-insensitively, following the reference data format).
pub const UNLABELED: &str = "null";

/// A point in the X-Y plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Insertion-ordered collection of named, labeled 2-D points.
#[derive(Clone, Debug, Default)]
pub struct PointDataset {
    order: Vec<String>,
    points: HashMap<String, Point>,
    labels: HashMap<String, String>,
}

impl PointDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a record. An existing name keeps its original
    /// position in the iteration order.
    pub fn insert(&mut self, name: impl Into<String>, label: impl Into<String>, point: Point) {
        let name = name.into();
        if !self.points.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.labels.insert(name.clone(), label.into());
        self.points.insert(name, point);
    }

    pub fn point_of(&self, name: &str) -> Option<Point> {
        self.points.get(name).copied()
    }

    pub fn label_of(&self, name: &str) -> Option<&str> {
        self.labels.get(name).map(String::as_str)
    }

    /// Relabel an existing record. Returns false when the name is unknown;
    /// labels are never created without a point.
    pub fn set_label(&mut self, name: &str, label: impl Into<String>) -> bool {
        match self.labels.get_mut(name) {
            Some(slot) => {
                *slot = label.into();
                true
            }
            None => false,
        }
    }

    /// Record names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Records in insertion order as `(name, point, label)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Point, &str)> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.points[name], self.labels[name].as_str()))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drop every record. Used by the "new data" action and by failed loads.
    pub fn clear(&mut self) {
        self.order.clear();
        self.points.clear();
        self.labels.clear();
    }

    /// Minimum and maximum x coordinate over all records, if any.
    pub fn x_bounds(&self) -> Option<(f64, f64)> {
        let mut bounds: Option<(f64, f64)> = None;
        for point in self.points.values() {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(point.x), hi.max(point.x)),
                None => (point.x, point.x),
            });
        }
        bounds
    }

    /// Group record positions by their current label, the shape the
    /// rendering sink consumes as one chart series per label.
    pub fn series_by_label(&self) -> BTreeMap<String, Vec<Point>> {
        let mut series: BTreeMap<String, Vec<Point>> = BTreeMap::new();
        for (_, point, label) in self.iter() {
            series.entry(label.to_string()).or_default().push(point);
        }
        series
    }

    /// Distinct labels in first-seen order, excluding the unlabeled sentinel.
    pub fn label_names(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for name in &self.order {
            let label = &self.labels[name];
            if label.eq_ignore_ascii_case(UNLABELED) {
                continue;
            }
            if !seen.iter().any(|s| s == label) {
                seen.push(label.clone());
            }
        }
        seen
    }

    /// Number of distinct labels, sentinel excluded.
    pub fn label_count(&self) -> usize {
        self.label_names().len()
    }

    /// Serialize back to the flat tab-separated record format.
    pub fn to_tsd(&self) -> String {
        let mut out = String::new();
        for (name, point, label) in self.iter() {
            out.push_str(name);
            out.push('\t');
            out.push_str(label);
            out.push('\t');
            out.push_str(&format!("{},{}", point.x, point.y));
            out.push('\n');
        }
        out
    }
}
