//! Tab-separated dataset parsing and duplicate detection.
//!
//! The input format is one record per line, `name<TAB>label<TAB>x,y`, no
//! header, trailing newline optional. Record names must start with the
//! reserved `@` marker. Parsing is all-or-nothing: the first bad line aborts
//! the load and no partial dataset escapes.
//!
//! Duplicate names are *not* a parse error — a later record silently
//! overwrites an earlier one with the same name. Callers that must refuse
//! re-used names run [`check_for_duplicates`] against the freshly parsed
//! dataset, which reports the position of the first conflicting line.

use log::{debug, trace};
use thiserror::Error;

use crate::dataset::{Point, PointDataset, NAME_MARKER};

/// Errors raised while parsing tab-separated record text.
///
/// Line numbers are 1-based and refer to the raw input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid record name '{name}' on line {line}: all record names must start with '@'")]
    InvalidRecordName { name: String, line: usize },

    #[error("malformed coordinate pair on line {line}: '{text}'")]
    MalformedCoordinate { line: usize, text: String },

    #[error("incomplete record on line {line}: '{text}'")]
    IncompleteRecord { line: usize, text: String },
}

/// Parse tab-separated record text into a dataset.
pub fn parse(text: &str) -> Result<PointDataset, ParseError> {
    let mut dataset = PointDataset::new();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let mut fields = line.split('\t');
        let (name, label, coords) = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(label), Some(coords)) => (name, label, coords),
            _ => {
                return Err(ParseError::IncompleteRecord {
                    line: line_number,
                    text: line.to_string(),
                })
            }
        };
        if !name.starts_with(NAME_MARKER) {
            return Err(ParseError::InvalidRecordName {
                name: name.to_string(),
                line: line_number,
            });
        }
        let point = parse_point(coords).ok_or_else(|| ParseError::MalformedCoordinate {
            line: line_number,
            text: coords.to_string(),
        })?;
        trace!("record {}: {} [{}] at ({}, {})", line_number, name, label, point.x, point.y);
        dataset.insert(name, label, point);
    }
    debug!("parsed {} records", dataset.len());
    Ok(dataset)
}

fn parse_point(coords: &str) -> Option<Point> {
    let (x, y) = coords.split_once(',')?;
    Some(Point::new(x.parse().ok()?, y.parse().ok()?))
}

/// Compare the record names declared in `text`, position by position,
/// against the key order of `dataset`.
///
/// Returns the index of the first mismatch, or the dataset size when the
/// input carries strictly more trailing entries than the dataset holds keys
/// (the signature of a duplicate that collapsed during parsing), or `None`
/// when nothing conflicts. The 0-based index doubles as the offending line
/// number minus one.
pub fn check_for_duplicates(text: &str, dataset: &PointDataset) -> Option<usize> {
    let declared: Vec<&str> = text
        .lines()
        .map(|line| line.split('\t').next().unwrap_or(""))
        .collect();

    for (index, key) in dataset.names().enumerate() {
        match declared.get(index) {
            Some(name) if *name == key => continue,
            Some(_) => return Some(index),
            None => return None,
        }
    }
    if declared.len() > dataset.len() {
        return Some(dataset.len());
    }
    None
}
