//! Hosting session: dataset ownership and the advisory run gate.
//!
//! The session owns the shared dataset and the current algorithm run. Every
//! data-changing action (load, save, new) is refused while a run reports
//! `finished() == false`. The gate is cooperative: the engine itself never
//! detects competing mutation, it relies on hosts going through here.
//!
//! Loading is two-phase: parse, then duplicate detection against the
//! freshly parsed key order. A failed load — parse error or duplicate —
//! aborts the operation and the displayed dataset reverts to empty.

use std::path::Path;
use std::sync::mpsc::Sender;
use std::sync::{Arc, Mutex};

use log::{info, warn};
use thiserror::Error;

use crate::algorithms::runner::AlgorithmRun;
use crate::algorithms::{AlgorithmKind, RunConfig};
use crate::dataset::PointDataset;
use crate::parser::{self, ParseError};
use crate::render::Snapshot;
use crate::store::{self, StoreError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("an algorithm run is still in progress")]
    RunInProgress,

    #[error("dataset is empty; load data before running an algorithm")]
    EmptyDataset,

    #[error("duplicate record name at line {line}: '{text}'")]
    DuplicateRecord { line: usize, text: String },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Default)]
pub struct Session {
    dataset: Arc<Mutex<PointDataset>>,
    run: Option<AlgorithmRun>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared dataset. Mutating it while a run is unfinished
    /// violates the engine's shared-resource policy.
    pub fn dataset(&self) -> Arc<Mutex<PointDataset>> {
        Arc::clone(&self.dataset)
    }

    /// The current run, if any was started.
    pub fn run(&self) -> Option<&AlgorithmRun> {
        self.run.as_ref()
    }

    pub fn run_mut(&mut self) -> Option<&mut AlgorithmRun> {
        self.run.as_mut()
    }

    fn ensure_idle(&self) -> Result<(), SessionError> {
        if let Some(run) = &self.run {
            if !run.finished() {
                warn!("action refused: algorithm run still in progress");
                return Err(SessionError::RunInProgress);
            }
        }
        Ok(())
    }

    /// Parse and install a new dataset from raw tab-separated text.
    ///
    /// Any failed load leaves the dataset empty; a duplicate record name
    /// additionally reports the offending 1-based line.
    pub fn load_text(&mut self, text: &str) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let parsed = match parser::parse(text) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.dataset.lock().unwrap().clear();
                return Err(err.into());
            }
        };
        if let Some(index) = parser::check_for_duplicates(text, &parsed) {
            let line_text = text.lines().nth(index).unwrap_or("").to_string();
            self.dataset.lock().unwrap().clear();
            return Err(SessionError::DuplicateRecord {
                line: index + 1,
                text: line_text,
            });
        }
        info!("loaded dataset: {} records", parsed.len());
        *self.dataset.lock().unwrap() = parsed;
        Ok(())
    }

    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        let text = store::load(path)?;
        self.load_text(&text)
    }

    /// Serialize the current dataset back to tab-separated text on disk.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        self.ensure_idle()?;
        let text = self.dataset.lock().unwrap().to_tsd();
        store::save(path, &text)?;
        Ok(())
    }

    /// The "new data" action: drop every record.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.ensure_idle()?;
        self.dataset.lock().unwrap().clear();
        Ok(())
    }

    /// Number of distinct labels, unlabeled sentinel excluded.
    pub fn label_count(&self) -> usize {
        self.dataset.lock().unwrap().label_count()
    }

    /// Distinct labels in first-seen order, sentinel excluded.
    pub fn label_names(&self) -> Vec<String> {
        self.dataset.lock().unwrap().label_names()
    }

    /// Build an algorithm run over the session's dataset.
    ///
    /// Refused while a previous run is unfinished or when the dataset is
    /// empty; algorithms assume at least two usable records. The returned
    /// handle must still be `execute()`d.
    pub fn start(
        &mut self,
        kind: AlgorithmKind,
        config: RunConfig,
        clusters: usize,
        seed: Option<u64>,
        snapshots: Sender<Snapshot>,
    ) -> Result<&mut AlgorithmRun, SessionError> {
        self.ensure_idle()?;
        if self.dataset.lock().unwrap().is_empty() {
            return Err(SessionError::EmptyDataset);
        }
        let algorithm = kind.build(clusters, seed);
        info!("prepared {:?} run with {} clusters", kind, clusters);
        let run = AlgorithmRun::new(algorithm, config, Arc::clone(&self.dataset), snapshots);
        Ok(self.run.insert(run))
    }
}
