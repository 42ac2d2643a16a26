//! Run-mode controller: one dedicated worker thread per algorithm run.
//!
//! States: IDLE → RUNNING → IDLE. `execute()` is the only way out of IDLE;
//! it resets the iteration counter, flips `finished` to false, and spawns
//! the worker. While RUNNING, the iteration strategy depends on the
//! configured mode:
//!
//! - **Continuous**: the worker iterates 1..=max_iterations on its own and
//!   performs one progress step at every exact multiple of the update
//!   interval, publishing a snapshot and pausing briefly so progress stays
//!   observable. A run with `M=10, U=3` emits exactly 3 snapshots
//!   (iterations 3, 6, 9); iteration 10 emits nothing.
//! - **Manual**: the worker blocks on a trigger channel and performs exactly
//!   one progress step per [`AlgorithmRun::step`] call, advancing the
//!   counter by one update interval. The step that reaches or passes the
//!   iteration budget is the final one: the counter resets to 0 and the run
//!   finishes. Exactly `ceil(M / U)` triggers complete a run.
//!
//! There is no cancellation. A continuous run always completes its budget;
//! a manual run is abandoned by dropping the run handle, which closes the
//! trigger channel and lets the worker exit.
//!
//! The dataset is mutated only by the worker, under its lock, while
//! `finished()` is false. Hosts treat `finished()` as an advisory lock and
//! hold back competing load/save/new actions until it reads true.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::{debug, info, warn};
use thiserror::Error;

use crate::algorithms::{Algorithm, RunConfig};
use crate::dataset::PointDataset;
use crate::render::Snapshot;

/// Default pause between progress steps. Pacing only; carries no
/// correctness requirement and may be lowered to zero.
pub const STEP_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RunError {
    #[error("algorithm is already running")]
    AlreadyRunning,

    #[error("no run in progress")]
    NotRunning,

    #[error("manual steps are not available on a continuous run")]
    WrongMode,
}

/// One manual trigger; `done` is signalled after the step completes.
struct StepRequest {
    done: Sender<()>,
}

struct RunInner {
    config: RunConfig,
    algorithm: Mutex<Box<dyn Algorithm>>,
    dataset: Arc<Mutex<PointDataset>>,
    finished: AtomicBool,
    current_iteration: AtomicUsize,
    step_delay: Duration,
}

/// A single algorithm run: configuration, run state, and the worker driving
/// it. The run state (`current_iteration`, `finished`) is owned here and
/// never shared across runs.
pub struct AlgorithmRun {
    inner: Arc<RunInner>,
    snapshots: Sender<Snapshot>,
    trigger: Option<Sender<StepRequest>>,
    worker: Option<JoinHandle<()>>,
}

impl AlgorithmRun {
    pub fn new(
        algorithm: Box<dyn Algorithm>,
        config: RunConfig,
        dataset: Arc<Mutex<PointDataset>>,
        snapshots: Sender<Snapshot>,
    ) -> Self {
        Self {
            inner: Arc::new(RunInner {
                config,
                algorithm: Mutex::new(algorithm),
                dataset,
                finished: AtomicBool::new(true),
                current_iteration: AtomicUsize::new(0),
                step_delay: STEP_DELAY,
            }),
            snapshots,
            trigger: None,
            worker: None,
        }
    }

    /// Override the inter-step pause. Only effective before `execute()`.
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.set_step_delay(delay);
        self
    }

    /// Override the inter-step pause. Only effective before `execute()`.
    pub fn set_step_delay(&mut self, delay: Duration) {
        if let Some(inner) = Arc::get_mut(&mut self.inner) {
            inner.step_delay = delay;
        }
    }

    pub fn max_iterations(&self) -> usize {
        self.inner.config.max_iterations
    }

    pub fn update_interval(&self) -> usize {
        self.inner.config.update_interval
    }

    pub fn continuous(&self) -> bool {
        self.inner.config.continuous
    }

    /// True before the run starts and after it completes; false strictly
    /// while iterations execute or manual triggers are outstanding.
    pub fn finished(&self) -> bool {
        self.inner.finished.load(Ordering::SeqCst)
    }

    pub fn current_iteration(&self) -> usize {
        self.inner.current_iteration.load(Ordering::SeqCst)
    }

    /// Begin the run. Returns immediately; iterations execute on a
    /// dedicated worker thread.
    ///
    /// A manual-mode configuration whose update interval exceeds the
    /// iteration budget can never emit a progress step; such a run
    /// completes immediately and stays idle.
    pub fn execute(&mut self) -> Result<(), RunError> {
        if !self.finished() {
            return Err(RunError::AlreadyRunning);
        }
        let config = self.inner.config;
        self.trigger = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
        if !config.continuous && !config.emits_progress() {
            warn!(
                "update interval {} exceeds iteration budget {}; nothing to step",
                config.update_interval, config.max_iterations
            );
            return Ok(());
        }

        self.inner.current_iteration.store(0, Ordering::SeqCst);
        self.inner.finished.store(false, Ordering::SeqCst);
        info!(
            "starting run: max_iterations={}, update_interval={}, continuous={}",
            config.max_iterations, config.update_interval, config.continuous
        );

        let inner = Arc::clone(&self.inner);
        let snapshots = self.snapshots.clone();
        if config.continuous {
            self.worker = Some(thread::spawn(move || continuous_loop(inner, snapshots)));
        } else {
            let (trigger_tx, trigger_rx) = mpsc::channel();
            self.trigger = Some(trigger_tx);
            self.worker = Some(thread::spawn(move || {
                manual_loop(inner, trigger_rx, snapshots)
            }));
        }
        Ok(())
    }

    /// Manual-mode trigger: perform one progress step on the worker and
    /// wait for it to complete.
    pub fn step(&self) -> Result<(), RunError> {
        if self.inner.config.continuous {
            return Err(RunError::WrongMode);
        }
        if self.finished() {
            return Err(RunError::NotRunning);
        }
        let trigger = self.trigger.as_ref().ok_or(RunError::NotRunning)?;
        let (done_tx, done_rx) = mpsc::channel();
        trigger
            .send(StepRequest { done: done_tx })
            .map_err(|_| RunError::NotRunning)?;
        done_rx.recv().map_err(|_| RunError::NotRunning)
    }

    /// Block until the worker exits. Closes the trigger channel first, so
    /// an unfinished manual run is abandoned rather than deadlocked.
    pub fn wait(&mut self) {
        self.trigger = None;
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn continuous_loop(inner: Arc<RunInner>, snapshots: Sender<Snapshot>) {
    let config = inner.config;
    let mut algorithm = inner.algorithm.lock().unwrap();
    {
        let data = inner.dataset.lock().unwrap();
        algorithm.init(&data);
    }
    for iteration in 1..=config.max_iterations {
        if iteration % config.update_interval != 0 {
            continue;
        }
        let series = {
            let mut data = inner.dataset.lock().unwrap();
            algorithm.progress_step(&mut data)
        };
        inner.current_iteration.store(iteration, Ordering::SeqCst);
        debug!("iteration {}", iteration);
        let _ = snapshots.send(Snapshot { iteration, series });
        thread::sleep(inner.step_delay);
    }
    inner.current_iteration.store(0, Ordering::SeqCst);
    inner.finished.store(true, Ordering::SeqCst);
    info!("continuous run complete");
}

fn manual_loop(inner: Arc<RunInner>, triggers: Receiver<StepRequest>, snapshots: Sender<Snapshot>) {
    let config = inner.config;
    let mut algorithm = inner.algorithm.lock().unwrap();
    {
        let data = inner.dataset.lock().unwrap();
        algorithm.init(&data);
    }
    while let Ok(request) = triggers.recv() {
        let series = {
            let mut data = inner.dataset.lock().unwrap();
            algorithm.progress_step(&mut data)
        };
        let advanced = inner.current_iteration.load(Ordering::SeqCst) + config.update_interval;
        let iteration = advanced.min(config.max_iterations);
        inner.current_iteration.store(advanced, Ordering::SeqCst);
        debug!("iteration {}", iteration);
        let _ = snapshots.send(Snapshot { iteration, series });
        thread::sleep(inner.step_delay);

        let last = advanced >= config.max_iterations;
        if last {
            inner.current_iteration.store(0, Ordering::SeqCst);
            inner.finished.store(true, Ordering::SeqCst);
        }
        let _ = request.done.send(());
        if last {
            info!("manual run complete");
            break;
        }
    }
}
