use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::algorithms::random_clusterer::RandomClusterer;
use crate::algorithms::runner::{AlgorithmRun, RunError};
use crate::algorithms::RunConfig;
use crate::render::{drain_into, snapshot_channel, Snapshot};
use crate::tests::test_data::{make_square, RecordingSink};

fn clusterer_run(config: RunConfig) -> (AlgorithmRun, Receiver<Snapshot>) {
    let dataset = Arc::new(Mutex::new(make_square()));
    let (tx, rx) = snapshot_channel();
    let algo = Box::new(RandomClusterer::new(2).with_seed(1));
    let run = AlgorithmRun::new(algo, config, dataset, tx).with_step_delay(Duration::ZERO);
    (run, rx)
}

#[test]
fn continuous_run_emits_floor_of_budget_over_interval() {
    crate::tests::init();

    let (mut run, rx) = clusterer_run(RunConfig::new(10, 3, true));
    run.execute().unwrap();
    run.wait();

    assert!(run.finished());
    assert_eq!(run.current_iteration(), 0);

    let snapshots: Vec<Snapshot> = rx.try_iter().collect();
    let iterations: Vec<usize> = snapshots.iter().map(|s| s.iteration).collect();
    assert_eq!(iterations, vec![3, 6, 9]);
    // Every snapshot carries the whole dataset, consistently grouped.
    for snapshot in &snapshots {
        let total: usize = snapshot.series.values().map(Vec::len).sum();
        assert_eq!(total, 4);
    }
}

#[test]
fn manual_run_finishes_after_ceil_of_budget_over_interval() {
    let (mut run, rx) = clusterer_run(RunConfig::new(10, 3, false));
    run.execute().unwrap();
    assert!(!run.finished());

    // ceil(10 / 3) = 4 triggers; the first three leave the run unfinished.
    for _ in 0..3 {
        run.step().unwrap();
        assert!(!run.finished());
    }
    run.step().unwrap();

    assert!(run.finished());
    assert_eq!(run.current_iteration(), 0);
    assert_eq!(run.step(), Err(RunError::NotRunning));
    assert_eq!(rx.try_iter().count(), 4);
}

#[test]
fn manual_run_with_exact_division_finishes_on_the_last_multiple() {
    let (mut run, rx) = clusterer_run(RunConfig::new(9, 3, false));
    run.execute().unwrap();

    run.step().unwrap();
    run.step().unwrap();
    assert!(!run.finished());
    run.step().unwrap();
    assert!(run.finished());

    let iterations: Vec<usize> = rx.try_iter().map(|s| s.iteration).collect();
    assert_eq!(iterations, vec![3, 6, 9]);
}

#[test]
fn execute_is_rejected_while_running_and_allowed_after() {
    let (mut run, _rx) = clusterer_run(RunConfig::new(2, 1, false));
    run.execute().unwrap();
    assert_eq!(run.execute(), Err(RunError::AlreadyRunning));

    run.step().unwrap();
    run.step().unwrap();
    assert!(run.finished());

    // A completed run can be executed again from scratch.
    run.execute().unwrap();
    assert!(!run.finished());
    run.step().unwrap();
    run.step().unwrap();
    assert!(run.finished());
}

#[test]
fn manual_steps_are_rejected_on_a_continuous_run() {
    let (mut run, _rx) = clusterer_run(RunConfig::new(4, 2, true));
    assert_eq!(run.step(), Err(RunError::WrongMode));
    run.execute().unwrap();
    assert_eq!(run.step(), Err(RunError::WrongMode));
    run.wait();
}

#[test]
fn oversized_interval_yields_zero_progress_manual() {
    let (mut run, rx) = clusterer_run(RunConfig::new(3, 5, false));
    run.execute().unwrap();

    // The run completes immediately and stays idle.
    assert!(run.finished());
    assert_eq!(run.step(), Err(RunError::NotRunning));
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn oversized_interval_yields_zero_progress_continuous() {
    let (mut run, rx) = clusterer_run(RunConfig::new(3, 5, true));
    run.execute().unwrap();
    run.wait();

    assert!(run.finished());
    assert_eq!(rx.try_iter().count(), 0);
}

#[test]
fn snapshots_drain_into_sink_as_clear_plus_replace() {
    let (mut run, rx) = clusterer_run(RunConfig::new(4, 2, true));
    run.execute().unwrap();
    run.wait();

    let mut sink = RecordingSink::default();
    let applied = drain_into(&rx, &mut sink);
    assert_eq!(applied, 2);
    assert_eq!(sink.clears, 2);
    assert_eq!(sink.replaced.len(), 2);
}
