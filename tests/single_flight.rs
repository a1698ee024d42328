//! Integration tests: single-flight discipline of the benchmark runner
//!
//! The process-wide guard admits one run at a time; everything here drives
//! the runner through its accept / reject / abort paths and counts what the
//! host actually receives.

use std::sync::mpsc;
use std::sync::{Arc, Mutex, MutexGuard};

use lapbench_rs::bench::{BenchmarkMode, BenchmarkRunner, Host};
use lapbench_rs::grid::GridDimensions;

mod common;
use common::{RecordingHost, UnboundHost};

/// Serialise the tests in this binary: they all touch the process-wide
/// single-flight flag and must not observe each other's runs.
fn serial() -> MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

fn small_runner() -> BenchmarkRunner {
    BenchmarkRunner::with_configuration(GridDimensions::new(16, 16), 3).unwrap()
}

// =================================================================================================
// Gated Host
// =================================================================================================

/// Host whose binding step blocks until the test releases it
///
/// Lets a test hold a run "in flight" at a precisely known point so a
/// competing request can be issued while the guard is taken.
struct GatedHost {
    entered: Mutex<mpsc::Sender<()>>,
    release: Mutex<mpsc::Receiver<()>>,
    reports: Mutex<Vec<(Vec<f64>, usize)>>,
}

impl GatedHost {
    fn new() -> (Arc<Self>, mpsc::Receiver<()>, mpsc::Sender<()>) {
        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let host = Arc::new(Self {
            entered: Mutex::new(entered_tx),
            release: Mutex::new(release_rx),
            reports: Mutex::new(Vec::new()),
        });
        (host, entered_rx, release_tx)
    }
}

impl Host for GatedHost {
    fn thread_count(&self) -> Result<usize, String> {
        // Tell the test we are inside a guarded run, then wait for it.
        self.entered.lock().unwrap().send(()).ok();
        self.release
            .lock()
            .unwrap()
            .recv()
            .map_err(|e| e.to_string())?;
        Ok(2)
    }

    fn append_to_view(&self, _text: &str) {}

    fn display_data(&self, timings: &[f64], thread_count: usize) {
        self.reports
            .lock()
            .unwrap()
            .push((timings.to_vec(), thread_count));
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[test]
fn test_concurrent_request_rejected() {
    let _serial = serial();

    let runner = small_runner();
    let (gated, entered, release) = GatedHost::new();

    // First run: acquires the guard, then parks inside the binding step.
    let first = runner.run(Arc::clone(&gated), BenchmarkMode::ContiguousArray);
    entered.recv().unwrap();

    // Second run while the first is in flight: must be turned away
    // immediately without queueing.
    let rejected_host = Arc::new(RecordingHost::new(2));
    runner
        .run(Arc::clone(&rejected_host), BenchmarkMode::PointerArray)
        .join()
        .unwrap();

    assert_eq!(rejected_host.report_count(), 0);
    assert!(rejected_host.view.lock().unwrap().is_empty());
    assert!(gated.reports.lock().unwrap().is_empty());

    // Let the first run finish; it alone reports, with all its samples.
    release.send(()).unwrap();
    first.join().unwrap();

    let reports = gated.reports.lock().unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].0.len(), 3);
    assert_eq!(reports[0].1, 2);
}

#[test]
fn test_sequential_runs_each_report_once() {
    let _serial = serial();

    let runner = small_runner();
    let host = Arc::new(RecordingHost::new(4));

    runner
        .run(Arc::clone(&host), BenchmarkMode::ShuffledPointerArray)
        .join()
        .unwrap();
    runner
        .run(Arc::clone(&host), BenchmarkMode::FlippedLoopOrder)
        .join()
        .unwrap();

    let reports = host.reports.lock().unwrap();
    assert_eq!(reports.len(), 2);
    for (samples, threads) in reports.iter() {
        assert_eq!(samples.len(), 3);
        assert_eq!(*threads, 4);
    }

    let view = host.view.lock().unwrap();
    assert!(view[0].contains("shuffled-pointer-array"));
    assert!(view[1].contains("flipped-loop-order"));
}

#[test]
fn test_binding_failure_leaves_runner_usable() {
    let _serial = serial();

    let runner = small_runner();

    // Aborted run: the UnboundHost panics if anything beyond the binding
    // step is attempted, so joining cleanly proves the silent no-op.
    runner
        .run(Arc::new(UnboundHost), BenchmarkMode::ContiguousArray)
        .join()
        .unwrap();

    // The guard must have been released: a follow-up run is accepted.
    let host = Arc::new(RecordingHost::new(1));
    runner
        .run(Arc::clone(&host), BenchmarkMode::ContiguousArray)
        .join()
        .unwrap();

    assert_eq!(host.report_count(), 1);
}
