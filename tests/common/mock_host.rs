//! Mock hosts for integration testing
//!
//! These stand in for the UI layer a real deployment would attach: one
//! records everything the benchmark worker sends, one refuses the binding
//! step to exercise the abort path.

use std::sync::Mutex;

use lapbench_rs::bench::Host;

// =================================================================================================
// Recording Host
// =================================================================================================

/// Host that records every interaction for later assertions
pub struct RecordingHost {
    threads: usize,
    pub view: Mutex<Vec<String>>,
    pub reports: Mutex<Vec<(Vec<f64>, usize)>>,
}

impl RecordingHost {
    pub fn new(threads: usize) -> Self {
        Self {
            threads,
            view: Mutex::new(Vec::new()),
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Number of result batches received so far
    pub fn report_count(&self) -> usize {
        self.reports.lock().unwrap().len()
    }
}

impl Host for RecordingHost {
    fn thread_count(&self) -> Result<usize, String> {
        Ok(self.threads)
    }

    fn append_to_view(&self, text: &str) {
        self.view.lock().unwrap().push(text.to_string());
    }

    fn display_data(&self, timings: &[f64], thread_count: usize) {
        self.reports
            .lock()
            .unwrap()
            .push((timings.to_vec(), thread_count));
    }
}

// =================================================================================================
// Unbound Host
// =================================================================================================

/// Host whose binding step always fails
///
/// `append_to_view` and `display_data` panic: after a failed binding the
/// worker must never call either.
pub struct UnboundHost;

impl Host for UnboundHost {
    fn thread_count(&self) -> Result<usize, String> {
        Err("host context unavailable".to_string())
    }

    fn append_to_view(&self, _text: &str) {
        panic!("A failed binding must not produce status text");
    }

    fn display_data(&self, _timings: &[f64], _thread_count: usize) {
        panic!("A failed binding must not produce results");
    }
}
