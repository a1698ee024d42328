//! Benchmark harness
//!
//! This module provides the machinery that turns a kernel + layout pair
//! into a timed measurement:
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW vs WHEN)
//!
//! 1. **Mode** ([`BenchmarkMode`]) - WHAT to measure
//!    - Which layout strategy allocates the grid
//!    - Which kernel sweeps it
//!
//! 2. **Runner** ([`BenchmarkRunner`]) - HOW a measurement is executed
//!    - Dedicated worker thread, caller never blocks
//!    - Fixed iteration count, one timing sample per iteration
//!    - Results forwarded to the host as one ordered batch
//!
//! 3. **Guard** ([`RunGuard`]) - WHEN a measurement may run
//!    - Process-wide single-flight discipline
//!    - Competing requests are rejected immediately, never queued
//!
//! The host sits behind the [`Host`] trait: the runner produces a result
//! message and the host owns its delivery to whatever display surface
//! exists, so the harness carries no UI or threading assumptions.
//!
//! # Quick Start Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use lapbench_rs::bench::{BenchmarkMode, BenchmarkRunner};
//!
//! let runner = BenchmarkRunner::new();
//! let handle = runner.run(Arc::new(my_host), BenchmarkMode::PointerArray);
//!
//! // The caller is free immediately; join only if you want the results
//! // before proceeding.
//! handle.join().unwrap();
//! ```
//!
//! # Error Handling
//!
//! A rejected or failed run never propagates an error to the caller: the
//! worker logs what happened and returns without reporting results. The
//! only observable difference between "ran" and "did not run" is whether
//! the host received a result batch.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod runner;
mod timer;
mod traits;

// =================================================================================================
// Reference Configuration
// =================================================================================================

/// Number of grid rows in the reference configuration
pub const XDIM: usize = 4096;

/// Number of grid columns in the reference configuration
pub const YDIM: usize = 4096;

/// Timed kernel invocations per benchmark run
pub const TESTITRS: usize = 10;

// =================================================================================================
// Single-Flight Guard
// =================================================================================================
//
// At most one benchmark run may be in flight per process: two concurrent
// sweeps would contend for the same cores and poison each other's timings.
// The flag is a process-scoped atomic initialised at program start and
// never destroyed; acquisition is a non-blocking test-and-set, so a
// competing request learns immediately that it lost and gives up.
// =================================================================================================

use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide "a run is in flight" flag.
///
/// Acquired via [`RunGuard::try_acquire()`], released when the guard drops.
static RUN_IN_FLIGHT: AtomicBool = AtomicBool::new(false);

/// RAII handle over the process-wide single-flight flag
///
/// Holding a `RunGuard` means this thread owns the right to execute a
/// benchmark run. The flag is released when the guard is dropped, on every
/// exit path.
///
/// # Example
///
/// ```rust
/// use lapbench_rs::bench::RunGuard;
///
/// let guard = RunGuard::try_acquire().unwrap();
///
/// // A second acquisition attempt is rejected while the first is held.
/// assert!(RunGuard::try_acquire().is_none());
///
/// drop(guard);
/// assert!(RunGuard::try_acquire().is_some());
/// ```
#[derive(Debug)]
pub struct RunGuard {
    _private: (),
}

impl RunGuard {
    /// Attempt to acquire the single-flight flag without blocking
    ///
    /// Returns `None` when another run is already in flight. Never waits,
    /// never queues.
    pub fn try_acquire() -> Option<Self> {
        RUN_IN_FLIGHT
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { _private: () })
    }

    /// Check whether a run is currently in flight
    pub fn is_active() -> bool {
        RUN_IN_FLIGHT.load(Ordering::Acquire)
    }
}

impl Drop for RunGuard {
    fn drop(&mut self) {
        RUN_IN_FLIGHT.store(false, Ordering::Release);
    }
}

/// Serialise tests that exercise the process-wide flag.
///
/// Only compiled in test builds. `cargo test` runs test functions on
/// parallel threads within one process; without this lock two tests could
/// race on `RUN_IN_FLIGHT` and observe each other's runs.
#[cfg(test)]
pub(crate) fn guard_test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    // A poisoned lock only means another test panicked; the flag itself is
    // still consistent because RunGuard releases on drop during unwind.
    LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use runner::BenchmarkRunner;
pub use timer::Timer;
pub use traits::{BenchmarkMode, BenchmarkReport, Host};

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_configuration() {
        assert_eq!(XDIM, 4096);
        assert_eq!(YDIM, 4096);
        assert_eq!(TESTITRS, 10);
    }

    #[test]
    fn test_guard_rejects_second_acquisition() {
        let _serial = guard_test_lock();

        let first = RunGuard::try_acquire();
        assert!(first.is_some());
        assert!(RunGuard::is_active());

        assert!(RunGuard::try_acquire().is_none());
    }

    #[test]
    fn test_guard_releases_on_drop() {
        let _serial = guard_test_lock();

        {
            let _guard = RunGuard::try_acquire().unwrap();
            assert!(RunGuard::is_active());
        }
        // Guard dropped - flag must be back down.
        assert!(!RunGuard::is_active());
        assert!(RunGuard::try_acquire().is_some());
    }

    #[test]
    fn test_guard_visible_across_threads() {
        use std::thread;

        let _serial = guard_test_lock();

        let _guard = RunGuard::try_acquire().unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| RunGuard::try_acquire().is_none()))
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap(), "A thread acquired a held guard");
        }
    }
}
