//! Benchmark run orchestration
//!
//! # Run Lifecycle
//!
//! One invocation walks the fixed sequence below on a dedicated worker
//! thread, so the caller is never blocked:
//!
//! 1. Try to acquire the process-wide single-flight guard; a competing run
//!    is rejected immediately with a log entry and no side effects
//! 2. Query the host for the desired thread count - an error here is a
//!    binding failure and aborts before anything is allocated
//! 3. Emit status text (layout name, grid dimensions, thread count)
//! 4. Allocate the grid under the mode's layout strategy
//! 5. Time the kernel for the configured number of iterations
//! 6. Deliver the ordered result batch to the host
//! 7. Release the grid, then the guard
//!
//! Every failure path degrades to a logged no-op: the host simply never
//! receives a result batch.

use std::sync::Arc;
use std::thread;

use crate::bench::timer::Timer;
use crate::bench::traits::{BenchmarkMode, BenchmarkReport, Host};
use crate::bench::{RunGuard, TESTITRS, XDIM, YDIM};
use crate::grid::{Grid, GridDimensions};

// =================================================================================================
// Benchmark Runner
// =================================================================================================

/// Executes benchmark runs on dedicated worker threads
///
/// # Design
///
/// The runner owns the run *configuration* (grid dimensions, iteration
/// count); everything per-run - thread count, grid, timings - lives on the
/// worker's stack and dies with it. The same runner can launch any number
/// of sequential runs; concurrent launches beyond the first are rejected
/// by the single-flight guard, not queued.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use lapbench_rs::bench::{BenchmarkMode, BenchmarkRunner};
///
/// let runner = BenchmarkRunner::new();
/// for mode in BenchmarkMode::all() {
///     runner.run(Arc::clone(&host), mode).join().unwrap();
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkRunner {
    dimensions: GridDimensions,
    iterations: usize,
}

impl BenchmarkRunner {
    /// Create a runner with the reference configuration
    ///
    /// 4096 x 4096 grid, 10 timed iterations per run.
    pub fn new() -> Self {
        Self {
            dimensions: GridDimensions::new(XDIM, YDIM),
            iterations: TESTITRS,
        }
    }

    /// Create a runner with explicit dimensions and iteration count
    ///
    /// # Errors
    ///
    /// Returns `Err` for zero-sized dimensions or a zero iteration count.
    pub fn with_configuration(
        dimensions: GridDimensions,
        iterations: usize,
    ) -> Result<Self, String> {
        dimensions.validate()?;
        if iterations == 0 {
            return Err("Iteration count must be greater than 0".to_string());
        }
        Ok(Self {
            dimensions,
            iterations,
        })
    }

    /// Grid dimensions used for each run
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    /// Timed iterations per run
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Launch a benchmark run on a dedicated worker thread
    ///
    /// Returns immediately; the caller may join the handle to wait for the
    /// run or drop it to let the worker finish detached. Whether the run
    /// was accepted is observable only through the host: an accepted run
    /// delivers exactly one result batch, a rejected one delivers nothing.
    pub fn run<H>(&self, host: Arc<H>, mode: BenchmarkMode) -> thread::JoinHandle<()>
    where
        H: Host + 'static,
    {
        let dimensions = self.dimensions;
        let iterations = self.iterations;

        thread::spawn(move || {
            Self::execute(dimensions, iterations, host.as_ref(), mode);
        })
    }

    /// Guarded body of one benchmark run
    fn execute<H>(dimensions: GridDimensions, iterations: usize, host: &H, mode: BenchmarkMode)
    where
        H: Host + ?Sized,
    {
        // ====== Step 1: Single-flight admission ======

        // Non-blocking test-and-set; a competing run is turned away here
        // with no side effects.
        let _guard = match RunGuard::try_acquire() {
            Some(guard) => guard,
            None => {
                log::info!("Benchmark already running.");
                return;
            }
        };

        log::info!("Benchmark worker started ({}).", mode.name());

        // ====== Step 2: Host binding ======

        // The thread-count query is the first contact with the host
        // context. Failure means the worker cannot reach the host at all:
        // abort before any allocation, release the guard via drop.
        let thread_count = match host.thread_count() {
            Ok(count) => count,
            Err(e) => {
                log::error!("Failed to bind benchmark worker to host: {}", e);
                return;
            }
        };

        // ====== Step 3: Status text ======

        host.append_to_view(&format!(
            "Executing ({}) with XDIM:{} and YDIM:{} on {} threads",
            mode.name(),
            dimensions.xdim,
            dimensions.ydim,
            thread_count
        ));

        // ====== Step 4: Grid allocation ======

        let mut grid = match Grid::allocate(dimensions, mode.layout()) {
            Ok(grid) => grid,
            Err(e) => {
                log::error!("Grid allocation failed: {}", e);
                return;
            }
        };

        // ====== Step 5: Timed iterations ======

        let kernel = mode.kernel();
        let mut timer = Timer::new();
        let mut samples = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            timer.start();
            let outcome = kernel.apply(&grid.u, &mut grid.lu, thread_count);
            timer.stop();

            if let Err(e) = outcome {
                log::error!("Kernel failed at iteration {}: {}", iteration, e);
                return;
            }

            samples.push(timer.most_recent_elapsed());
        }

        // ====== Step 6: Result delivery ======

        let report = BenchmarkReport::new(samples, thread_count);
        host.display_data(&report.samples, report.thread_count);

        log::info!(
            "Benchmark worker finished ({} iterations, mean {:.3} ms).",
            report.len(),
            report.mean()
        );

        // Grid drops here (buffers released), then the guard (run slot
        // freed) - reverse declaration order gives exactly the required
        // release sequence.
    }
}

impl Default for BenchmarkRunner {
    fn default() -> Self {
        Self::new()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
