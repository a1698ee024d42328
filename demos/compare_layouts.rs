//! Run every benchmark mode back to back and print a timing summary
//!
//! Drives the full runner pipeline — single-flight guard, host binding,
//! grid allocation, timed kernel iterations, result delivery — against a
//! console host.
//!
//! The grid edge and thread count can be overridden from the environment:
//!
//! ```bash
//! LAPBENCH_EDGE=2048 LAPBENCH_THREADS=8 cargo run --example compare_layouts --release
//! ```

use std::sync::{Arc, Mutex};

use lapbench_rs::bench::{BenchmarkMode, BenchmarkRunner, Host, TESTITRS};
use lapbench_rs::grid::GridDimensions;

/// Host that prints status lines and collects each run's result batch
struct ConsoleHost {
    threads: usize,
    results: Mutex<Vec<(Vec<f64>, usize)>>,
}

impl Host for ConsoleHost {
    fn thread_count(&self) -> Result<usize, String> {
        Ok(self.threads)
    }

    fn append_to_view(&self, text: &str) {
        println!("{}", text);
    }

    fn display_data(&self, timings: &[f64], thread_count: usize) {
        self.results
            .lock()
            .unwrap()
            .push((timings.to_vec(), thread_count));
    }
}

fn env_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), String> {
    env_logger::init();

    // 1024 keeps a debug-friendly runtime; raise LAPBENCH_EDGE toward the
    // 4096 reference configuration for cache-pressure territory.
    let edge = env_usize("LAPBENCH_EDGE", 1024);
    let threads = env_usize("LAPBENCH_THREADS", 4);

    let runner = BenchmarkRunner::with_configuration(GridDimensions::new(edge, edge), TESTITRS)?;
    let host = Arc::new(ConsoleHost {
        threads,
        results: Mutex::new(Vec::new()),
    });

    // Runs are launched strictly one after another; launching them all at
    // once would just get every run but the first rejected by the guard.
    for mode in BenchmarkMode::all() {
        runner
            .run(Arc::clone(&host), mode)
            .join()
            .map_err(|_| "benchmark worker panicked".to_string())?;
    }

    println!();
    println!(
        "{:<24} {:>10} {:>10} {:>10}",
        "mode", "mean ms", "best ms", "worst ms"
    );

    let results = host.results.lock().map_err(|e| e.to_string())?;
    for (mode, (samples, _)) in BenchmarkMode::all().iter().zip(results.iter()) {
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        let best = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let worst = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        println!("{:<24} {:>10.3} {:>10.3} {:>10.3}", mode.name(), mean, best, worst);
    }

    Ok(())
}
