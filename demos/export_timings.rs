//! Benchmark two layouts and export the timings to CSV and SVG
//!
//! Produces `layout_timings.csv` and `layout_timings.svg` in the working
//! directory: the CSV holds the per-iteration samples side by side, the SVG
//! overlays both timing curves.

use std::error::Error;
use std::sync::{Arc, Mutex};

use lapbench_rs::bench::{BenchmarkMode, BenchmarkReport, BenchmarkRunner, Host};
use lapbench_rs::grid::GridDimensions;
use lapbench_rs::output::export::export_timings_multi_csv;
use lapbench_rs::output::visualization::{plot_timings_comparison, PlotConfig};

/// Host that keeps the result batches and stays quiet otherwise
struct CollectingHost {
    threads: usize,
    results: Mutex<Vec<BenchmarkReport>>,
}

impl Host for CollectingHost {
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
            .push(BenchmarkReport::new(timings.to_vec(), thread_count));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let modes = [
        BenchmarkMode::ContiguousArray,
        BenchmarkMode::ShuffledPointerArray,
    ];

    let runner = BenchmarkRunner::with_configuration(GridDimensions::new(1024, 1024), 10)?;
    let host = Arc::new(CollectingHost {
        threads: 4,
        results: Mutex::new(Vec::new()),
    });

    for mode in modes {
        runner
            .run(Arc::clone(&host), mode)
            .join()
            .map_err(|_| "benchmark worker panicked")?;
    }

    let reports = host.results.lock().map_err(|e| e.to_string())?;
    let labels: Vec<&str> = modes.iter().map(|m| m.name()).collect();
    let sample_sets: Vec<Vec<f64>> = reports.iter().map(|r| r.samples.clone()).collect();

    export_timings_multi_csv(&sample_sets, &labels, "layout_timings.csv", None)?;

    let config = PlotConfig::timings("Contiguous vs Shuffled Row Pointers");
    let datasets: Vec<(&str, &BenchmarkReport)> = labels
        .iter()
        .copied()
        .zip(reports.iter())
        .collect();
    plot_timings_comparison(datasets, "layout_timings.svg", Some(&config))?;

    println!("Wrote layout_timings.csv and layout_timings.svg");
    Ok(())
}
