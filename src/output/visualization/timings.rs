//! Timing plots for benchmark reports
//!
//! This module renders per-iteration elapsed times as line plots, either
//! for a single run or as an overlay comparing several runs (typically the
//! four benchmark modes on the same grid).
//!
//! # Available functions
//!
//! - [`plot_timings`]            — Single run: elapsed ms vs iteration
//! - [`plot_timings_comparison`] — Overlay several runs on the same axes
//!
//! # Usage
//!
//! ```rust,ignore
//! use lapbench_rs::output::visualization::{plot_timings, plot_timings_comparison};
//!
//! plot_timings(&report, "pointer_array.png", None)?;
//!
//! plot_timings_comparison(
//!     vec![
//!         ("contiguous-array", &contiguous_report),
//!         ("shuffled-pointer-array", &shuffled_report),
//!     ],
//!     "comparison.svg",
//!     None,
//! )?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use crate::bench::BenchmarkReport;

// =================================================================================================
// Public API
// =================================================================================================

/// Plot one run's elapsed times against iteration index
///
/// # Arguments
///
/// * `report`      — Benchmark report with the ordered samples
/// * `output_path` — Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` for an empty report or when the backend cannot write to
/// `output_path`.
pub fn plot_timings(
    report: &BenchmarkReport,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if report.is_empty() {
        return Err("No timing samples to plot".into());
    }

    let default_config = PlotConfig::timings(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_elapsed = report.slowest().max(1e-10);
    let iterations = report.len();

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_timings_impl(backend, &report.samples, iterations, config, max_elapsed)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_timings_impl(backend, &report.samples, iterations, config, max_elapsed)
        }
    }
}

/// Plot several runs' elapsed times overlaid for comparison
///
/// Each run is drawn with a distinct colour from the configured palette and
/// labelled in the legend, so layout effects are visible at a glance.
///
/// # Arguments
///
/// * `datasets`    — Vec of `(label, report)` pairs
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `datasets` is empty, any report is empty, or the
/// backend fails.
pub fn plot_timings_comparison(
    datasets: Vec<(&str, &BenchmarkReport)>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if datasets.is_empty() {
        return Err("No datasets provided".into());
    }
    if datasets.iter().any(|(_, report)| report.is_empty()) {
        return Err("Every dataset needs at least one timing sample".into());
    }

    let default_config = PlotConfig::timings(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_elapsed = datasets
        .iter()
        .map(|(_, report)| report.slowest())
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let iterations = datasets
        .iter()
        .map(|(_, report)| report.len())
        .max()
        .unwrap_or(1);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, iterations, config, max_elapsed)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, &datasets, iterations, config, max_elapsed)
        }
    }
}

// =================================================================================================
// Rendering
// =================================================================================================

/// Render a single timing curve
fn plot_timings_impl<DB: DrawingBackend>(
    backend: DB,
    samples: &[f64],
    iterations: usize,
    config: &PlotConfig,
    max_elapsed: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..(iterations.max(2) - 1) as f64, 0.0..(max_elapsed * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    chart
        .draw_series(LineSeries::new(
            samples.iter().enumerate().map(|(i, ms)| (i as f64, *ms)),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("Elapsed")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Render overlaid timing curves for comparison
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    datasets: &[(&str, &BenchmarkReport)],
    iterations: usize,
    config: &PlotConfig,
    max_elapsed: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..(iterations.max(2) - 1) as f64, 0.0..(max_elapsed * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.0}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (idx, (label, report)) in datasets.iter().enumerate() {
        let color = config.get_series_color(idx);

        chart
            .draw_series(LineSeries::new(
                report
                    .samples
                    .iter()
                    .enumerate()
                    .map(|(i, ms)| (i as f64, *ms)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
