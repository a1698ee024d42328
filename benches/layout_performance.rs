//! Performance benchmarks for layout strategies and loop orders
//!
//! This benchmark sweeps the same logical grid under every memory layout
//! and both loop-nest orders to measure their relative throughput.
//!
//! # What We're Measuring
//!
//! 1. **Layout effects** (row-major kernel, fixed thread count):
//!    - contiguous block: logically adjacent rows physically adjacent
//!    - row pointers: per-row allocations in logical order
//!    - shuffled row pointers: per-row allocations in random order
//!
//! 2. **Loop-order effects** (contiguous layout):
//!    - row-major sweep walks memory in storage order
//!    - flipped sweep strides a full row between consecutive reads
//!
//! 3. **Thread scaling** (contiguous layout, row-major kernel):
//!    - worker counts 1, 2, 4, 8 over the same sweep
//!
//! # Expected Results
//!
//! - Contiguous ≈ row pointers (the allocator usually places sequentially
//!   created rows near each other)
//! - Shuffled row pointers slower once the grid exceeds the last-level
//!   cache: the prefetcher cannot follow the permuted row placement
//! - Flipped order substantially slower than row-major at any size
//! - Near-linear thread scaling until memory bandwidth saturates
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all layout benchmarks
//! cargo bench --bench layout_performance
//!
//! # Run only the layout comparison
//! cargo bench --bench layout_performance layouts
//!
//! # Run only thread scaling
//! cargo bench --bench layout_performance threads
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;

use lapbench_rs::grid::{Grid, GridDimensions, GridLayout};
use lapbench_rs::kernel::{FlippedKernel, RowMajorKernel, StencilKernel};

/// Grid edge used throughout; large enough that a field (4 MB) exceeds
/// typical L2 caches without making `cargo bench` take minutes.
const EDGE: usize = 1024;

/// Allocate and fill a grid for one benchmark case
fn prepared_grid(layout: GridLayout) -> Grid {
    let mut grid = Grid::allocate(GridDimensions::new(EDGE, EDGE), layout)
        .expect("benchmark grid allocation");
    grid.u.fill_with(|i, j| (i * 31 + j * 7) as f32);
    grid
}

/// Compare layout strategies under the row-major kernel
fn benchmark_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    let cases = [
        ("contiguous", GridLayout::Contiguous),
        ("row-pointers", GridLayout::RowPointers),
        (
            "shuffled-row-pointers",
            GridLayout::ShuffledRowPointers { seed: Some(42) },
        ),
    ];

    for (label, layout) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(label), &layout, |b, &layout| {
            // Setup phase (NOT measured by criterion)
            let mut grid = prepared_grid(layout);
            let kernel = RowMajorKernel::new();

            // Measurement phase
            b.iter(|| {
                kernel
                    .apply(black_box(&grid.u), black_box(&mut grid.lu), 4)
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Compare loop-nest orders over the same contiguous grid
fn benchmark_loop_orders(c: &mut Criterion) {
    let mut group = c.benchmark_group("loop_orders");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("row-major", |b| {
        let mut grid = prepared_grid(GridLayout::Contiguous);
        let kernel = RowMajorKernel::new();
        b.iter(|| {
            kernel
                .apply(black_box(&grid.u), black_box(&mut grid.lu), 4)
                .unwrap()
        });
    });

    group.bench_function("flipped", |b| {
        let mut grid = prepared_grid(GridLayout::Contiguous);
        let kernel = FlippedKernel::new();
        b.iter(|| {
            kernel
                .apply(black_box(&grid.u), black_box(&mut grid.lu), 4)
                .unwrap()
        });
    });

    group.finish();
}

/// Thread scaling of the row-major kernel over a contiguous grid
fn benchmark_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("threads");
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));

    for threads in [1usize, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &threads,
            |b, &threads| {
                let mut grid = prepared_grid(GridLayout::Contiguous);
                let kernel = RowMajorKernel::new();
                b.iter(|| {
                    kernel
                        .apply(black_box(&grid.u), black_box(&mut grid.lu), threads)
                        .unwrap()
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_layouts,
    benchmark_loop_orders,
    benchmark_thread_scaling
);
criterion_main!(benches);
