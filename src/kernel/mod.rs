//! Stencil computation kernels
//!
//! This module contains the trait and implementations for stencil sweeps
//! over a [`GridData`](crate::grid::GridData) field.
//!
//! # Architecture
//!
//! The kernel layer is deliberately ignorant of *why* a grid was laid out
//! the way it was:
//!
//! 1. **Kernel** (`StencilKernel` trait) - the stencil expression and the
//!    loop-nest order used to evaluate it
//! 2. **Storage** (`GridData`) - where the cells physically live
//!
//! Every kernel accepts every storage variant and must produce identical
//! numeric results for identical logical content. The benchmark layer
//! exploits this to attribute timing differences purely to memory layout
//! and traversal order.
//!
//! # Available Kernels
//!
//! - **[`RowMajorKernel`]**: `i` outer, `j` inner - the natural traversal
//! - **[`FlippedKernel`]**: `j` outer, `i` inner - the cache-hostile probe

pub mod laplacian;

// Re-exports for convenience
pub use laplacian::{FlippedKernel, RowMajorKernel, StencilKernel};
