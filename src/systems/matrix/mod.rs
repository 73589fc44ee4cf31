//! Matrix Kernel - dense f32 multiplication used as per-tick CPU load
//!
//! - matrix:    row-major storage, identity/random generators
//! - transpose: 32x32 blocked transpose shared by the fast tiers
//! - naive / blocked / simd: the three multiplication tiers
//! - strategy:  runtime tier selection behind one `multiply` name
//! - workload:  identity x random product run once per tick

#[allow(clippy::module_inception)]
mod matrix;
mod transpose;
mod naive;
mod blocked;
mod simd;
mod strategy;
mod workload;

pub use matrix::Matrix;
pub use naive::{STRESS_EPSILON, STRESS_NUDGE};
pub use simd::{backend_name as simd_backend_name, LANES, SIMD_TILE};
pub use strategy::{check_product_shape, MatrixKernel, MatrixStrategy};
pub use transpose::{transpose, TRANSPOSE_TILE};
pub use workload::MatrixWorkload;

/// Free-function form of [`MatrixKernel::multiply`].
pub fn multiply(strategy: MatrixStrategy, a: &Matrix, b: &Matrix) -> Matrix {
    MatrixKernel::new(strategy).multiply(a, b)
}
