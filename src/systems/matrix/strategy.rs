use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MatrixError;

use super::blocked::multiply_cache_blocked;
use super::naive::multiply_naive;
use super::simd::multiply_simd_blocked;
use super::Matrix;

/// Multiplication tier. All tiers compute the same product; they only differ
/// in memory access pattern and vectorization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatrixStrategy {
    /// Column-major walk over `b` (cache-hostile baseline)
    Naive,
    /// Transposed `b`, both operands row-major
    #[default]
    CacheBlocked,
    /// Transposed `b`, 64x64 output tiles, 4-lane inner reduction
    SimdBlocked,
}

impl MatrixStrategy {
    pub const ALL: [MatrixStrategy; 3] = [
        MatrixStrategy::Naive,
        MatrixStrategy::CacheBlocked,
        MatrixStrategy::SimdBlocked,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatrixStrategy::Naive => "naive",
            MatrixStrategy::CacheBlocked => "cacheBlocked",
            MatrixStrategy::SimdBlocked => "simdBlocked",
        }
    }

    /// Numeric id used across the wasm boundary.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(MatrixStrategy::Naive),
            1 => Some(MatrixStrategy::CacheBlocked),
            2 => Some(MatrixStrategy::SimdBlocked),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            MatrixStrategy::Naive => 0,
            MatrixStrategy::CacheBlocked => 1,
            MatrixStrategy::SimdBlocked => 2,
        }
    }
}

impl fmt::Display for MatrixStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "naive" | "slow" => Ok(MatrixStrategy::Naive),
            "cacheBlocked" | "cache-blocked" | "fast" => Ok(MatrixStrategy::CacheBlocked),
            "simdBlocked" | "simd-blocked" | "ultra" => Ok(MatrixStrategy::SimdBlocked),
            other => Err(format!("unknown matrix strategy: {other}")),
        }
    }
}

/// Multiplication entry point with its tier fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatrixKernel {
    strategy: MatrixStrategy,
    naive_stress: bool,
}

impl MatrixKernel {
    pub fn new(strategy: MatrixStrategy) -> Self {
        Self {
            strategy,
            naive_stress: true,
        }
    }

    /// Toggle the naive tier's extra arithmetic. Other tiers ignore it.
    pub fn with_naive_stress(mut self, enabled: bool) -> Self {
        self.naive_stress = enabled;
        self
    }

    pub fn strategy(&self) -> MatrixStrategy {
        self.strategy
    }

    pub fn naive_stress(&self) -> bool {
        self.naive_stress
    }

    /// `a * b`. Returns the empty matrix when either operand is empty or
    /// `a.cols() != b.rows()`; callers check the result's shape.
    pub fn multiply(&self, a: &Matrix, b: &Matrix) -> Matrix {
        match self.try_multiply(a, b) {
            Ok(product) => product,
            Err(err) => {
                debug!(%err, strategy = %self.strategy, "matrix multiply skipped");
                Matrix::empty()
            }
        }
    }

    /// Same as [`multiply`](Self::multiply) but reports the shape problem.
    pub fn try_multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        check_product_shape(a, b)?;
        Ok(match self.strategy {
            MatrixStrategy::Naive => multiply_naive(a, b, self.naive_stress),
            MatrixStrategy::CacheBlocked => multiply_cache_blocked(a, b),
            MatrixStrategy::SimdBlocked => multiply_simd_blocked(a, b),
        })
    }
}

impl Default for MatrixKernel {
    fn default() -> Self {
        Self::new(MatrixStrategy::default())
    }
}

pub fn check_product_shape(a: &Matrix, b: &Matrix) -> Result<(), MatrixError> {
    if a.is_empty() || b.is_empty() {
        return Err(MatrixError::EmptyOperand);
    }
    if a.cols() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            a_rows: a.rows(),
            a_cols: a.cols(),
            b_rows: b.rows(),
            b_cols: b.cols(),
        });
    }
    Ok(())
}
