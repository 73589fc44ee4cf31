// ============================================================================
// SIMD-BLOCKED MATRIX MULTIPLY
// ============================================================================
//
// 128-bit vectors everywhere we can get them without runtime detection:
// - x86_64:  SSE (baseline for the target)
// - aarch64: NEON (baseline for the target)
// - wasm32:  simd128 when built with `-C target-feature=+simd128`
// Anything else falls back to a 4-way unrolled scalar accumulator.

use super::transpose::transpose;
use super::Matrix;

/// Edge of the square (row, col) output tiles
pub const SIMD_TILE: usize = 64;
/// f32 lanes per vector
pub const LANES: usize = 4;

/// Name of the compiled lane backend (for logs and perf overlays).
pub fn backend_name() -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        "sse"
    }
    #[cfg(target_arch = "aarch64")]
    {
        "neon"
    }
    #[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
    {
        "simd128"
    }
    #[cfg(not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        all(target_arch = "wasm32", target_feature = "simd128")
    )))]
    {
        "scalar-unrolled"
    }
}

pub(super) fn multiply_simd_blocked(a: &Matrix, b: &Matrix) -> Matrix {
    let m = a.rows();
    let n = b.cols();
    let b_t = transpose(b);

    let mut out = Matrix::zeros(m, n);
    let dst = out.as_mut_slice();

    for ii in (0..m).step_by(SIMD_TILE) {
        let i_end = (ii + SIMD_TILE).min(m);
        for jj in (0..n).step_by(SIMD_TILE) {
            let j_end = (jj + SIMD_TILE).min(n);

            for i in ii..i_end {
                let a_row = a.row(i);
                for j in jj..j_end {
                    dst[i * n + j] = dot_lanes(a_row, b_t.row(j));
                }
            }
        }
    }

    out
}

/// Dot product of two equal-length rows, 4 lanes at a time plus a scalar tail.
#[cfg(target_arch = "x86_64")]
#[inline]
pub(super) fn dot_lanes(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    let len = a.len().min(b.len());
    let body = len - len % LANES;

    // SAFETY: SSE is always available on x86_64; unaligned loads stay below `body <= len`.
    let mut sum = unsafe {
        let mut acc = _mm_setzero_ps();
        let mut k = 0;
        while k < body {
            let va = _mm_loadu_ps(a.as_ptr().add(k));
            let vb = _mm_loadu_ps(b.as_ptr().add(k));
            acc = _mm_add_ps(acc, _mm_mul_ps(va, vb));
            k += LANES;
        }
        let mut lanes = [0.0f32; LANES];
        _mm_storeu_ps(lanes.as_mut_ptr(), acc);
        lanes[0] + lanes[1] + lanes[2] + lanes[3]
    };

    for k in body..len {
        sum += a[k] * b[k];
    }
    sum
}

#[cfg(target_arch = "aarch64")]
#[inline]
pub(super) fn dot_lanes(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::aarch64::*;

    let len = a.len().min(b.len());
    let body = len - len % LANES;

    // SAFETY: NEON is always available on aarch64; loads stay below `body <= len`.
    let mut sum = unsafe {
        let mut acc = vdupq_n_f32(0.0);
        let mut k = 0;
        while k < body {
            let va = vld1q_f32(a.as_ptr().add(k));
            let vb = vld1q_f32(b.as_ptr().add(k));
            acc = vfmaq_f32(acc, va, vb);
            k += LANES;
        }
        vaddvq_f32(acc)
    };

    for k in body..len {
        sum += a[k] * b[k];
    }
    sum
}

#[cfg(all(target_arch = "wasm32", target_feature = "simd128"))]
#[inline]
pub(super) fn dot_lanes(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::wasm32::*;

    let len = a.len().min(b.len());
    let body = len - len % LANES;

    // SAFETY: simd128 is enabled for this build; v128_load tolerates unaligned pointers.
    let mut sum = unsafe {
        let mut acc = f32x4_splat(0.0);
        let mut k = 0;
        while k < body {
            let va = v128_load(a.as_ptr().add(k) as *const v128);
            let vb = v128_load(b.as_ptr().add(k) as *const v128);
            acc = f32x4_add(acc, f32x4_mul(va, vb));
            k += LANES;
        }
        f32x4_extract_lane::<0>(acc)
            + f32x4_extract_lane::<1>(acc)
            + f32x4_extract_lane::<2>(acc)
            + f32x4_extract_lane::<3>(acc)
    };

    for k in body..len {
        sum += a[k] * b[k];
    }
    sum
}

#[cfg(not(any(
    target_arch = "x86_64",
    target_arch = "aarch64",
    all(target_arch = "wasm32", target_feature = "simd128")
)))]
#[inline]
pub(super) fn dot_lanes(a: &[f32], b: &[f32]) -> f32 {
    dot_unrolled(a, b)
}

/// Scalar fallback: four independent accumulators.
#[allow(dead_code)]
#[inline]
pub(super) fn dot_unrolled(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    let body = len - len % LANES;

    let (mut s0, mut s1, mut s2, mut s3) = (0.0f32, 0.0f32, 0.0f32, 0.0f32);
    let mut k = 0;
    while k < body {
        s0 += a[k] * b[k];
        s1 += a[k + 1] * b[k + 1];
        s2 += a[k + 2] * b[k + 2];
        s3 += a[k + 3] * b[k + 3];
        k += LANES;
    }

    let mut sum = (s0 + s1) + (s2 + s3);
    for k in body..len {
        sum += a[k] * b[k];
    }
    sum
}
