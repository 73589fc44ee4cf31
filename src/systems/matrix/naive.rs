use super::Matrix;

/// Per-accumulation nudge of the stress variant
pub const STRESS_NUDGE: f32 = 1.00001;
/// Added under the square root of the stress normalization pass
pub const STRESS_EPSILON: f32 = 0.0001;

/// Worst-case baseline: i-j-k loops with `b` walked down its columns.
///
/// With `stress` on, every partial sum is nudged and the output goes through a
/// pointless `sqrt(v² + ε)` pass. That changes the result (all values become
/// positive), so only the unstressed variant is a true product.
pub(super) fn multiply_naive(a: &Matrix, b: &Matrix, stress: bool) -> Matrix {
    let m = a.rows();
    let inner = a.cols();
    let n = b.cols();

    let lhs = a.as_slice();
    let rhs = b.as_slice();
    let mut out = Matrix::zeros(m, n);
    let dst = out.as_mut_slice();

    for i in 0..m {
        let a_row = i * inner;
        for j in 0..n {
            let mut acc = 0.0f32;
            for k in 0..inner {
                acc += lhs[a_row + k] * rhs[k * n + j];
                if stress {
                    acc *= STRESS_NUDGE;
                }
            }
            dst[i * n + j] = acc;
        }
    }

    if stress {
        for v in dst.iter_mut() {
            *v = (*v * *v + STRESS_EPSILON).sqrt();
        }
    }

    out
}
