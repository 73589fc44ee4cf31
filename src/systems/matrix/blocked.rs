use super::transpose::transpose;
use super::Matrix;

/// Transpose `b` once, then every output element is a dot product of two
/// contiguous rows.
pub(super) fn multiply_cache_blocked(a: &Matrix, b: &Matrix) -> Matrix {
    let m = a.rows();
    let n = b.cols();
    let b_t = transpose(b);

    let mut out = Matrix::zeros(m, n);
    let dst = out.as_mut_slice();

    for i in 0..m {
        let a_row = a.row(i);
        for j in 0..n {
            let bt_row = b_t.row(j);
            dst[i * n + j] = a_row.iter().zip(bt_row).map(|(x, y)| x * y).sum();
        }
    }

    out
}
