use super::Matrix;

/// Tile edge of the blocked transpose
pub const TRANSPOSE_TILE: usize = 32;

/// Blocked transpose. Pure data movement, so the round trip is exact.
pub fn transpose(input: &Matrix) -> Matrix {
    if input.is_empty() {
        return Matrix::empty();
    }

    let rows = input.rows();
    let cols = input.cols();
    let mut output = Matrix::zeros(cols, rows);
    transpose_into(input.as_slice(), rows, cols, output.as_mut_slice());
    output
}

/// Transpose row-major `src` (`rows x cols`) into `dst` (`cols x rows`).
fn transpose_into(src: &[f32], rows: usize, cols: usize, dst: &mut [f32]) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    for i in (0..rows).step_by(TRANSPOSE_TILE) {
        let max_i = (i + TRANSPOSE_TILE).min(rows);
        for j in (0..cols).step_by(TRANSPOSE_TILE) {
            let max_j = (j + TRANSPOSE_TILE).min(cols);

            for ii in i..max_i {
                let src_row = ii * cols;
                for jj in j..max_j {
                    dst[jj * rows + ii] = src[src_row + jj];
                }
            }
        }
    }
}
