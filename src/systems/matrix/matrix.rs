use rand::Rng;

use super::transpose::transpose;

/// Dense row-major `rows x cols` matrix of f32.
///
/// A matrix with zero rows or zero columns is normalized to the empty `0 x 0`
/// matrix, which is also what the kernel returns on invalid input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// All zeros. A shape whose element count overflows `usize` is empty.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        match element_count(rows, cols) {
            Some(len) if len > 0 => Self {
                rows,
                cols,
                data: vec![0.0; len],
            },
            _ => Self::empty(),
        }
    }

    /// `n x n` with 1.0 on the diagonal.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        let n = m.rows;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    /// Every element uniform in [-1, 1].
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut m = Self::zeros(rows, cols);
        m.data
            .iter_mut()
            .for_each(|x| *x = rng.random_range(-1.0..=1.0));
        m
    }

    /// Wrap row-major `data`. Returns `None` when the length does not match.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Option<Self> {
        if element_count(rows, cols) != Some(data.len()) {
            return None;
        }
        if data.is_empty() {
            return Some(Self::empty());
        }
        Some(Self { rows, cols, data })
    }

    /// Build from nested rows; ragged input yields `None`.
    pub fn from_rows(rows: &[Vec<f32>]) -> Option<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != cols) {
            return None;
        }
        let data = rows.iter().flatten().copied().collect();
        Self::from_vec(rows.len(), cols, data)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub(super) fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn transpose(&self) -> Matrix {
        transpose(self)
    }

    /// Sum of all elements. Keeps benchmark work observable.
    pub fn checksum(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }

    /// Largest absolute element-wise difference; `None` on shape mismatch.
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f32> {
        if self.rows != other.rows || self.cols != other.cols {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0f32, f32::max),
        )
    }
}

#[inline]
fn element_count(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{subsystem_rng, STREAM_MATRIX};

    #[test]
    fn identity_has_unit_diagonal() {
        let m = Matrix::identity(4);
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(m.get(i, j), if i == j { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn random_is_within_unit_range() {
        let mut rng = subsystem_rng(Some(5), STREAM_MATRIX);
        let m = Matrix::random(17, 9, &mut rng);
        assert_eq!((m.rows(), m.cols()), (17, 9));
        assert!(m.as_slice().iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn degenerate_shapes_are_empty() {
        assert!(Matrix::zeros(0, 5).is_empty());
        assert_eq!(Matrix::zeros(3, 0).rows(), 0);
        assert!(Matrix::identity(0).is_empty());
    }

    #[test]
    fn overflowing_shapes_fail_soft() {
        let huge = usize::MAX / 2 + 1;
        assert!(Matrix::zeros(huge, 4).is_empty());
        assert!(Matrix::identity(huge).is_empty());
        assert!(Matrix::from_vec(huge, 4, vec![0.0; 4]).is_none());
        let mut rng = crate::core::rng::subsystem_rng(Some(1), crate::core::rng::STREAM_MATRIX);
        assert!(Matrix::random(4, huge, &mut rng).is_empty());
    }

    #[test]
    fn from_rows_rejects_ragged() {
        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_none());
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.get(1, 0), 3.0);
    }
}
