use rand::Rng;

use super::{Matrix, MatrixKernel, MatrixStrategy};

/// Fixed operands multiplied once per tick purely as CPU load.
///
/// The transform is an identity; the state is random. The product is kept so
/// the work cannot be optimized away and can be checksummed.
pub struct MatrixWorkload {
    kernel: MatrixKernel,
    transform: Matrix,
    state: Matrix,
    result: Matrix,
}

impl MatrixWorkload {
    pub fn new<R: Rng + ?Sized>(size: usize, kernel: MatrixKernel, rng: &mut R) -> Self {
        Self {
            kernel,
            transform: Matrix::identity(size),
            state: Matrix::random(size, size, rng),
            result: Matrix::zeros(size, size),
        }
    }

    /// One `transform * state` product; returns it.
    pub fn run(&mut self) -> &Matrix {
        self.result = self.kernel.multiply(&self.transform, &self.state);
        &self.result
    }

    pub fn size(&self) -> usize {
        self.transform.rows()
    }

    pub fn kernel(&self) -> MatrixKernel {
        self.kernel
    }

    pub fn set_strategy(&mut self, strategy: MatrixStrategy) {
        self.kernel = MatrixKernel::new(strategy).with_naive_stress(self.kernel.naive_stress());
    }

    pub fn state(&self) -> &Matrix {
        &self.state
    }

    pub fn last_result(&self) -> &Matrix {
        &self.result
    }

    pub fn checksum(&self) -> f64 {
        self.result.checksum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::{subsystem_rng, STREAM_MATRIX};

    #[test]
    fn identity_load_reproduces_state() {
        let mut rng = subsystem_rng(Some(2), STREAM_MATRIX);
        let kernel = MatrixKernel::new(MatrixStrategy::SimdBlocked);
        let mut load = MatrixWorkload::new(48, kernel, &mut rng);
        let product = load.run().clone();
        assert!(product.max_abs_diff(load.state()).unwrap() < 1e-6);
        assert!((load.checksum() - load.state().checksum()).abs() < 1e-3);
    }

    #[test]
    fn switching_strategy_keeps_stress_flag() {
        let mut rng = subsystem_rng(Some(2), STREAM_MATRIX);
        let kernel = MatrixKernel::new(MatrixStrategy::Naive).with_naive_stress(false);
        let mut load = MatrixWorkload::new(8, kernel, &mut rng);
        load.set_strategy(MatrixStrategy::CacheBlocked);
        assert_eq!(load.kernel().strategy(), MatrixStrategy::CacheBlocked);
        assert!(!load.kernel().naive_stress());
    }

    #[test]
    fn zero_size_load_is_a_no_op() {
        let mut rng = subsystem_rng(Some(2), STREAM_MATRIX);
        let mut load = MatrixWorkload::new(0, MatrixKernel::default(), &mut rng);
        assert!(load.run().is_empty());
        assert_eq!(load.size(), 0);
    }
}
