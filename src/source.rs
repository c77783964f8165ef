//! Matrix sources
use crate::error::{check_dimension, Result, TransformError};
use crate::types::Value;
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest generated value
pub const MIN_VALUE: Value = 10;
/// Largest generated value
pub const MAX_VALUE: Value = 99;

/// Provides the matrix that is sent through the transform
pub trait MatrixSource {
    /// Return a `rows` x `cols` matrix
    fn generate(&mut self, rows: usize, cols: usize) -> Result<Array2<Value>>;
}

/// Uniformly distributed integers in `[low, high]`
pub struct RandomSource {
    rng: StdRng,
    low: Value,
    high: Value,
}

impl RandomSource {
    /// Entropy seeded source with values in `[10, 99]`
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible source with values in `[10, 99]`
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            low: MIN_VALUE,
            high: MAX_VALUE,
        }
    }

    /// Change value range (inclusive)
    ///
    /// # Errors
    /// [`TransformError::InvalidRange`] if `low > high`
    pub fn range(mut self, low: Value, high: Value) -> Result<Self> {
        if low > high {
            return Err(TransformError::InvalidRange {
                low: low.into(),
                high: high.into(),
            });
        }
        self.low = low;
        self.high = high;
        Ok(self)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MatrixSource for RandomSource {
    fn generate(&mut self, rows: usize, cols: usize) -> Result<Array2<Value>> {
        check_dimension(rows, cols)?;
        let (low, high) = (self.low, self.high);
        let rng = &mut self.rng;
        Ok(Array2::from_shape_simple_fn((rows, cols), || {
            rng.gen_range(low..=high)
        }))
    }
}

/// Returns a fixed matrix, independent of the calls
pub struct FixedSource {
    matrix: Array2<Value>,
}

impl FixedSource {
    pub fn new(matrix: Array2<Value>) -> Self {
        Self { matrix }
    }
}

impl MatrixSource for FixedSource {
    fn generate(&mut self, rows: usize, cols: usize) -> Result<Array2<Value>> {
        check_dimension(rows, cols)?;
        if self.matrix.dim() != (rows, cols) {
            return Err(TransformError::ShapeMismatch {
                expected: rows * cols,
                found: self.matrix.len(),
            });
        }
        Ok(self.matrix.clone())
    }
}
