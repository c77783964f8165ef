//! Row-major linearisation of two-dimensional matrices
//!
//! The flat index of element `(i, j)` of a matrix with `cols` columns is
//! $$
//! k = i \cdot cols + j
//! $$
use crate::error::{check_dimension, Result, TransformError};
use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Linearise `matrix` in row-major order
///
/// The logical order is used, so column-major (`.f()`) arrays
/// are flattened the same way as standard layout arrays.
pub fn flatten<S, T>(matrix: &ArrayBase<S, Ix2>) -> Vec<T>
where
    S: Data<Elem = T>,
    T: Clone,
{
    matrix.iter().cloned().collect()
}

/// Restore a `rows` x `cols` matrix from its row-major linearisation
///
/// # Errors
/// [`TransformError::InvalidDimension`] for zero rows or columns,
/// [`TransformError::ShapeMismatch`] if `flat` has not exactly
/// `rows * cols` elements.
pub fn unflatten<T: Clone>(flat: &[T], rows: usize, cols: usize) -> Result<Array2<T>> {
    check_dimension(rows, cols)?;
    let expected = rows * cols;
    if flat.len() != expected {
        return Err(TransformError::ShapeMismatch {
            expected,
            found: flat.len(),
        });
    }
    Array2::from_shape_vec((rows, cols), flat.to_vec()).map_err(|_| {
        TransformError::ShapeMismatch {
            expected,
            found: flat.len(),
        }
    })
}
