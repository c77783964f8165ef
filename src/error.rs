//! Error type shared by all operations of the crate
use thiserror::Error;

/// Errors raised while building, applying or formatting a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Rows or columns are smaller than one, or the matrix is too large
    #[error("invalid dimension: rows={rows}, cols={cols} (both must be >= 1, product at most isize::MAX)")]
    InvalidDimension { rows: usize, cols: usize },

    /// Buffer length does not fit the requested shape
    #[error("shape mismatch: expected {expected} elements, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// Command line input is missing or not a positive integer
    #[error("{0}")]
    ArgumentError(String),

    /// Lower bound of a value range exceeds the upper bound
    #[error("empty value range [{low}, {high}]")]
    InvalidRange { low: i64, high: i64 },

    /// Descriptor violates ordering or bounds
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Exchange of the send buffer failed
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Result alias with [`TransformError`]
pub type Result<T> = std::result::Result<T, TransformError>;

/// Reject shapes with a zero extent or more than `isize::MAX` elements
///
/// Every flat offset `row * cols + col` of an accepted shape fits into
/// `usize`, and ndarray accepts the shape.
pub(crate) fn check_dimension(rows: usize, cols: usize) -> Result<()> {
    if rows < 1 || cols < 1 {
        return Err(TransformError::InvalidDimension { rows, cols });
    }
    match rows.checked_mul(cols) {
        Some(n) if n <= isize::MAX as usize => Ok(()),
        _ => Err(TransformError::InvalidDimension { rows, cols }),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension(1, 1).is_ok());
        assert!(check_dimension(3, isize::MAX as usize / 3).is_ok());
        assert!(check_dimension(0, 5).is_err());
        assert!(check_dimension(2, isize::MAX as usize).is_err());
        assert_eq!(
            check_dimension(2, usize::MAX),
            Err(TransformError::InvalidDimension {
                rows: 2,
                cols: usize::MAX
            })
        );
    }
}
