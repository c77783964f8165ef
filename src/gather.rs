//! Gather and scatter through a [`BlockDescriptor`]
//!
//! Local stand-in for a send with an indexed datatype: `gather` packs the
//! selected elements contiguously, `scatter` unpacks them into a buffer of
//! the full extent.
use crate::descriptor::BlockDescriptor;
use crate::error::{Result, TransformError};
use crate::types::Scalar;

/// Copy all blocks of `descriptor` from `flat`, in block order
///
/// # Errors
/// [`TransformError::ShapeMismatch`] if `flat` does not have exactly
/// `rows * cols` elements of the descriptor. Debug builds also return
/// [`TransformError::InvalidDescriptor`] for unordered or out of bounds
/// blocks.
pub fn gather<T: Clone>(flat: &[T], descriptor: &BlockDescriptor) -> Result<Vec<T>> {
    let extent = descriptor.extent();
    if flat.len() != extent {
        return Err(TransformError::ShapeMismatch {
            expected: extent,
            found: flat.len(),
        });
    }
    #[cfg(debug_assertions)]
    descriptor.validate()?;
    let mut gathered = Vec::with_capacity(descriptor.selected_len());
    for block in descriptor {
        gathered.extend_from_slice(&flat[block.offset..block.end()]);
    }
    tracing::debug!(
        extent,
        gathered = gathered.len(),
        "gathered {} blocks",
        descriptor.len()
    );
    Ok(gathered)
}

/// Place a gathered buffer back at the descriptor offsets
///
/// Positions outside the descriptor are zero.
///
/// # Errors
/// [`TransformError::ShapeMismatch`] if `gathered` does not have exactly
/// [`BlockDescriptor::selected_len`] elements.
pub fn scatter<T: Scalar>(gathered: &[T], descriptor: &BlockDescriptor) -> Result<Vec<T>> {
    let expected = descriptor.selected_len();
    if gathered.len() != expected {
        return Err(TransformError::ShapeMismatch {
            expected,
            found: gathered.len(),
        });
    }
    #[cfg(debug_assertions)]
    descriptor.validate()?;
    let mut flat = vec![T::zero(); descriptor.extent()];
    let mut cursor = 0;
    for block in descriptor {
        flat[block.offset..block.end()].copy_from_slice(&gathered[cursor..cursor + block.size]);
        cursor += block.size;
    }
    Ok(flat)
}
