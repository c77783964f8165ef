//! # Block descriptor
//!
//! Ordered list of `(size, offset)` blocks over the row-major flattened
//! matrix, the same information an indexed datatype is built from.
//!
//! For $m = \min(R, C) \geq 2$ the descriptor has $2m - 2$ blocks:
//! block $0$ is $(C, 0)$, rows $i = 1, \dots, m-2$ contribute
//! $(1, iC + i)$ and $(1, iC + C - 1)$, and the last block is
//! $(\max(1, C - R + 1), (m-1)C + m - 1)$.
use crate::error::{check_dimension, Result, TransformError};
use crate::geometry::{selection, Segment};
use std::fmt;

/// Contiguous run of `size` elements starting at `offset`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub size: usize,
    pub offset: usize,
}

impl Block {
    pub fn new(size: usize, offset: usize) -> Self {
        Self { size, offset }
    }

    /// One past the last covered position
    pub fn end(&self) -> usize {
        self.offset + self.size
    }
}

impl From<(usize, usize)> for Block {
    fn from((size, offset): (usize, usize)) -> Self {
        Self::new(size, offset)
    }
}

/// Selection of a flattened `rows` x `cols` matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    rows: usize,
    cols: usize,
    blocks: Vec<Block>,
}

impl BlockDescriptor {
    /// Assemble descriptor from raw blocks, checking all invariants
    ///
    /// # Errors
    /// [`TransformError::InvalidDimension`] for zero extents,
    /// [`TransformError::InvalidDescriptor`] if blocks are empty,
    /// unordered, overlapping or out of bounds.
    pub fn from_blocks(rows: usize, cols: usize, blocks: Vec<Block>) -> Result<Self> {
        check_dimension(rows, cols)?;
        let descriptor = Self { rows, cols, blocks };
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Assemble descriptor without checking the blocks
    #[cfg(test)]
    pub(crate) fn from_blocks_unchecked(rows: usize, cols: usize, blocks: Vec<Block>) -> Self {
        Self { rows, cols, blocks }
    }

    fn from_segments(rows: usize, cols: usize, segments: &[Segment]) -> Self {
        let blocks = segments
            .iter()
            .map(|s| Block::new(s.len, s.offset(cols)))
            .collect();
        Self { rows, cols, blocks }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the flat buffer this descriptor indexes into
    pub fn extent(&self) -> usize {
        self.rows * self.cols
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of selected elements, i.e. length of a gathered buffer
    pub fn selected_len(&self) -> usize {
        self.blocks.iter().map(|b| b.size).sum()
    }

    /// Block sizes, in block order
    pub fn block_lengths(&self) -> Vec<usize> {
        self.blocks.iter().map(|b| b.size).collect()
    }

    /// Block offsets, in block order
    pub fn displacements(&self) -> Vec<usize> {
        self.blocks.iter().map(|b| b.offset).collect()
    }

    /// Check ordering, bounds and sizes of all blocks
    pub fn validate(&self) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(TransformError::InvalidDescriptor(
                "descriptor has no blocks".to_string(),
            ));
        }
        let extent = self.extent();
        let mut previous_end = 0;
        for (k, block) in self.blocks.iter().enumerate() {
            if block.size < 1 {
                return Err(TransformError::InvalidDescriptor(format!(
                    "block {} has size 0",
                    k
                )));
            }
            if block.end() > extent {
                return Err(TransformError::InvalidDescriptor(format!(
                    "block {} ends at {} beyond extent {}",
                    k,
                    block.end(),
                    extent
                )));
            }
            if k > 0 && block.offset < previous_end {
                return Err(TransformError::InvalidDescriptor(format!(
                    "block {} at offset {} overlaps or precedes previous block",
                    k, block.offset
                )));
            }
            previous_end = block.end();
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BlockDescriptor {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Display for BlockDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (k, block) in self.blocks.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({},{})", block.size, block.offset)?;
        }
        write!(f, "]")
    }
}

/// Build the descriptor of a `rows` x `cols` matrix
///
/// Matrices with a single row or column select only the first row,
/// giving the single block `(cols, 0)`.
///
/// # Errors
/// [`TransformError::InvalidDimension`] if rows or cols is zero.
///
/// # Example
/// ```
/// use idxgather::{build_descriptor, Block};
/// let descriptor = build_descriptor(2, 4).unwrap();
/// assert_eq!(descriptor.blocks(), &[Block::new(4, 0), Block::new(3, 5)]);
/// ```
pub fn build_descriptor(rows: usize, cols: usize) -> Result<BlockDescriptor> {
    let segments = selection(rows, cols)?;
    let descriptor = BlockDescriptor::from_segments(rows, cols, &segments);
    tracing::debug!(rows, cols, blocks = descriptor.len(), "built descriptor {}", descriptor);
    Ok(descriptor)
}
