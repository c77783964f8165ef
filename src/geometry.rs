//! # Selection geometry
//!
//! Canonical list of kept cells of a `rows` x `cols` matrix, expressed as
//! row segments. With $m = \min(rows, cols)$ the selection consists of
//!
//! - the whole first row,
//! - for rows $i = 1, \dots, m-2$ the diagonal cell $(i, i)$ and the
//!   last column cell $(i, cols-1)$,
//! - for row $m-1$ the run starting at $(m-1, m-1)$ of length
//!   $\max(cols - rows, 0) + 1$.
//!
//! Matrices with $m = 1$ keep the first row only.
//!
//! Both [`crate::descriptor::build_descriptor`] and
//! [`crate::format::format_transform`] are derived from [`selection`].
use crate::error::{check_dimension, Result};

/// Contiguous run of kept cells within one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Row index
    pub row: usize,
    /// First column of the run
    pub col: usize,
    /// Number of cells (always >= 1)
    pub len: usize,
}

impl Segment {
    pub fn new(row: usize, col: usize, len: usize) -> Self {
        Self { row, col, len }
    }

    /// Flat row-major offset of the first cell
    pub fn offset(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Iterate over the `(row, col)` coordinates covered by the run
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let row = self.row;
        (self.col..self.col + self.len).map(move |col| (row, col))
    }
}

/// Return the kept segments in increasing flat offset order
///
/// # Errors
/// [`crate::TransformError::InvalidDimension`] if rows or cols is zero.
pub fn selection(rows: usize, cols: usize) -> Result<Vec<Segment>> {
    check_dimension(rows, cols)?;
    let m = rows.min(cols);
    let mut segments = Vec::with_capacity(num_segments(rows, cols));
    segments.push(Segment::new(0, 0, cols));
    if m == 1 {
        return Ok(segments);
    }
    for i in 1..m - 1 {
        segments.push(Segment::new(i, i, 1));
        segments.push(Segment::new(i, cols - 1, 1));
    }
    let last = m - 1;
    segments.push(Segment::new(last, last, cols.saturating_sub(rows) + 1));
    Ok(segments)
}

/// Number of segments returned by [`selection`]
pub fn num_segments(rows: usize, cols: usize) -> usize {
    let m = rows.min(cols);
    if m <= 1 {
        m
    } else {
        2 * m - 2
    }
}

/// All kept `(row, col)` cells in gather order
pub fn cells(rows: usize, cols: usize) -> Result<Vec<(usize, usize)>> {
    Ok(selection(rows, cols)?
        .iter()
        .flat_map(Segment::cells)
        .collect())
}
