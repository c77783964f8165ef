//! # Transform formatter
//!
//! Rebuild a `rows` x `cols` grid from a gathered buffer. Selected cells
//! show the gathered value, every other cell shows [`PLACEHOLDER`].
use crate::error::{Result, TransformError};
use crate::geometry::{selection, Segment};
use ndarray::Array2;
use std::fmt::{self, Display};

/// Marker for cells not produced by the gather
pub const PLACEHOLDER: &str = "* ";

/// Grid of display strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayGrid {
    cells: Array2<String>,
}

impl DisplayGrid {
    /// Grid with every cell set to [`PLACEHOLDER`]
    fn placeholder(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), PLACEHOLDER.to_string()),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Cell content, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get((row, col)).map(String::as_str)
    }

    pub fn is_placeholder(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(PLACEHOLDER)
    }

    /// Number of cells holding a gathered value
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|c| c.as_str() != PLACEHOLDER).count()
    }

    /// Underlying 2d array of cells
    pub fn as_array(&self) -> &Array2<String> {
        &self.cells
    }
}

impl Display for DisplayGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<&str> = row.iter().map(String::as_str).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Place the gathered values of a `rows` x `cols` transform onto a grid
///
/// `gathered[..cols]` fills row 0. Rows `1..m-1` (with `m = min(rows, cols)`)
/// receive one value on the diagonal and one in the last column. Row `m-1`
/// receives `max(cols - rows, 0) + 1` values starting at the diagonal.
/// Trailing values beyond those needed are ignored, so a receive buffer
/// of the full matrix size can be passed directly.
///
/// # Errors
/// [`TransformError::InvalidDimension`] for zero extents,
/// [`TransformError::ShapeMismatch`] if `gathered` is too short.
pub fn format_transform<T: Display>(gathered: &[T], rows: usize, cols: usize) -> Result<DisplayGrid> {
    let segments = selection(rows, cols)?;
    let needed: usize = segments.iter().map(|s| s.len).sum();
    if gathered.len() < needed {
        return Err(TransformError::ShapeMismatch {
            expected: needed,
            found: gathered.len(),
        });
    }
    let mut grid = DisplayGrid::placeholder(rows, cols);
    for (cell, value) in segments.iter().flat_map(Segment::cells).zip(gathered) {
        grid.cells[cell] = value.to_string();
    }
    Ok(grid)
}

#[cfg(test)]
mod test {
    use super::*;

    fn grid_rows(grid: &DisplayGrid) -> Vec<Vec<&str>> {
        grid.as_array()
            .rows()
            .into_iter()
            .map(|r| r.into_iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_format_square() {
        let grid = format_transform(&[11, 12, 13, 22, 23, 33], 3, 3).unwrap();
        assert_eq!(
            grid_rows(&grid),
            vec![
                vec!["11", "12", "13"],
                vec!["* ", "22", "23"],
                vec!["* ", "* ", "33"],
            ]
        );
    }

    #[test]
    fn test_format_wide() {
        let grid = format_transform(&[1, 2, 3, 4, 5, 6, 7], 2, 4).unwrap();
        assert_eq!(
            grid_rows(&grid),
            vec![vec!["1", "2", "3", "4"], vec!["* ", "5", "6", "7"]]
        );
        assert_eq!(grid.selected_count(), 7);
    }

    #[test]
    fn test_format_tall() {
        let grid = format_transform(&[1, 2, 3], 4, 2).unwrap();
        assert_eq!(
            grid_rows(&grid),
            vec![
                vec!["1", "2"],
                vec!["* ", "3"],
                vec!["* ", "* "],
                vec!["* ", "* "],
            ]
        );
    }

    #[test]
    fn test_format_square_4() {
        let gathered = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        let grid = format_transform(&gathered, 4, 4).unwrap();
        assert_eq!(grid.get(1, 1), Some("5"));
        assert_eq!(grid.get(1, 3), Some("6"));
        assert_eq!(grid.get(2, 2), Some("7"));
        assert_eq!(grid.get(2, 3), Some("8"));
        assert_eq!(grid.get(3, 3), Some("9"));
        assert!(grid.is_placeholder(1, 2));
        assert!(grid.is_placeholder(3, 0));
        assert_eq!(grid.selected_count(), 9);
    }

    #[test]
    fn test_format_ignores_trailing_values() {
        let received = [1, 2, 3, 4, 0, 0, 0, 0];
        let grid = format_transform(&received, 2, 2).unwrap();
        assert_eq!(grid.to_string(), "1 2\n*  3\n");
    }

    #[test]
    fn test_format_degenerate() {
        let grid = format_transform(&[7, 8, 9], 1, 3).unwrap();
        assert_eq!(grid.to_string(), "7 8 9\n");
        let grid = format_transform(&[7], 3, 1).unwrap();
        assert_eq!(grid.to_string(), "7\n* \n* \n");
    }

    #[test]
    fn test_format_too_short() {
        assert_eq!(
            format_transform(&[1, 2, 3], 3, 3),
            Err(TransformError::ShapeMismatch {
                expected: 6,
                found: 3
            })
        );
    }

    #[test]
    fn test_format_invalid_dimension() {
        let empty: [i32; 0] = [];
        assert_eq!(
            format_transform(&empty, 0, 0),
            Err(TransformError::InvalidDimension { rows: 0, cols: 0 })
        );
    }
}
