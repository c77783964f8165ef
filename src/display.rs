//! Text rendering of matrices and transform grids
use ndarray::{ArrayBase, Data, Ix2};
use std::fmt::Display;

/// One row per line, values separated by a single space
pub fn render_matrix<S, T>(matrix: &ArrayBase<S, Ix2>) -> String
where
    S: Data<Elem = T>,
    T: Display,
{
    let mut out = String::new();
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Separator line printed between input matrix and transform
pub fn delimiter(cols: usize) -> String {
    "----".repeat(cols)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_render_matrix() {
        let matrix = array![[10, 11, 12], [20, 21, 22]];
        assert_eq!(render_matrix(&matrix), "10 11 12\n20 21 22\n");
    }

    #[test]
    fn test_delimiter() {
        assert_eq!(delimiter(3), "------------");
        assert_eq!(delimiter(0), "");
    }
}
