//! Tabular rendering of matrices for diagnostics.
//!
//! Output uses bracket glyphs per row and right-aligns every column to its
//! own widest value:
//!
//! ```text
//! ⎡1.2  3.4⎤
//! ⎣4.5  6.7⎦
//! ```

use std::fmt;

use ndarray::ArrayView2;

const SEPARATOR: &str = "  ";

/// Display adapter returned by [`formatted`].
pub struct Formatted<'a> {
    matrix: ArrayView2<'a, f64>,
}

/// Wraps a matrix view so it can be printed with `{}`.
pub fn formatted(matrix: ArrayView2<'_, f64>) -> Formatted<'_> {
    Formatted { matrix }
}

/// Renders `matrix` into an owned string.
pub fn format_matrix(matrix: ArrayView2<'_, f64>) -> String {
    formatted(matrix).to_string()
}

fn brackets(row: usize, rows: usize) -> (char, char) {
    match (row, rows) {
        (_, 1) => ('[', ']'),
        (0, _) => ('⎡', '⎤'),
        (r, n) if r + 1 == n => ('⎣', '⎦'),
        _ => ('⎢', '⎥'),
    }
}

impl fmt::Display for Formatted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.matrix.dim();
        if rows == 0 || cols == 0 {
            return f.write_str("[]");
        }

        let cells: Vec<Vec<String>> = self
            .matrix
            .rows()
            .into_iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = (0..cols)
            .map(|c| {
                cells
                    .iter()
                    .map(|row| row[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for (r, row) in cells.iter().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            let (open, close) = brackets(r, rows);
            write!(f, "{open}")?;
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(SEPARATOR)?;
                }
                write!(f, "{cell:>width$}", width = widths[c])?;
            }
            write!(f, "{close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn two_by_two() {
        let m = array![[1.2, 3.4], [4.5, 6.7]];
        assert_eq!(format_matrix(m.view()), "⎡1.2  3.4⎤\n⎣4.5  6.7⎦");
    }

    #[test]
    fn columns_are_right_aligned() {
        let m = array![[1.0, 20.5], [300.0, 4.0], [5.0, 6.0]];
        assert_eq!(
            format_matrix(m.view()),
            "⎡  1  20.5⎤\n⎢300     4⎥\n⎣  5     6⎦"
        );
    }

    #[test]
    fn single_row_and_empty() {
        assert_eq!(format_matrix(array![[1.0, 2.0]].view()), "[1  2]");
        assert_eq!(format_matrix(Array2::<f64>::zeros((0, 0)).view()), "[]");
    }
}
