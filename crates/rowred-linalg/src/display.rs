//! Plain-text rendering of matrix snapshots.

use std::fmt;

use crate::DenseMatrix;

/// Renders a matrix as an aligned grid.
///
/// Columns are right-aligned to their widest entry. When a boundary is set,
/// a `|` separates the coefficient columns from the augmentation column, and
/// a highlighted row is marked with `>`.
///
/// ```text
///   [ 1  1 |  3 ]
/// > [ 0  0 |  1 ]
/// ```
pub struct AugmentedDisplay<'a, R> {
    matrix: &'a DenseMatrix<R>,
    boundary: Option<usize>,
    highlight_row: Option<usize>,
}

impl<'a, R> AugmentedDisplay<'a, R> {
    /// Renders `matrix` with no boundary and no highlight.
    #[must_use]
    pub fn new(matrix: &'a DenseMatrix<R>) -> Self {
        Self {
            matrix,
            boundary: None,
            highlight_row: None,
        }
    }

    /// Draws the separator before column `col`.
    #[must_use]
    pub fn boundary(mut self, col: usize) -> Self {
        self.boundary = Some(col);
        self
    }

    /// Marks `row`, if any.
    #[must_use]
    pub fn highlight(mut self, row: Option<usize>) -> Self {
        self.highlight_row = row;
        self
    }
}

impl<R: Clone + fmt::Display> fmt::Display for AugmentedDisplay<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<Vec<String>> = self
            .matrix
            .rows()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();
        let widths: Vec<usize> = (0..self.matrix.num_cols())
            .map(|col| cells.iter().map(|row| row[col].len()).max().unwrap_or(0))
            .collect();

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let marker = if self.highlight_row == Some(i) { '>' } else { ' ' };
            write!(f, "{marker} [")?;
            for (j, cell) in row.iter().enumerate() {
                if self.boundary == Some(j) {
                    write!(f, " |")?;
                }
                write!(f, " {cell:>width$}", width = widths[j])?;
            }
            write!(f, " ]")?;
        }
        Ok(())
    }
}
