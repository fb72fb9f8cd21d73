//! Dense matrix implementation for small matrices.
//!
//! Elimination snapshots the working matrix after every row operation, so
//! `Clone` here is a full deep copy of every entry: a snapshot never aliases
//! the matrix it was taken from.

use std::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::LinalgError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Clone + Zero> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Returns the index of the first non-zero entry among the first
    /// `limit` entries of `row`.
    #[must_use]
    pub fn leading_index(&self, row: usize, limit: usize) -> Option<usize> {
        self.row(row)[..limit.min(self.num_cols)]
            .iter()
            .position(|v| !v.is_zero())
    }

    /// Checks whether the first `limit` entries of `row` are all zero.
    #[must_use]
    pub fn is_zero_prefix(&self, row: usize, limit: usize) -> bool {
        self.leading_index(row, limit).is_none()
    }
}

impl<R: Clone> DenseMatrix<R> {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<R>>) -> Result<Self, LinalgError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != num_cols) {
            return Err(LinalgError::RaggedRows {
                row,
                expected: num_cols,
                got: bad.len(),
            });
        }
        let data: Vec<R> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            num_rows,
            num_cols,
        })
    }

    /// Builds the augmented matrix `[self | column]`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::ShapeMismatch`] if `column` does not have one
    /// entry per row.
    pub fn augment(&self, column: &[R]) -> Result<Self, LinalgError> {
        if column.len() != self.num_rows {
            return Err(LinalgError::ShapeMismatch {
                expected: self.num_rows,
                got: column.len(),
            });
        }
        let num_cols = self.num_cols + 1;
        let mut data = Vec::with_capacity(self.num_rows * num_cols);
        for (row, extra) in column.iter().enumerate() {
            data.extend_from_slice(self.row(row));
            data.push(extra.clone());
        }
        Ok(Self {
            data,
            num_rows: self.num_rows,
            num_cols,
        })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a mutable slice of the specified row.
    pub fn row_mut(&mut self, row: usize) -> &mut [R] {
        let start = row * self.num_cols;
        &mut self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[R]> + '_ {
        (0..self.num_rows).map(move |row| self.row(row))
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Copies the matrix out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<R>> {
        self.rows().map(<[R]>::to_vec).collect()
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

/// Serialized as a list of rows.
#[cfg(feature = "serde")]
impl<R: Clone + serde::Serialize> serde::Serialize for DenseMatrix<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Clone + serde::Deserialize<'de>> serde::Deserialize<'de> for DenseMatrix<R> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<R>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
