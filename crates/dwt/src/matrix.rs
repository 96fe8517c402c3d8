//! Owned row-major matrix used as the 2D sample container.

use std::ops::{Index, IndexMut};

use crate::error::DwtError;

/// A dense row-major matrix of `f64` samples with independently
/// addressable row and column extents.
///
/// This is the image data model for the 2D transforms: plain owned
/// storage, no views, no shared state. Square and rectangular extents
/// are both supported.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Creates a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`DwtError::ShapeMismatch`] when `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, DwtError> {
        if data.len() != rows * cols {
            return Err(DwtError::ShapeMismatch {
                context: format!(
                    "matrix data has {} samples, expected {rows}x{cols} = {}",
                    data.len(),
                    rows * cols
                ),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the shorter of the two extents.
    pub fn min_extent(&self) -> usize {
        self.rows.min(self.cols)
    }

    /// Returns `true` when either extent is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Returns the underlying row-major storage.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the underlying row-major storage mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Returns row `r` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[f64] {
        assert!(r < self.rows, "row {r} out of bounds ({} rows)", self.rows);
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Copies column `c` into a fresh vector.
    ///
    /// # Panics
    ///
    /// Panics if `c >= cols`.
    pub fn column(&self, c: usize) -> Vec<f64> {
        assert!(c < self.cols, "column {c} out of bounds ({} cols)", self.cols);
        (0..self.rows).map(|r| self.data[r * self.cols + c]).collect()
    }

    /// Overwrites row `r` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `values.len() != cols`.
    pub fn set_row(&mut self, r: usize, values: &[f64]) {
        assert!(r < self.rows, "row {r} out of bounds ({} rows)", self.rows);
        assert_eq!(values.len(), self.cols, "row length mismatch");
        self.data[r * self.cols..(r + 1) * self.cols].copy_from_slice(values);
    }

    /// Overwrites column `c` with `values`.
    ///
    /// # Panics
    ///
    /// Panics if `c >= cols` or `values.len() != rows`.
    pub fn set_column(&mut self, c: usize, values: &[f64]) {
        assert!(c < self.cols, "column {c} out of bounds ({} cols)", self.cols);
        assert_eq!(values.len(), self.rows, "column length mismatch");
        for (r, &v) in values.iter().enumerate() {
            self.data[r * self.cols + c] = v;
        }
    }

    /// Returns the transposed matrix.
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                out[(c, r)] = self[(r, c)];
            }
        }
        out
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        // The row-major offset would alias a neighboring row for an
        // in-range r with an out-of-range c.
        assert!(c < self.cols, "column {c} out of bounds ({} cols)", self.cols);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        assert!(c < self.cols, "column {c} out of bounds ({} cols)", self.cols);
        &mut self.data[r * self.cols + c]
    }
}
