//! Conversions between [`Matrix`] and faer's dense types.

use crate::core::{column_vector_from, Matrix};
use faer::{Col, Mat};

impl From<&Mat<f64>> for Matrix {
    fn from(mat: &Mat<f64>) -> Self {
        Matrix::from_fn(mat.nrows(), mat.ncols(), |i, j| mat[(i, j)])
    }
}

impl From<&Col<f64>> for Matrix {
    fn from(col: &Col<f64>) -> Self {
        column_vector_from_col(col)
    }
}

impl Matrix {
    /// Copy into a faer matrix.
    pub fn to_faer(&self) -> Mat<f64> {
        Mat::from_fn(self.nrows(), self.ncols(), |i, j| self[(i, j)])
    }
}

/// Build an `n`x1 [`Matrix`] from a faer column.
pub fn column_vector_from_col(col: &Col<f64>) -> Matrix {
    let values: Vec<f64> = (0..col.nrows()).map(|i| col[i]).collect();
    column_vector_from(&values)
}
