//! Dense row-major matrix used throughout the regression engine.
//!
//! A [`Matrix`] owns its entries and never exposes them mutably. Every
//! transforming operation allocates and returns a new matrix, so a matrix can
//! be shared by reference between callers without defensive copies.

use faer::Mat;
use std::ops::Index;
use thiserror::Error;

/// Broad classification of a [`MatrixError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixErrorKind {
    /// A shape requirement was violated.
    Dimension,
    /// The matrix has no inverse.
    Singular,
    /// The requested operation is not implemented for this input.
    Unsupported,
}

/// Errors raised by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatrixError {
    #[error("rows must have equal length: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("incompatible matrix dimensions for {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("scale factors have length {factors} but the matrix has {rows} rows")]
    ScaleLength { factors: usize, rows: usize },

    #[error("expected a column vector, got a {rows}x{cols} matrix")]
    NotColumnVector { rows: usize, cols: usize },

    #[error("cannot invert non-square {rows}x{cols} matrix")]
    NotSquare { rows: usize, cols: usize },

    #[error("the matrix is singular and cannot be inverted")]
    Singular,

    #[error("closed-form inversion is only supported for 2x2 matrices, got {size}x{size}")]
    UnsupportedInverse { size: usize },
}

impl MatrixError {
    /// Classify the error into dimension, singularity or unsupported-operation failures.
    pub fn kind(&self) -> MatrixErrorKind {
        match self {
            MatrixError::RaggedRows { .. }
            | MatrixError::DimensionMismatch { .. }
            | MatrixError::ScaleLength { .. }
            | MatrixError::NotColumnVector { .. }
            | MatrixError::NotSquare { .. } => MatrixErrorKind::Dimension,
            MatrixError::Singular => MatrixErrorKind::Singular,
            MatrixError::UnsupportedInverse { .. } => MatrixErrorKind::Unsupported,
        }
    }
}

/// An immutable dense matrix of `f64` values.
///
/// `PartialEq` is exact entry-wise equality. Use [`Matrix::equals`] with an
/// explicit tolerance to compare results of floating-point computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Build a matrix from a slice of rows, copying the entries.
    ///
    /// An empty slice produces a 0x0 matrix.
    ///
    /// # Errors
    /// Returns [`MatrixError::RaggedRows`] if the rows differ in length.
    pub fn new<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());

        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }

        Ok(Self { nrows, ncols, data })
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        // A matrix without rows carries no column dimension.
        let ncols = if nrows == 0 { 0 } else { ncols };
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { nrows, ncols, data }
    }

    /// A matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| 0.0)
    }

    /// The `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns. Zero for a matrix without rows.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Returns true if the matrix has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at `(i, j)`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.nrows && j < self.ncols {
            Some(self.data[i * self.ncols + j])
        } else {
            None
        }
    }

    /// Borrow row `i`.
    ///
    /// # Panics
    /// Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.nrows, "row index {i} out of range for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.nrows).map(move |i| self.row(i))
    }

    /// Copy the entries out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// The main diagonal.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.nrows.min(self.ncols))
            .map(|i| self.data[i * self.ncols + i])
            .collect()
    }

    /// Standard matrix product `self * other`.
    ///
    /// # Errors
    /// Fails unless `self.ncols() == other.nrows()`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != other.nrows {
            return Err(self.mismatch("multiplication", other));
        }

        let inner = self.ncols;
        Ok(Matrix::from_fn(self.nrows, other.ncols, |i, j| {
            let mut sum = 0.0;
            for k in 0..inner {
                sum += self[(i, k)] * other[(k, j)];
            }
            sum
        }))
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "addition", |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        self.zip_with(other, "subtraction", |a, b| a - b)
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&self, factor: f64) -> Matrix {
        self.map(|v| v * factor)
    }

    /// Multiply row `i` by `factors[i]`.
    ///
    /// # Errors
    /// Returns [`MatrixError::ScaleLength`] if `factors.len() != nrows`.
    pub fn scale_rows(&self, factors: &[f64]) -> Result<Matrix, MatrixError> {
        if factors.len() != self.nrows {
            return Err(MatrixError::ScaleLength {
                factors: factors.len(),
                rows: self.nrows,
            });
        }
        Ok(Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            self[(i, j)] * factors[i]
        }))
    }

    /// The `ncols x nrows` transpose.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Element-wise square root. Negative entries become NaN.
    pub fn sqrt_entries(&self) -> Matrix {
        self.map(f64::sqrt)
    }

    /// A copy with a constant column inserted before the first column.
    pub fn prepend_column(&self, value: f64) -> Matrix {
        let ncols = self.ncols + 1;
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for row in self.rows() {
            data.push(value);
            data.extend_from_slice(row);
        }
        Matrix {
            nrows: self.nrows,
            ncols: if self.nrows == 0 { 0 } else { ncols },
            data,
        }
    }

    /// Closed-form inverse of a 2x2 matrix: the adjugate divided by the determinant.
    ///
    /// # Errors
    /// - [`MatrixError::NotSquare`] for non-square input.
    /// - [`MatrixError::Singular`] if the determinant is exactly zero.
    /// - [`MatrixError::UnsupportedInverse`] for square matrices other than 2x2.
    ///   Use [`Matrix::inverse_qr`] for those.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        self.require_square()?;
        if self.nrows != 2 {
            return Err(MatrixError::UnsupportedInverse { size: self.nrows });
        }

        let (a, b, c, d) = (self[(0, 0)], self[(0, 1)], self[(1, 0)], self[(1, 1)]);
        let det = a * d - b * c;
        if det == 0.0 {
            return Err(MatrixError::Singular);
        }

        Ok(Matrix {
            nrows: 2,
            ncols: 2,
            data: vec![d / det, -b / det, -c / det, a / det],
        })
    }

    /// Inverse of any square matrix through a QR decomposition.
    ///
    /// The matrix is treated as singular when a diagonal entry of `R` has
    /// magnitude below `tolerance`.
    pub fn inverse_qr(&self, tolerance: f64) -> Result<Matrix, MatrixError> {
        self.require_square()?;
        let n = self.nrows;
        if n == 0 {
            return Ok(Matrix::zeros(0, 0));
        }

        let qr = self.to_faer().qr();
        let q = qr.compute_Q();
        let r = qr.R();

        for i in 0..n {
            if r[(i, i)].abs() < tolerance {
                log::trace!("qr inverse: |R[{i},{i}]| = {:e} below tolerance", r[(i, i)].abs());
                return Err(MatrixError::Singular);
            }
        }

        // Solve R * X = Q' column by column with back-substitution.
        let qt = q.transpose();
        let mut inv = Mat::<f64>::zeros(n, n);
        for col in 0..n {
            for i in (0..n).rev() {
                let mut sum = qt[(i, col)];
                for j in (i + 1)..n {
                    sum -= r[(i, j)] * inv[(j, col)];
                }
                inv[(i, col)] = sum / r[(i, i)];
            }
        }

        Ok(Matrix::from(&inv))
    }

    /// True if both matrices have the same shape and every pair of entries
    /// differs by at most `tolerance`.
    pub fn equals(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance || a == b || (a.is_nan() && b.is_nan()))
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    fn zip_with(
        &self,
        other: &Matrix,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<Matrix, MatrixError> {
        if self.shape() != other.shape() {
            return Err(self.mismatch(operation, other));
        }
        Ok(Matrix {
            nrows: self.nrows,
            ncols: self.ncols,
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    fn require_square(&self) -> Result<(), MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }

    fn mismatch(&self, operation: &'static str, other: &Matrix) -> MatrixError {
        MatrixError::DimensionMismatch {
            operation,
            left: self.shape(),
            right: other.shape(),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({i}, {j}) out of range for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[i * self.ncols + j]
    }
}
