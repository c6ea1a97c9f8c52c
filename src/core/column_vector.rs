//! Column vectors as one-column [`Matrix`] values.

use super::matrix::{Matrix, MatrixError};

/// Build an `n`x1 matrix from a flat sequence of values, one per row.
pub fn column_vector_from(values: &[f64]) -> Matrix {
    Matrix::from_fn(values.len(), 1, |i, _| values[i])
}

/// Element-wise product of two column vectors of equal length.
pub fn coordinatewise_product(left: &Matrix, right: &Matrix) -> Result<Matrix, MatrixError> {
    let a = left.to_column_values()?;
    let b = right.to_column_values()?;
    if a.len() != b.len() {
        return Err(MatrixError::DimensionMismatch {
            operation: "coordinatewise product",
            left: left.shape(),
            right: right.shape(),
        });
    }
    let product: Vec<f64> = a.iter().zip(&b).map(|(x, y)| x * y).collect();
    Ok(column_vector_from(&product))
}

impl Matrix {
    /// Returns true if the matrix has exactly one column.
    pub fn is_column_vector(&self) -> bool {
        self.ncols() == 1
    }

    /// Flatten a column vector into its values.
    ///
    /// A 0x0 matrix flattens to an empty vector.
    ///
    /// # Errors
    /// Returns [`MatrixError::NotColumnVector`] if the matrix has rows and
    /// more or fewer than one column.
    pub fn to_column_values(&self) -> Result<Vec<f64>, MatrixError> {
        if self.nrows() > 0 && !self.is_column_vector() {
            return Err(MatrixError::NotColumnVector {
                rows: self.nrows(),
                cols: self.ncols(),
            });
        }
        Ok(self.rows().map(|row| row[0]).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::matrix::MatrixErrorKind;

    #[test]
    fn test_column_vector_from() {
        let v = column_vector_from(&[1.0, 2.0, 3.0]);
        assert_eq!(v.shape(), (3, 1));
        assert_eq!(v.to_rows(), vec![vec![1.0], vec![2.0], vec![3.0]]);
        assert_eq!(v.to_column_values().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_column_vector() {
        let v = column_vector_from(&[]);
        assert_eq!(v.shape(), (0, 0));
        assert!(v.to_column_values().unwrap().is_empty());
    }

    #[test]
    fn test_to_column_values_rejects_wide_matrix() {
        let m = Matrix::new(&[[1.0, 2.0]]).unwrap();
        let err = m.to_column_values().unwrap_err();
        assert_eq!(err, MatrixError::NotColumnVector { rows: 1, cols: 2 });
        assert_eq!(err.kind(), MatrixErrorKind::Dimension);
    }

    #[test]
    fn test_coordinatewise_product() {
        let a = column_vector_from(&[1.0, 2.0, 3.0]);
        let b = column_vector_from(&[4.0, 5.0, 6.0]);
        let product = coordinatewise_product(&a, &b).unwrap();
        assert_eq!(product, column_vector_from(&[4.0, 10.0, 18.0]));

        let short = column_vector_from(&[1.0]);
        assert!(coordinatewise_product(&a, &short).is_err());
    }
}
