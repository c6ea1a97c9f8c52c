//! Core traits for regression estimators.

use crate::core::{LinearModel, Matrix, MatrixError, OptionsError};
use thiserror::Error;

/// Errors that can occur during regression fitting.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// A matrix operation failed. Shape mismatches between `x`, `y` and the
    /// weights, and singular normal equations, surface here unchanged.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("invalid options: {0}")]
    InvalidOptions(#[from] OptionsError),

    #[error("invalid weights: weight {index} is {value}, weights must be finite and non-negative")]
    InvalidWeights { index: usize, value: f64 },

    #[error("invalid sigmas: sigma {index} is {value}, sigmas must be finite and positive")]
    InvalidSigmas { index: usize, value: f64 },
}

/// A regression estimator.
///
/// Fitting is a pure function of the inputs: it estimates the coefficients
/// from `x` and `y` and evaluates the model at `new_x` in one pass.
///
/// `x` must already contain its intercept column of ones. `new_x` must not:
/// the intercept column is prepended to `new_x` by the estimator.
pub trait Regressor {
    /// Fit the model and predict at new points.
    ///
    /// # Arguments
    /// * `x` - Design matrix of shape (n, p), intercept column included
    /// * `y` - Response column vector of shape (n, 1)
    /// * `new_x` - Prediction inputs of shape (m, p - 1), without the intercept column
    fn fit(&self, x: &Matrix, y: &Matrix, new_x: &Matrix) -> Result<LinearModel, RegressionError>;
}
