//! Ordinary Least Squares solver.

use crate::core::{
    FitOptions, FitOptionsBuilder, InversionMethod, LinearModel, Matrix, VarianceMode,
};
use crate::solvers::traits::{RegressionError, Regressor};
use crate::solvers::wls::fit_weighted;

/// Ordinary Least Squares regression estimator.
///
/// Weighted least squares with every weight equal to one; the error variance
/// is always estimated from the residuals.
#[derive(Debug, Clone)]
pub struct OlsRegressor {
    options: FitOptions,
}

impl OlsRegressor {
    /// Create a new OLS regressor with the given options.
    ///
    /// The variance mode is forced to `VarianceMode::Weighted`.
    pub fn new(options: FitOptions) -> Self {
        Self {
            options: FitOptions {
                mode: VarianceMode::Weighted,
                ..options
            },
        }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> OlsRegressorBuilder {
        OlsRegressorBuilder::default()
    }
}

impl Regressor for OlsRegressor {
    fn fit(&self, x: &Matrix, y: &Matrix, new_x: &Matrix) -> Result<LinearModel, RegressionError> {
        fit_weighted(x, y, new_x, &vec![1.0; x.nrows()], &self.options)
    }
}

/// Fit with unit weights.
///
/// `x` must already contain the intercept column; `new_x` must not.
pub fn unweighted_linear_regression(
    x: &Matrix,
    y: &Matrix,
    new_x: &Matrix,
) -> Result<LinearModel, RegressionError> {
    OlsRegressor::new(FitOptions::default()).fit(x, y, new_x)
}

/// Builder for `OlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct OlsRegressorBuilder {
    builder: FitOptionsBuilder,
}

impl OlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normal-equations inversion method.
    pub fn inversion(mut self, inversion: InversionMethod) -> Self {
        self.builder = self.builder.inversion(inversion);
        self
    }

    /// Set the singularity tolerance used by QR inversion.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.builder = self.builder.singular_tolerance(tol);
        self
    }

    /// Build the OLS regressor.
    pub fn build(self) -> OlsRegressor {
        OlsRegressor::new(self.builder.build_unchecked())
    }
}
