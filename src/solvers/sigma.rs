//! Least squares with known per-observation standard deviations.

use crate::core::{
    FitOptions, FitOptionsBuilder, InversionMethod, LinearModel, Matrix, VarianceMode,
};
use crate::solvers::traits::{RegressionError, Regressor};
use crate::solvers::wls::fit_weighted;

/// Regression on measurements with known absolute uncertainties σᵢ.
///
/// Weights are 1/σᵢ² and the error variance is fixed at 1, so the standard
/// errors carry the units of the supplied sigmas instead of being rescaled by
/// the residual scatter.
#[derive(Debug, Clone)]
pub struct SigmaRegressor {
    options: FitOptions,
    sigmas: Vec<f64>,
}

impl SigmaRegressor {
    /// Create a new regressor for the given sigmas.
    ///
    /// The variance mode is forced to `VarianceMode::SigmaDerived`.
    pub fn new(options: FitOptions, sigmas: Vec<f64>) -> Self {
        Self {
            options: FitOptions {
                mode: VarianceMode::SigmaDerived,
                ..options
            },
            sigmas,
        }
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> SigmaRegressorBuilder {
        SigmaRegressorBuilder::default()
    }

    /// The per-observation standard deviations.
    pub fn sigmas(&self) -> &[f64] {
        &self.sigmas
    }
}

impl Regressor for SigmaRegressor {
    fn fit(&self, x: &Matrix, y: &Matrix, new_x: &Matrix) -> Result<LinearModel, RegressionError> {
        let weights = inverse_variance_weights(&self.sigmas)?;
        fit_weighted(x, y, new_x, &weights, &self.options)
    }
}

/// Fit with weights 1/σᵢ², treating the sigmas as known uncertainties.
///
/// `x` must already contain the intercept column; `new_x` must not.
pub fn sigma_linear_regression(
    x: &Matrix,
    y: &Matrix,
    new_x: &Matrix,
    sigmas: &[f64],
) -> Result<LinearModel, RegressionError> {
    SigmaRegressor::new(FitOptions::default(), sigmas.to_vec()).fit(x, y, new_x)
}

/// 1/σᵢ² for every sigma, rejecting sigmas that are not finite and positive.
pub fn inverse_variance_weights(sigmas: &[f64]) -> Result<Vec<f64>, RegressionError> {
    sigmas
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value.is_finite() && value > 0.0 {
                Ok(1.0 / (value * value))
            } else {
                Err(RegressionError::InvalidSigmas { index, value })
            }
        })
        .collect()
}

/// Builder for `SigmaRegressor`.
#[derive(Debug, Clone, Default)]
pub struct SigmaRegressorBuilder {
    builder: FitOptionsBuilder,
    sigmas: Vec<f64>,
}

impl SigmaRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-observation standard deviations.
    pub fn sigmas(mut self, sigmas: Vec<f64>) -> Self {
        self.sigmas = sigmas;
        self
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

    /// Build the regressor.
    pub fn build(self) -> SigmaRegressor {
        SigmaRegressor::new(self.builder.build_unchecked(), self.sigmas)
    }
}
