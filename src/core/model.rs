//! Result of a regression fit.

use super::matrix::Matrix;
use super::options::VarianceMode;

/// Fitted linear model with propagated uncertainty.
///
/// Produced once per regression call. The first five fields are the core
/// result; the rest carry what inference and diagnostics need.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    // ========== Core Results ==========
    /// Fitted coefficients as a column vector, intercept first.
    pub betas: Matrix,

    /// Standard error of each coefficient, in the order of `betas`.
    pub beta_standard_errors: Vec<f64>,

    /// The new input points the prediction was evaluated at, without the
    /// injected intercept column.
    pub x: Matrix,

    /// Predicted responses at `x` as a column vector.
    pub y_hat: Matrix,

    /// Standard error of each predicted response, one per row of `x`.
    pub y_hat_standard_error: Vec<f64>,

    // ========== Variance Propagation ==========
    /// Coefficient covariance matrix, (X'WX)⁻¹ scaled by `error_variance`.
    pub covariance: Matrix,

    /// Error variance used to scale the covariance. Exactly 1 under
    /// `VarianceMode::SigmaDerived`, NaN under `Weighted` when n == p.
    pub error_variance: f64,

    /// Variance mode the model was fit with.
    pub mode: VarianceMode,

    // ========== Residual Information ==========
    /// Number of observations (rows of the design matrix).
    pub n_observations: usize,

    /// Residual degrees of freedom, n - p (saturating at zero).
    pub residual_df: usize,

    /// Observation weights used in the fit.
    pub weights: Vec<f64>,

    /// Unweighted residuals y - Xβ on the training data.
    pub residuals: Vec<f64>,

    /// Weighted residual sum of squares Σ wᵢ rᵢ².
    pub weighted_rss: f64,
}

impl LinearModel {
    /// Number of fitted coefficients, including the intercept.
    pub fn n_parameters(&self) -> usize {
        self.betas.nrows()
    }

    /// Coefficients as a plain vector.
    pub fn coefficients(&self) -> Vec<f64> {
        self.betas.rows().map(|row| row[0]).collect()
    }

    /// Intercept, i.e. the first coefficient.
    pub fn intercept(&self) -> Option<f64> {
        self.betas.get(0, 0)
    }

    /// Predicted responses as a plain vector.
    pub fn predictions(&self) -> Vec<f64> {
        self.y_hat.rows().map(|row| row[0]).collect()
    }
}
