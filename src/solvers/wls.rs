//! Weighted Least Squares solver.

use crate::core::{
    FitOptions, FitOptionsBuilder, InversionMethod, LinearModel, Matrix, MatrixError,
    VarianceMode,
};
use crate::solvers::traits::{RegressionError, Regressor};

/// Weighted Least Squares regression estimator.
///
/// Minimizes: Σ w_i (y_i - x_i'β)²
///
/// This is equivalent to transforming the problem:
/// X → W^(1/2)X, y → W^(1/2)y, then applying OLS to the normal equations
/// (X'WX)β = X'Wy.
///
/// When all weights are equal, this reduces to OLS.
///
/// The design matrix passed to [`Regressor::fit`] must include its own
/// intercept column; the intercept is only injected into the prediction
/// inputs.
///
/// # Example
///
/// ```rust
/// use linfit::prelude::*;
///
/// let x = Matrix::new(&[[1.0, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.0]])?;
/// let y = column_vector_from(&[1.0, 3.1, 4.9, 7.0]);
/// let new_x = column_vector_from(&[4.0]);
///
/// let model = WlsRegressor::builder()
///     .weights(vec![1.0, 1.0, 0.5, 0.5])
///     .build()
///     .fit(&x, &y, &new_x)?;
///
/// assert_eq!(model.y_hat.nrows(), 1);
/// # Ok::<(), linfit::solvers::RegressionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WlsRegressor {
    options: FitOptions,
    weights: Option<Vec<f64>>,
}

impl WlsRegressor {
    /// Create a new WLS regressor with the given options.
    pub fn new(options: FitOptions) -> Self {
        Self {
            options,
            weights: None,
        }
    }

    /// Set the observation weights.
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Create a builder for configuring the regressor.
    pub fn builder() -> WlsRegressorBuilder {
        WlsRegressorBuilder::default()
    }

    /// The options this regressor fits with.
    pub fn options(&self) -> &FitOptions {
        &self.options
    }
}

impl Regressor for WlsRegressor {
    fn fit(&self, x: &Matrix, y: &Matrix, new_x: &Matrix) -> Result<LinearModel, RegressionError> {
        match &self.weights {
            Some(w) => fit_weighted(x, y, new_x, w, &self.options),
            // Unit weights when none were given
            None => fit_weighted(x, y, new_x, &vec![1.0; x.nrows()], &self.options),
        }
    }
}

/// Fit with caller-supplied weights, estimating the error variance from the
/// residuals.
///
/// `x` must already contain the intercept column; `new_x` must not.
pub fn weighted_linear_regression(
    x: &Matrix,
    y: &Matrix,
    new_x: &Matrix,
    weights: &[f64],
) -> Result<LinearModel, RegressionError> {
    fit_weighted(x, y, new_x, weights, &FitOptions::default())
}

/// Weighted least-squares fit with standard-error propagation.
///
/// Dimension mismatches between `x`, `y` and `weights` and a singular X'WX
/// are returned as [`RegressionError::Matrix`] without further wrapping.
pub(crate) fn fit_weighted(
    x: &Matrix,
    y: &Matrix,
    new_x: &Matrix,
    weights: &[f64],
    options: &FitOptions,
) -> Result<LinearModel, RegressionError> {
    options.validate()?;

    for (index, &value) in weights.iter().enumerate() {
        if !(value.is_finite() && value >= 0.0) {
            return Err(RegressionError::InvalidWeights { index, value });
        }
    }

    let n_samples = x.nrows();
    let n_params = x.ncols();

    // y must be a single response column
    y.to_column_values()?;

    // Transform data: X_w = W^(1/2) X, y_w = W^(1/2) y
    let sqrt_weights: Vec<f64> = weights.iter().map(|w| w.sqrt()).collect();
    let x_weighted = x.scale_rows(&sqrt_weights)?;
    let y_weighted = y.scale_rows(&sqrt_weights)?;

    let x_weighted_t = x_weighted.transpose();
    let xtwx = x_weighted_t.multiply(&x_weighted)?;
    let xtwx_inverse = invert(&xtwx, options)?;
    log::trace!("normal equations inverted ({n_params}x{n_params})");

    let betas = xtwx_inverse
        .multiply(&x_weighted_t)?
        .multiply(&y_weighted)?;

    // Residuals on the unweighted scale
    let residuals = y.subtract(&x.multiply(&betas)?)?.to_column_values()?;
    let weighted_rss: f64 = weights
        .iter()
        .zip(&residuals)
        .map(|(w, r)| w * r * r)
        .sum();
    let residual_df = n_samples.saturating_sub(n_params);

    // With n == p the fit interpolates and the variance is undefined: the
    // coefficients stay exact, every standard error becomes NaN.
    let error_variance = match options.mode {
        VarianceMode::Weighted if residual_df == 0 => f64::NAN,
        VarianceMode::Weighted => weighted_rss / residual_df as f64,
        VarianceMode::SigmaDerived => 1.0,
    };

    let covariance = xtwx_inverse.scale(error_variance);
    let beta_standard_errors: Vec<f64> =
        covariance.diagonal().into_iter().map(f64::sqrt).collect();

    let (y_hat, y_hat_standard_error) = propagate_to_new_points(new_x, &betas, &covariance)?;

    log::debug!(
        "fit {} observations, {} coefficients ({:?}, {:?}): error variance {:.6e}",
        n_samples,
        n_params,
        options.mode,
        options.inversion,
        error_variance
    );

    Ok(LinearModel {
        betas,
        beta_standard_errors,
        x: new_x.clone(),
        y_hat,
        y_hat_standard_error,
        covariance,
        error_variance,
        mode: options.mode,
        n_observations: n_samples,
        residual_df,
        weights: weights.to_vec(),
        residuals,
        weighted_rss,
    })
}

fn invert(xtwx: &Matrix, options: &FitOptions) -> Result<Matrix, MatrixError> {
    match options.inversion {
        InversionMethod::ClosedForm => xtwx.inverse(),
        InversionMethod::Qr => xtwx.inverse_qr(options.singular_tolerance),
    }
}

/// Predict at `new_x` and propagate the coefficient covariance:
/// Var(ŷ) = X₀ Σ X₀' with X₀ = [1 | new_x].
fn propagate_to_new_points(
    new_x: &Matrix,
    betas: &Matrix,
    covariance: &Matrix,
) -> Result<(Matrix, Vec<f64>), MatrixError> {
    if new_x.nrows() == 0 {
        return Ok((Matrix::zeros(0, 0), Vec::new()));
    }

    let design = new_x.prepend_column(1.0);
    let y_hat = design.multiply(betas)?;
    let y_hat_variance = design.multiply(covariance)?.multiply(&design.transpose())?;
    let se = y_hat_variance.diagonal().into_iter().map(f64::sqrt).collect();

    Ok((y_hat, se))
}

/// Builder for `WlsRegressor`.
#[derive(Debug, Clone, Default)]
pub struct WlsRegressorBuilder {
    builder: FitOptionsBuilder,
    weights: Option<Vec<f64>>,
}

impl WlsRegressorBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the observation weights.
    pub fn weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Set the error variance mode.
    pub fn mode(mut self, mode: VarianceMode) -> Self {
        self.builder = self.builder.mode(mode);
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

    /// Build the WLS regressor. Options are validated at fit time.
    pub fn build(self) -> WlsRegressor {
        let mut regressor = WlsRegressor::new(self.builder.build_unchecked());
        if let Some(w) = self.weights {
            regressor = regressor.with_weights(w);
        }
        regressor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{column_vector_from, MatrixErrorKind};

    fn line_design(xs: &[f64]) -> Matrix {
        column_vector_from(xs).prepend_column(1.0)
    }

    #[test]
    fn test_exact_line() {
        let x = line_design(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let y = column_vector_from(&[2.0, 5.0, 8.0, 11.0, 14.0]);
        let new_x = column_vector_from(&[10.0]);

        let weights = [1.0, 2.0, 1.0, 2.0, 1.0];
        let model = weighted_linear_regression(&x, &y, &new_x, &weights).unwrap();

        assert!((model.coefficients()[0] - 2.0).abs() < 1e-10);
        assert!((model.coefficients()[1] - 3.0).abs() < 1e-10);
        assert!((model.predictions()[0] - 32.0).abs() < 1e-9);
        assert!(model.weighted_rss < 1e-18);
    }

    #[test]
    fn test_equal_weights_scale_invariant() {
        let x = line_design(&[0.0, 1.0, 2.0, 3.0, 4.0]);
        let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
        let new_x = column_vector_from(&[5.0]);

        let unit = weighted_linear_regression(&x, &y, &new_x, &[1.0; 5]).unwrap();
        let scaled = weighted_linear_regression(&x, &y, &new_x, &[4.0; 5]).unwrap();

        assert!(unit.betas.equals(&scaled.betas, 1e-12));
        for (a, b) in unit
            .beta_standard_errors
            .iter()
            .zip(&scaled.beta_standard_errors)
        {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_negative_weight_rejected() {
        let x = line_design(&[0.0, 1.0, 2.0]);
        let y = column_vector_from(&[0.0, 1.0, 2.0]);
        let new_x = column_vector_from(&[3.0]);
        let err = weighted_linear_regression(&x, &y, &new_x, &[1.0, -1.0, 1.0]).unwrap_err();
        assert_eq!(err, RegressionError::InvalidWeights { index: 1, value: -1.0 });
    }

    #[test]
    fn test_weights_length_mismatch() {
        let x = line_design(&[0.0, 1.0, 2.0]);
        let y = column_vector_from(&[0.0, 1.0, 2.0]);
        let new_x = column_vector_from(&[3.0]);
        match weighted_linear_regression(&x, &y, &new_x, &[1.0, 1.0]) {
            Err(RegressionError::Matrix(e)) => assert_eq!(e.kind(), MatrixErrorKind::Dimension),
            other => panic!("expected dimension error, got {other:?}"),
        }
    }

    #[test]
    fn test_no_degrees_of_freedom_keeps_exact_fit() {
        let x = line_design(&[0.0, 1.0]);
        let y = column_vector_from(&[0.0, 1.0]);
        let new_x = column_vector_from(&[2.0]);
        let model = weighted_linear_regression(&x, &y, &new_x, &[1.0, 1.0]).unwrap();

        assert_eq!(model.residual_df, 0);
        assert!(model.betas.equals(&column_vector_from(&[0.0, 1.0]), 1e-12));
        assert!(model.y_hat.equals(&column_vector_from(&[2.0]), 1e-12));
        assert!(model.error_variance.is_nan());
        assert!(model.beta_standard_errors.iter().all(|se| se.is_nan()));
        assert!(model.y_hat_standard_error.iter().all(|se| se.is_nan()));
    }

    #[test]
    fn test_empty_new_x() {
        let x = line_design(&[0.0, 1.0, 2.0]);
        let y = column_vector_from(&[0.0, 1.0, 2.5]);
        let new_x = Matrix::zeros(0, 1);

        let model = weighted_linear_regression(&x, &y, &new_x, &[1.0; 3]).unwrap();
        assert_eq!(model.y_hat.shape(), (0, 0));
        assert!(model.y_hat_standard_error.is_empty());
    }

    #[test]
    fn test_builder_without_weights_uses_unit_weights() {
        let x = line_design(&[0.0, 1.0, 2.0, 3.0]);
        let y = column_vector_from(&[1.0, 2.0, 2.5, 4.5]);
        let new_x = column_vector_from(&[1.5]);

        let built = WlsRegressor::builder().build().fit(&x, &y, &new_x).unwrap();
        let direct = weighted_linear_regression(&x, &y, &new_x, &[1.0; 4]).unwrap();
        assert_eq!(built, direct);
    }
}
