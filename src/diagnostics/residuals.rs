//! Weighted and standardized residuals.

use crate::core::LinearModel;

/// Compute weighted residuals: sqrt(w_i) * e_i
///
/// These are the residuals of the transformed OLS problem the fit solves.
pub fn weighted_residuals(model: &LinearModel) -> Vec<f64> {
    model
        .weights
        .iter()
        .zip(&model.residuals)
        .map(|(w, e)| w.sqrt() * e)
        .collect()
}

/// Compute standardized residuals: sqrt(w_i) * e_i / σ
///
/// Where σ² is the model's error variance. For sigma-derived fits σ = 1 and
/// these are the normalized deviations e_i / σ_i.
pub fn standardized_residuals(model: &LinearModel) -> Vec<f64> {
    let variance = model.error_variance;
    let weighted = weighted_residuals(model);

    if variance <= 0.0 || !variance.is_finite() {
        return weighted
            .iter()
            .map(|r| if r.abs() < 1e-14 { 0.0 } else { f64::NAN })
            .collect();
    }

    let s = variance.sqrt();
    weighted.iter().map(|r| r / s).collect()
}

/// Reduced chi-squared: Σ w_i e_i² / (n - p).
///
/// Close to 1 when sigma-derived weights describe the scatter correctly.
/// NaN when the model has no residual degrees of freedom.
pub fn reduced_chi_squared(model: &LinearModel) -> f64 {
    if model.residual_df == 0 {
        return f64::NAN;
    }
    model.weighted_rss / model.residual_df as f64
}

/// Indices of observations whose standardized residual exceeds `threshold`
/// in absolute value (default 3.0).
pub fn residual_outliers(model: &LinearModel, threshold: Option<f64>) -> Vec<usize> {
    let threshold = threshold.unwrap_or(3.0);
    standardized_residuals(model)
        .iter()
        .enumerate()
        .filter(|(_, r)| r.abs() > threshold)
        .map(|(i, _)| i)
        .collect()
}
