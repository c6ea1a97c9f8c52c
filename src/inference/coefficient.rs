//! Coefficient inference calculations.

use super::distribution::Reference;
use crate::core::{validate_confidence_level, LinearModel, OptionsError};

/// Computes inference statistics for regression coefficients.
///
/// Tests use Student-t with n - p degrees of freedom for models whose error
/// variance was estimated (`VarianceMode::Weighted`) and the standard normal
/// for models fit with known sigmas (`VarianceMode::SigmaDerived`).
pub struct CoefficientInference;

impl CoefficientInference {
    /// Compute t-statistics for coefficients.
    ///
    /// t_j = β_j / SE(β_j)
    pub fn t_statistics(model: &LinearModel) -> Vec<f64> {
        model
            .coefficients()
            .iter()
            .zip(&model.beta_standard_errors)
            .map(|(&beta, &se)| {
                if se.is_nan() || se == 0.0 {
                    f64::NAN
                } else {
                    beta / se
                }
            })
            .collect()
    }

    /// Compute two-sided p-values for H₀: β_j = 0.
    ///
    /// p_j = 2 * P(|T| > |t_j|)
    pub fn p_values(model: &LinearModel) -> Vec<f64> {
        let t_stats = Self::t_statistics(model);
        let Some(reference) = Reference::for_model(model) else {
            return vec![f64::NAN; t_stats.len()];
        };

        t_stats
            .iter()
            .map(|&t| {
                if t.is_nan() {
                    f64::NAN
                } else {
                    2.0 * (1.0 - reference.cdf(t.abs()))
                }
            })
            .collect()
    }

    /// Compute confidence intervals for coefficients.
    ///
    /// CI_j = β_j ± q * SE(β_j), q the two-sided critical value.
    ///
    /// Returns `(lower, upper)`.
    pub fn confidence_intervals(
        model: &LinearModel,
        confidence_level: f64,
    ) -> Result<(Vec<f64>, Vec<f64>), OptionsError> {
        validate_confidence_level(confidence_level)?;

        let coefficients = model.coefficients();
        let n = coefficients.len();
        let Some(reference) = Reference::for_model(model) else {
            return Ok((vec![f64::NAN; n], vec![f64::NAN; n]));
        };
        let q = reference.critical_value(confidence_level);

        let mut lower = Vec::with_capacity(n);
        let mut upper = Vec::with_capacity(n);
        for (beta, se) in coefficients.iter().zip(&model.beta_standard_errors) {
            let margin = q * se;
            lower.push(beta - margin);
            upper.push(beta + margin);
        }

        Ok((lower, upper))
    }
}
