//! Prediction interval calculations.

use super::distribution::Reference;
use crate::core::{
    validate_confidence_level, IntervalType, LinearModel, OptionsError, PredictionResult,
};

/// Computes intervals around the predictions stored in a fitted model.
///
/// # Arguments
/// * `model` - Fitted model; its `y_hat` and `y_hat_standard_error` are used
/// * `confidence_level` - Confidence level (e.g., 0.95)
/// * `interval_type` - Confidence interval on the mean response, or prediction
///   interval for a new observation of unit weight
///
/// For a prediction interval the variance is SE(ŷ)² + σ², with σ² the model's
/// error variance (exactly 1 for sigma-derived fits).
pub fn prediction_intervals(
    model: &LinearModel,
    confidence_level: f64,
    interval_type: IntervalType,
) -> Result<PredictionResult, OptionsError> {
    validate_confidence_level(confidence_level)?;

    let fit = model.predictions();
    let se: Vec<f64> = model
        .y_hat_standard_error
        .iter()
        .map(|&s| match interval_type {
            IntervalType::Confidence => s,
            IntervalType::Prediction => (s * s + model.error_variance).sqrt(),
        })
        .collect();

    let n = fit.len();
    let Some(reference) = Reference::for_model(model) else {
        return Ok(PredictionResult::with_intervals(
            fit,
            vec![f64::NAN; n],
            vec![f64::NAN; n],
            vec![f64::NAN; n],
        ));
    };
    let q = reference.critical_value(confidence_level);

    let lower = fit.iter().zip(&se).map(|(f, s)| f - q * s).collect();
    let upper = fit.iter().zip(&se).map(|(f, s)| f + q * s).collect();

    Ok(PredictionResult::with_intervals(fit, lower, upper, se))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::column_vector_from;
    use crate::solvers::unweighted_linear_regression;

    #[test]
    fn test_prediction_interval_wider_than_confidence() {
        let x = column_vector_from(&[0.0, 1.0, 2.0, 3.0, 4.0]).prepend_column(1.0);
        let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
        let new_x = column_vector_from(&[-1.0, 2.0, 5.0]);
        let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

        let ci = prediction_intervals(&model, 0.95, IntervalType::Confidence).unwrap();
        let pi = prediction_intervals(&model, 0.95, IntervalType::Prediction).unwrap();

        assert_eq!(ci.len(), 3);
        assert_eq!(ci.se, model.y_hat_standard_error);
        for i in 0..3 {
            let ci_width = ci.upper[i] - ci.lower[i];
            let pi_width = pi.upper[i] - pi.lower[i];
            assert!(pi_width > ci_width, "PI should be wider than CI");
            assert!(ci.lower[i] < ci.fit[i] && ci.fit[i] < ci.upper[i]);
        }
    }
}
