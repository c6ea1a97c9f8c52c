//! Coefficient and prediction inference tests.

mod common;

use approx::assert_abs_diff_eq;
use common::{reference_data, REFERENCE_SIGMAS};
use linfit::diagnostics::{reduced_chi_squared, standardized_residuals, weighted_residuals};
use linfit::prelude::*;

// ============================================================================
// Coefficient Inference
// ============================================================================

#[test]
fn test_coefficient_intervals_contain_estimates() {
    let (x, y, new_x) = reference_data();
    let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

    let (lower, upper) = CoefficientInference::confidence_intervals(&model, 0.95).unwrap();
    for (j, beta) in model.coefficients().iter().enumerate() {
        assert!(lower[j] < *beta && *beta < upper[j]);
        assert_abs_diff_eq!(beta - lower[j], upper[j] - beta, epsilon = 1e-12);
    }
}

#[test]
fn test_higher_level_gives_wider_intervals() {
    let (x, y, new_x) = reference_data();
    let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

    let (l90, u90) = CoefficientInference::confidence_intervals(&model, 0.90).unwrap();
    let (l99, u99) = CoefficientInference::confidence_intervals(&model, 0.99).unwrap();
    for j in 0..2 {
        assert!(u99[j] - l99[j] > u90[j] - l90[j]);
    }
}

#[test]
fn test_slope_p_value() {
    let (x, y, new_x) = reference_data();
    let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

    // t = 0.86 / 0.177388 = 4.848 on 3 df, two-sided p ≈ 0.0168
    let p = CoefficientInference::p_values(&model);
    assert_abs_diff_eq!(p[1], 0.0168, epsilon = 1e-3);
}

#[test]
fn test_known_sigmas_use_normal_reference() {
    let (x, y, new_x) = reference_data();
    let model = sigma_linear_regression(&x, &y, &new_x, &REFERENCE_SIGMAS).unwrap();

    let t = CoefficientInference::t_statistics(&model);
    let p = CoefficientInference::p_values(&model);

    // 0.956186 / 0.476240 = 2.0078, two-sided normal p ≈ 0.0447
    assert_abs_diff_eq!(t[1], 2.0078, epsilon = 1e-3);
    assert_abs_diff_eq!(p[1], 0.0447, epsilon = 1e-3);
}

// ============================================================================
// Prediction Intervals
// ============================================================================

#[test]
fn test_confidence_band_uses_prediction_standard_error() {
    let (x, y, new_x) = reference_data();
    let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

    let band = prediction_intervals(&model, 0.95, IntervalType::Confidence).unwrap();

    // t(0.975, 3) = 3.182446
    assert_abs_diff_eq!(band.fit[0], 4.98, epsilon = 1e-10);
    assert_abs_diff_eq!(band.upper[0] - band.fit[0], 3.182446 * 0.58833, epsilon = 1e-3);
}

#[test]
fn test_prediction_interval_adds_error_variance() {
    let (x, y, new_x) = reference_data();
    let model = sigma_linear_regression(&x, &y, &new_x, &REFERENCE_SIGMAS).unwrap();

    let pi = prediction_intervals(&model, 0.95, IntervalType::Prediction).unwrap();

    let se = model.y_hat_standard_error[0];
    assert_abs_diff_eq!(pi.se[0], (se * se + 1.0).sqrt(), epsilon = 1e-12);
}

#[test]
fn test_invalid_prediction_level() {
    let (x, y, new_x) = reference_data();
    let model = unweighted_linear_regression(&x, &y, &new_x).unwrap();

    assert_eq!(
        prediction_intervals(&model, 0.0, IntervalType::Confidence).unwrap_err(),
        OptionsError::InvalidConfidenceLevel(0.0)
    );
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_residual_diagnostics() {
    let (x, y, new_x) = reference_data();
    let model = sigma_linear_regression(&x, &y, &new_x, &REFERENCE_SIGMAS).unwrap();

    let weighted = weighted_residuals(&model);
    let standardized = standardized_residuals(&model);

    // Error variance is 1, so both agree; each is e_i / sigma_i.
    for i in 0..5 {
        assert_abs_diff_eq!(weighted[i], standardized[i], epsilon = 1e-15);
        assert_abs_diff_eq!(
            weighted[i],
            model.residuals[i] / REFERENCE_SIGMAS[i],
            epsilon = 1e-12
        );
    }

    let weighted_fit = weighted_linear_regression(
        &x,
        &y,
        &new_x,
        &REFERENCE_SIGMAS.map(|s| 1.0 / (s * s)),
    )
    .unwrap();
    assert_abs_diff_eq!(
        reduced_chi_squared(&model),
        weighted_fit.error_variance,
        epsilon = 1e-12
    );
}
