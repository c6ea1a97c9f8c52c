//! # Weighted Least Squares with Propagated Uncertainty
//!
//! Fits the same five measurements three ways:
//! - ordinary least squares
//! - weighted least squares with relative weights (error scale estimated)
//! - known measurement uncertainties (error scale fixed)
//!
//! Run with: `cargo run --example wls`

use linfit::inference::{prediction_intervals, CoefficientInference};
use linfit::prelude::*;

fn main() -> Result<(), RegressionError> {
    println!("=== Weighted Least Squares with Uncertainty ===\n");

    // The design matrix carries its own intercept column.
    let x = column_vector_from(&[0.0, 1.0, 2.0, 3.0, 4.0]).prepend_column(1.0);
    let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
    // Prediction inputs do not: the intercept is injected.
    let new_x = column_vector_from(&[5.0]);
    let sigmas = [1.0, 1.0, 2.0, 2.0, 2.0];
    let weights: Vec<f64> = sigmas.iter().map(|s| 1.0 / (s * s)).collect();

    let ols = unweighted_linear_regression(&x, &y, &new_x)?;
    report("Ordinary least squares", &ols);

    let wls = weighted_linear_regression(&x, &y, &new_x, &weights)?;
    report("Weighted (relative weights)", &wls);

    let known = sigma_linear_regression(&x, &y, &new_x, &sigmas)?;
    report("Known sigmas", &known);

    let band = prediction_intervals(&known, 0.95, IntervalType::Prediction)
        .map_err(RegressionError::from)?;
    println!(
        "95% prediction interval at x = 5 (known sigmas): [{:.4}, {:.4}]",
        band.lower[0], band.upper[0]
    );

    Ok(())
}

fn report(title: &str, model: &LinearModel) {
    println!("--- {title} ---");
    let betas = model.coefficients();
    let p_values = CoefficientInference::p_values(model);
    for (j, name) in ["intercept", "slope"].iter().enumerate() {
        println!(
            "{name:>9}: {:>8.4} ± {:.4}  (p = {:.4})",
            betas[j], model.beta_standard_errors[j], p_values[j]
        );
    }
    println!(
        "  y_hat(5): {:>8.4} ± {:.4}",
        model.predictions()[0],
        model.y_hat_standard_error[0]
    );
    println!("  error variance: {:.4}\n", model.error_variance);
}
