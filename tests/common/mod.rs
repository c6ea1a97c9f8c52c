//! Common test utilities and fixtures.
#![allow(dead_code)]

use linfit::{column_vector_from, Matrix};

/// Install a test logger once. Controlled by `LINFIT_LOG`.
pub fn init_logging() {
    let env = env_logger::Env::default().filter_or("LINFIT_LOG", "warn");
    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

/// Straight-line design matrix: an intercept column of ones followed by `xs`.
pub fn line_design(xs: &[f64]) -> Matrix {
    column_vector_from(xs).prepend_column(1.0)
}

/// Five-point reference data set:
/// x = [0, 1, 2, 3, 4], y = [0.1, 2.2, 2.7, 3, 4], predicted at x = 5.
pub fn reference_data() -> (Matrix, Matrix, Matrix) {
    let x = line_design(&[0.0, 1.0, 2.0, 3.0, 4.0]);
    let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
    let new_x = column_vector_from(&[5.0]);
    (x, y, new_x)
}

/// Per-observation standard deviations for the reference data.
pub const REFERENCE_SIGMAS: [f64; 5] = [1.0, 1.0, 2.0, 2.0, 2.0];

/// Inverse-variance weights for `REFERENCE_SIGMAS`.
pub fn reference_weights() -> Vec<f64> {
    REFERENCE_SIGMAS.iter().map(|s| 1.0 / (s * s)).collect()
}

/// Polynomial design matrix [1, x, x², ..., x^degree] for each x.
pub fn polynomial_design(xs: &[f64], degree: usize) -> Matrix {
    Matrix::from_fn(xs.len(), degree + 1, |i, j| xs[i].powi(j as i32))
}

/// Assert two slices agree element-wise within `epsilon`.
pub fn assert_all_close(actual: &[f64], expected: &[f64], epsilon: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= epsilon,
            "element {i}: got {a}, expected {e} (epsilon {epsilon})"
        );
    }
}
