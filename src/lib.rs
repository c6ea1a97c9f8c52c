//! Weighted least-squares linear regression with propagated uncertainty.
//!
//! The crate fits y = Xβ by minimizing Σ wᵢ (yᵢ - xᵢ'β)² and propagates the
//! coefficient covariance to standard errors for both the coefficients and
//! predictions at new points. It is built on a small dense [`Matrix`] type.
//!
//! Three entry points share one engine:
//!
//! - [`weighted_linear_regression`]: caller-supplied weights, error variance
//!   estimated from the residuals.
//! - [`sigma_linear_regression`]: per-observation standard deviations σᵢ,
//!   weights 1/σᵢ², error variance fixed at 1.
//! - [`unweighted_linear_regression`]: ordinary least squares.
//!
//! # Intercept convention
//!
//! The design matrix `x` must already contain its intercept column of ones.
//! The prediction inputs `new_x` must *not*: the engine prepends the
//! intercept column to `new_x` itself.
//!
//! # Example
//!
//! ```rust
//! use linfit::prelude::*;
//!
//! let x = column_vector_from(&[0.0, 1.0, 2.0, 3.0, 4.0]).prepend_column(1.0);
//! let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
//! let new_x = column_vector_from(&[5.0]);
//!
//! let model = unweighted_linear_regression(&x, &y, &new_x)?;
//!
//! assert!((model.coefficients()[1] - 0.86).abs() < 1e-10);
//! assert!((model.predictions()[0] - 4.98).abs() < 1e-10);
//! println!("ŷ = {:.3} ± {:.3}", model.predictions()[0], model.y_hat_standard_error[0]);
//! # Ok::<(), RegressionError>(())
//! ```
//!
//! Models with more than one slope need [`InversionMethod::Qr`]; the default
//! closed-form inverse only handles the 2x2 normal equations of a straight
//! line.

pub mod core;
pub mod diagnostics;
pub mod inference;
pub mod solvers;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::core::{
        column_vector_from, coordinatewise_product, FitOptions, FitOptionsBuilder,
        IntervalType, InversionMethod, LinearModel, Matrix, MatrixError, MatrixErrorKind,
        OptionsError, PredictionResult, VarianceMode,
    };
    pub use crate::inference::{prediction_intervals, CoefficientInference};
    pub use crate::solvers::{
        sigma_linear_regression, unweighted_linear_regression, weighted_linear_regression,
        OlsRegressor, RegressionError, Regressor, SigmaRegressor, WlsRegressor,
    };
}

pub use crate::core::{
    column_vector_from, FitOptions, InversionMethod, LinearModel, Matrix, MatrixError,
    MatrixErrorKind, VarianceMode,
};
pub use crate::solvers::{
    sigma_linear_regression, unweighted_linear_regression, weighted_linear_regression,
    RegressionError, Regressor,
};
