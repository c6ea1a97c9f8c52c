//! Regression solvers.

mod ols;
mod sigma;
mod traits;
mod wls;

pub use ols::{unweighted_linear_regression, OlsRegressor, OlsRegressorBuilder};
pub use sigma::{
    inverse_variance_weights, sigma_linear_regression, SigmaRegressor, SigmaRegressorBuilder,
};
pub use traits::{RegressionError, Regressor};
pub use wls::{weighted_linear_regression, WlsRegressor, WlsRegressorBuilder};
