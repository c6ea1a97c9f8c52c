//! Regression diagnostics.
//!
//! - **Residuals**: weighted and standardized residuals for outlier detection
//! - **Goodness of fit**: reduced chi-squared for checking supplied sigmas
//!
//! # Example
//!
//! ```rust
//! use linfit::diagnostics::{reduced_chi_squared, residual_outliers};
//! use linfit::prelude::*;
//!
//! let x = column_vector_from(&[0.0, 1.0, 2.0, 3.0, 4.0]).prepend_column(1.0);
//! let y = column_vector_from(&[0.1, 2.2, 2.7, 3.0, 4.0]);
//! let new_x = column_vector_from(&[5.0]);
//! let model = sigma_linear_regression(&x, &y, &new_x, &[1.0, 1.0, 2.0, 2.0, 2.0])?;
//!
//! let chi2 = reduced_chi_squared(&model);
//! let outliers = residual_outliers(&model, Some(2.0));
//! assert!(chi2 > 0.0);
//! assert!(outliers.is_empty());
//! # Ok::<(), RegressionError>(())
//! ```

mod residuals;

pub use residuals::{
    reduced_chi_squared, residual_outliers, standardized_residuals, weighted_residuals,
};
