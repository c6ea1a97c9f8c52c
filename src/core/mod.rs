//! Core types: matrices, options, results.

mod column_vector;
mod matrix;
mod model;
mod options;
mod prediction;

pub use column_vector::{column_vector_from, coordinatewise_product};
pub use matrix::{Matrix, MatrixError, MatrixErrorKind};
pub use model::LinearModel;
pub use options::{FitOptions, FitOptionsBuilder, InversionMethod, OptionsError, VarianceMode};
pub(crate) use options::validate_confidence_level;
pub use prediction::{IntervalType, PredictionResult};
