//! Statistical inference (t-statistics, p-values, confidence intervals).

mod coefficient;
mod distribution;
mod prediction;

pub use coefficient::CoefficientInference;
pub use prediction::prediction_intervals;
