//! Reference distribution for test statistics of a fitted model.

use crate::core::{LinearModel, VarianceMode};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Student-t with the residual degrees of freedom when the error variance was
/// estimated, standard normal when it was known.
pub(crate) enum Reference {
    StudentsT(StudentsT),
    Normal(Normal),
}

impl Reference {
    /// `None` when the model has no residual degrees of freedom to estimate from.
    pub(crate) fn for_model(model: &LinearModel) -> Option<Self> {
        match model.mode {
            VarianceMode::Weighted => {
                if model.residual_df == 0 {
                    return None;
                }
                StudentsT::new(0.0, 1.0, model.residual_df as f64)
                    .ok()
                    .map(Reference::StudentsT)
            }
            VarianceMode::SigmaDerived => Normal::new(0.0, 1.0).ok().map(Reference::Normal),
        }
    }

    pub(crate) fn cdf(&self, x: f64) -> f64 {
        match self {
            Reference::StudentsT(d) => d.cdf(x),
            Reference::Normal(d) => d.cdf(x),
        }
    }

    pub(crate) fn inverse_cdf(&self, p: f64) -> f64 {
        match self {
            Reference::StudentsT(d) => d.inverse_cdf(p),
            Reference::Normal(d) => d.inverse_cdf(p),
        }
    }

    /// Two-sided critical value for the given confidence level.
    pub(crate) fn critical_value(&self, confidence_level: f64) -> f64 {
        let alpha = 1.0 - confidence_level;
        self.inverse_cdf(1.0 - alpha / 2.0)
    }
}
