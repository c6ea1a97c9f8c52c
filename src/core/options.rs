//! Fit options and configuration.

use thiserror::Error;

/// How the error variance scaling the coefficient covariance is obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceMode {
    /// Estimate the error variance from the residuals:
    /// Σ wᵢ rᵢ² / (n - p).
    ///
    /// Weights are only required to be proportional to 1/σᵢ².
    #[default]
    Weighted,
    /// The weights are exactly 1/σᵢ² for known absolute uncertainties σᵢ,
    /// so the error variance is fixed at 1.
    SigmaDerived,
}

/// How the normal-equations matrix X'WX is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InversionMethod {
    /// Closed-form adjugate inverse. Only 2x2 systems (intercept plus one slope).
    #[default]
    ClosedForm,
    /// QR decomposition. Any number of coefficients.
    Qr,
}

/// Configuration options for a regression fit.
#[derive(Debug, Clone)]
pub struct FitOptions {
    /// Error variance handling (default: `Weighted`).
    pub mode: VarianceMode,
    /// Normal-equations inversion (default: `ClosedForm`).
    pub inversion: InversionMethod,
    /// Magnitude below which a diagonal entry of R marks the system singular.
    /// Only used by `InversionMethod::Qr` (default: 1e-10).
    pub singular_tolerance: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            mode: VarianceMode::Weighted,
            inversion: InversionMethod::ClosedForm,
            singular_tolerance: 1e-10,
        }
    }
}

/// Errors from invalid fit options or interval confidence levels.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("confidence_level must be in (0, 1), got {0}")]
    InvalidConfidenceLevel(f64),
    #[error("singular_tolerance must be positive, got {0}")]
    InvalidTolerance(f64),
}

impl FitOptions {
    /// Create a new builder for fit options.
    pub fn builder() -> FitOptionsBuilder {
        FitOptionsBuilder::default()
    }

    /// Options for weights derived from known standard deviations.
    pub fn sigma_derived() -> Self {
        Self {
            mode: VarianceMode::SigmaDerived,
            ..Default::default()
        }
    }

    /// Validate the options and return an error if invalid.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.singular_tolerance > 0.0) {
            return Err(OptionsError::InvalidTolerance(self.singular_tolerance));
        }
        Ok(())
    }
}

pub(crate) fn validate_confidence_level(level: f64) -> Result<(), OptionsError> {
    if !(level > 0.0 && level < 1.0) {
        return Err(OptionsError::InvalidConfidenceLevel(level));
    }
    Ok(())
}

/// Builder for `FitOptions`.
#[derive(Debug, Clone, Default)]
pub struct FitOptionsBuilder {
    options: FitOptions,
}

impl FitOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error variance mode.
    pub fn mode(mut self, mode: VarianceMode) -> Self {
        self.options.mode = mode;
        self
    }

    /// Set the normal-equations inversion method.
    pub fn inversion(mut self, inversion: InversionMethod) -> Self {
        self.options.inversion = inversion;
        self
    }

    /// Set the singularity tolerance used by QR inversion.
    pub fn singular_tolerance(mut self, tol: f64) -> Self {
        self.options.singular_tolerance = tol;
        self
    }

    /// Build and validate the options.
    pub fn build(self) -> Result<FitOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }

    /// Build without validation. Validation then happens at fit time.
    pub fn build_unchecked(self) -> FitOptions {
        self.options
    }
}
