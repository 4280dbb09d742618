// src/error.rs
use thiserror::Error;

/// Error types for the bs-greeks library
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A model input outside the domain of the closed-form formulas
    #[error("Invalid input '{parameter}' = {value}: {constraint}")]
    InvalidInput {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// An intermediate or final quantity overflowed to a non-finite value
    #[error("Numeric overflow computing {quantity}: got {value}")]
    NumericOverflow { quantity: String, value: f64 },

    /// Raw text from the input form that could not be read as a number
    #[error("Invalid field '{field}' = {input:?}: {reason}")]
    InvalidField {
        field: String,
        input: String,
        reason: String,
    },

    /// Calendar dates that do not describe a positive time to expiry
    #[error("Invalid dates: {reason}")]
    InvalidDate { reason: String },

    /// Rendering or writing results failed
    #[error("Output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        PricingError::Output(err.to_string())
    }
}

impl From<serde_json::Error> for PricingError {
    fn from(err: serde_json::Error) -> Self {
        PricingError::Output(err.to_string())
    }
}

impl PricingError {
    /// True for errors caused by the caller's inputs rather than by the computation.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PricingError::InvalidInput { .. }
                | PricingError::InvalidField { .. }
                | PricingError::InvalidDate { .. }
        )
    }
}

/// Result type alias for bs-greeks operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Validation utilities
pub mod validation {
    use super::{PricingError, PricingResult};

    /// Validate that a parameter is finite and strictly positive
    pub fn validate_positive(name: &str, value: f64) -> PricingResult<()> {
        validate_finite(name, value)?;
        if value <= 0.0 {
            Err(PricingError::InvalidInput {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that an input is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> PricingResult<()> {
        if !value.is_finite() {
            Err(PricingError::InvalidInput {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Check a computed quantity, returning it unchanged when finite
    pub fn check_computed(quantity: &str, value: f64) -> PricingResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(PricingError::NumericOverflow {
                quantity: quantity.to_string(),
                value,
            })
        }
    }

    /// Validate the five Black-Scholes inputs in one pass
    pub fn validate_inputs(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<()> {
        validate_positive("S", s)?;
        validate_positive("K", k)?;
        validate_positive("T", t)?;
        validate_finite("r", r)?;
        validate_positive("sigma", sigma)
    }
}
