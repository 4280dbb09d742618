// src/params.rs
//! Model inputs for the closed-form engine.
//!
//! All rates and volatilities are decimal fractions: `r = 0.05` is 5% and
//! `sigma = 0.20` is 20% annualized volatility. Percent units exist only at
//! the [`crate::form`] boundary.

use crate::error::{validation::validate_inputs, PricingResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Call or put
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

/// The five scalar inputs of the Black-Scholes formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParameters {
    /// Underlying spot price
    pub s: f64,
    /// Strike price
    pub k: f64,
    /// Time to expiry in years
    pub t: f64,
    /// Continuously compounded risk-free rate
    pub r: f64,
    /// Annualized volatility
    pub sigma: f64,
}

impl OptionParameters {
    /// Build a validated parameter set
    pub fn new(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<Self> {
        let params = OptionParameters { s, k, t, r, sigma };
        params.validate()?;
        Ok(params)
    }

    /// Validate the parameter set
    ///
    /// Requires `S > 0`, `K > 0`, `T > 0`, `sigma > 0` and every field finite.
    pub fn validate(&self) -> PricingResult<()> {
        validate_inputs(self.s, self.k, self.t, self.r, self.sigma)
    }

    /// Discount factor `e^(-rT)`
    pub fn discount_factor(&self) -> f64 {
        (-self.r * self.t).exp()
    }

    /// Copy with a different spot, used for bump-and-reprice checks
    pub fn with_spot(&self, s: f64) -> Self {
        OptionParameters { s, ..*self }
    }

    /// Copy with a different volatility
    pub fn with_sigma(&self, sigma: f64) -> Self {
        OptionParameters { sigma, ..*self }
    }
}

impl Default for OptionParameters {
    fn default() -> Self {
        OptionParameters {
            s: 100.0,
            k: 100.0,
            t: 1.0,
            r: 0.05,
            sigma: 0.2,
        }
    }
}
