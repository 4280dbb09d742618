//! # bs-greeks: Closed-Form Black-Scholes Pricing
//!
//! Prices of European calls and puts and their Greeks (delta, gamma, vega,
//! theta, rho) from the five Black-Scholes inputs.
//!
//! ## Key Features
//!
//! - **Closed form**: one validated d₁/d₂ computation feeds every formula
//! - **Explicit errors**: `S`, `K`, `T` or `σ` ≤ 0 is rejected before any arithmetic
//! - **Selective Greeks**: choose the Greeks to compute with [`GreekSet`]
//! - **Form boundary**: percent ↔ decimal conversion lives in [`form`] only
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks::{value, GreekSet, OptionParameters};
//!
//! // S = 100, K = 100, T = 1 year, r = 5%, sigma = 20%
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).expect("valid inputs");
//! let v = value(&params, GreekSet::ALL).expect("finite result");
//!
//! println!("call {:.4}  put {:.4}", v.prices.call_price, v.prices.put_price);
//! assert!((v.prices.call_price - 10.4506).abs() < 1e-4);
//! ```
//!
//! ## Units
//!
//! The core works in decimal fractions only: `r = 0.05` is 5% and
//! `sigma = 0.2` is 20% annualized volatility. `T` is in years.

pub mod error;
pub mod math_utils;
pub mod params;
pub mod analytics;
pub mod dates;
pub mod form;
pub mod output;

pub use analytics::greeks::{compute_greeks, GreekSet, GreeksResult};
pub use analytics::valuation::{value, OptionPrices, Valuation};
pub use error::{PricingError, PricingResult};
pub use params::{OptionParameters, OptionType};
