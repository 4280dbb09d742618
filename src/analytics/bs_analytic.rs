// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes formulas for European options and Greeks
//!
//! # Mathematical Foundation
//!
//! Under the Black-Scholes model, the underlying asset follows:
//! ```text
//! dS_t = r S_t dt + σ S_t dW_t
//! ```
//!
//! Every price and Greek is a closed-form expression in the two quantities
//! ```text
//! d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
//! d₂ = d₁ - σ√T
//! ```
//!
//! All public functions take `(s, k, t, r, sigma)` in decimal units, validate
//! them before computing, and return [`PricingError::InvalidInput`] for
//! `S ≤ 0`, `K ≤ 0`, `T ≤ 0` or `σ ≤ 0`. A non-finite result is reported as
//! [`PricingError::NumericOverflow`] rather than returned.
//!
//! [`PricingError::InvalidInput`]: crate::error::PricingError::InvalidInput
//! [`PricingError::NumericOverflow`]: crate::error::PricingError::NumericOverflow

use crate::error::validation::{check_computed, validate_finite, validate_inputs, validate_positive};
use crate::error::PricingResult;
use crate::math_utils::{norm_cdf, norm_pdf};

/// d1, d2 and the shared factors for one validated input set
///
/// Each formula method reads only these fields, never another formula's output.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Intermediates {
    pub s: f64,
    pub k: f64,
    pub t: f64,
    pub r: f64,
    pub sigma: f64,
    pub sqrt_t: f64,
    pub discount: f64,
    pub d1: f64,
    pub d2: f64,
}

impl Intermediates {
    pub(crate) fn compute(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<Self> {
        validate_inputs(s, k, t, r, sigma)?;
        let sqrt_t = t.sqrt();
        let discount = check_computed("exp(-rT)", (-r * t).exp())?;
        let d1 = check_computed("d1", raw_d1(s, k, t, r, sigma))?;
        let d2 = check_computed("d2", d1 - sigma * sqrt_t)?;
        Ok(Intermediates {
            s,
            k,
            t,
            r,
            sigma,
            sqrt_t,
            discount,
            d1,
            d2,
        })
    }

    pub(crate) fn call_price(&self) -> f64 {
        self.s * norm_cdf(self.d1) - self.k * self.discount * norm_cdf(self.d2)
    }

    pub(crate) fn put_price(&self) -> f64 {
        self.k * self.discount * norm_cdf(-self.d2) - self.s * norm_cdf(-self.d1)
    }

    pub(crate) fn call_delta(&self) -> f64 {
        norm_cdf(self.d1)
    }

    pub(crate) fn put_delta(&self) -> f64 {
        norm_cdf(self.d1) - 1.0
    }

    pub(crate) fn gamma(&self) -> f64 {
        norm_pdf(self.d1) / (self.s * self.sigma * self.sqrt_t)
    }

    pub(crate) fn vega(&self) -> f64 {
        self.s * norm_pdf(self.d1) * self.sqrt_t
    }

    pub(crate) fn call_theta(&self) -> f64 {
        self.time_decay() - self.r * self.k * self.discount * norm_cdf(self.d2)
    }

    pub(crate) fn put_theta(&self) -> f64 {
        self.time_decay() + self.r * self.k * self.discount * norm_cdf(-self.d2)
    }

    pub(crate) fn call_rho(&self) -> f64 {
        self.k * self.t * self.discount * norm_cdf(self.d2)
    }

    pub(crate) fn put_rho(&self) -> f64 {
        -self.k * self.t * self.discount * norm_cdf(-self.d2)
    }

    // -S·φ(d₁)·σ/(2√T), common to both thetas
    fn time_decay(&self) -> f64 {
        -self.s * norm_pdf(self.d1) * self.sigma / (2.0 * self.sqrt_t)
    }
}

fn raw_d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

fn evaluate(
    name: &str,
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
    formula: fn(&Intermediates) -> f64,
) -> PricingResult<f64> {
    let im = Intermediates::compute(s, k, t, r, sigma)?;
    check_computed(name, formula(&im))
}

/// Black-Scholes d₁
///
/// # Formula
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// ```
pub fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    validate_inputs(s, k, t, r, sigma)?;
    check_computed("d1", raw_d1(s, k, t, r, sigma))
}

/// Black-Scholes d₂ from a previously computed d₁
///
/// # Formula
/// ```text
/// d₂ = d₁ - σ√T
/// ```
pub fn d2(d1: f64, sigma: f64, t: f64) -> PricingResult<f64> {
    validate_finite("d1", d1)?;
    validate_positive("sigma", sigma)?;
    validate_positive("T", t)?;
    check_computed("d2", d1 - sigma * t.sqrt())
}

/// Black-Scholes European call option price
///
/// # Formula
/// ```text
/// C(S,K,T,r,σ) = S*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// # Parameters
/// - `s`: Current underlying price
/// - `k`: Strike price
/// - `t`: Time to expiration in years
/// - `r`: Risk-free rate (decimal)
/// - `sigma`: Volatility (decimal)
///
/// # Example
/// ```
/// use bs_greeks::analytics::bs_analytic::call_price;
///
/// let c = call_price(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!((c - 10.4506).abs() < 1e-4);
/// ```
pub fn call_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("call price", s, k, t, r, sigma, Intermediates::call_price)
}

/// Black-Scholes European put option price
///
/// # Formula
/// ```text
/// P(S,K,T,r,σ) = K*e^(-rT)*Φ(-d₂) - S*Φ(-d₁)
/// ```
pub fn put_price(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("put price", s, k, t, r, sigma, Intermediates::put_price)
}

/// Black-Scholes Delta (∂V/∂S) for a European call
///
/// # Formula
/// ```text
/// Δ = Φ(d₁)
/// ```
///
/// # Interpretation
/// - Hedge ratio: number of shares to buy per option sold
/// - Range: [0, 1] for calls
pub fn call_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("call delta", s, k, t, r, sigma, Intermediates::call_delta)
}

/// Black-Scholes Delta for a European put
///
/// # Formula
/// ```text
/// Δ = Φ(d₁) - 1
/// ```
///
/// Range: [-1, 0]
pub fn put_delta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("put delta", s, k, t, r, sigma, Intermediates::put_delta)
}

/// Black-Scholes Gamma (∂²V/∂S²)
///
/// # Formula
/// ```text
/// Γ = φ(d₁) / (S * σ * √T)
/// ```
///
/// # Interpretation
/// - Rate of change of Delta w.r.t. underlying price
/// - Maximum at-the-money
/// - Same for calls and puts
pub fn gamma(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("gamma", s, k, t, r, sigma, Intermediates::gamma)
}

/// Black-Scholes Vega (∂V/∂σ)
///
/// # Formula
/// ```text
/// ν = S * φ(d₁) * √T
/// ```
///
/// Price change per unit (not per percentage point) of volatility.
/// Same for calls and puts.
pub fn vega(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("vega", s, k, t, r, sigma, Intermediates::vega)
}

/// Black-Scholes Theta for a European call
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) - r*K*e^(-rT)*Φ(d₂)
/// ```
///
/// Per year of calendar time; divide by 365 for a daily figure.
pub fn call_theta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("call theta", s, k, t, r, sigma, Intermediates::call_theta)
}

/// Black-Scholes Theta for a European put
///
/// # Formula
/// ```text
/// Θ = -S*φ(d₁)*σ/(2√T) + r*K*e^(-rT)*Φ(-d₂)
/// ```
pub fn put_theta(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("put theta", s, k, t, r, sigma, Intermediates::put_theta)
}

/// Black-Scholes Rho (∂V/∂r) for a European call
///
/// # Formula
/// ```text
/// ρ = K * T * e^(-rT) * Φ(d₂)
/// ```
pub fn call_rho(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("call rho", s, k, t, r, sigma, Intermediates::call_rho)
}

/// Black-Scholes Rho for a European put
///
/// # Formula
/// ```text
/// ρ = -K * T * e^(-rT) * Φ(-d₂)
/// ```
pub fn put_rho(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> PricingResult<f64> {
    evaluate("put rho", s, k, t, r, sigma, Intermediates::put_rho)
}
