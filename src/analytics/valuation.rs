// src/analytics/valuation.rs
//! One-call valuation of a parameter set: both prices plus the selected Greeks,
//! and per-type dispatch for callers that hold an [`OptionType`].

use crate::analytics::bs_analytic::{self, Intermediates};
use crate::analytics::greeks::{compute_greeks, GreekSet, GreeksResult};
use crate::error::validation::check_computed;
use crate::error::PricingResult;
use crate::params::{OptionParameters, OptionType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Call and put prices for the same inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionPrices {
    pub call_price: f64,
    pub put_price: f64,
}

impl OptionPrices {
    pub fn compute(params: &OptionParameters) -> PricingResult<Self> {
        let im = Intermediates::compute(params.s, params.k, params.t, params.r, params.sigma)?;
        Ok(OptionPrices {
            call_price: check_computed("call price", im.call_price())?,
            put_price: check_computed("put price", im.put_price())?,
        })
    }

    /// `C - P`, which put-call parity pins to `S - K·e^(-rT)`
    pub fn parity_spread(&self) -> f64 {
        self.call_price - self.put_price
    }
}

/// Full result of valuing one parameter set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub params: OptionParameters,
    pub prices: OptionPrices,
    #[serde(skip_serializing_if = "GreeksResult::is_empty", default)]
    pub greeks: GreeksResult,
}

/// Value `params`, computing the Greeks selected in `greeks`
pub fn value(params: &OptionParameters, greeks: GreekSet) -> PricingResult<Valuation> {
    params.validate()?;
    debug!(
        s = params.s,
        k = params.k,
        t = params.t,
        r = params.r,
        sigma = params.sigma,
        greeks = ?greeks,
        "valuing option"
    );
    let prices = OptionPrices::compute(params)?;
    let greeks = compute_greeks(params, greeks)?;
    debug!(
        call_price = prices.call_price,
        put_price = prices.put_price,
        "valuation complete"
    );
    Ok(Valuation {
        params: *params,
        prices,
        greeks,
    })
}

/// Price of a call or put
pub fn price(option_type: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    match option_type {
        OptionType::Call => bs_analytic::call_price(p.s, p.k, p.t, p.r, p.sigma),
        OptionType::Put => bs_analytic::put_price(p.s, p.k, p.t, p.r, p.sigma),
    }
}

/// Delta of a call or put
pub fn delta(option_type: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    match option_type {
        OptionType::Call => bs_analytic::call_delta(p.s, p.k, p.t, p.r, p.sigma),
        OptionType::Put => bs_analytic::put_delta(p.s, p.k, p.t, p.r, p.sigma),
    }
}

/// Theta of a call or put
pub fn theta(option_type: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    match option_type {
        OptionType::Call => bs_analytic::call_theta(p.s, p.k, p.t, p.r, p.sigma),
        OptionType::Put => bs_analytic::put_theta(p.s, p.k, p.t, p.r, p.sigma),
    }
}

/// Rho of a call or put
pub fn rho(option_type: OptionType, p: &OptionParameters) -> PricingResult<f64> {
    match option_type {
        OptionType::Call => bs_analytic::call_rho(p.s, p.k, p.t, p.r, p.sigma),
        OptionType::Put => bs_analytic::put_rho(p.s, p.k, p.t, p.r, p.sigma),
    }
}
