// src/analytics/greeks.rs
//! Batched Greek evaluation
//!
//! d₁ and d₂ are computed once per call and shared by every selected
//! formula. Each Greek is still its own closed-form expression in d₁/d₂;
//! none is derived from another Greek's value.

use crate::analytics::bs_analytic::Intermediates;
use crate::error::validation::check_computed;
use crate::error::PricingResult;
use crate::params::OptionParameters;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Selection of Greeks to compute. Theta and rho cover both the call and put variants.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct GreekSet: u32 {
        const NONE  = 0;
        const DELTA = 1 << 0;
        const GAMMA = 1 << 1;
        const VEGA  = 1 << 2;
        const THETA = 1 << 3;
        const RHO   = 1 << 4;
        const ALL   = Self::DELTA.bits()
            | Self::GAMMA.bits()
            | Self::VEGA.bits()
            | Self::THETA.bits()
            | Self::RHO.bits();
    }
}

impl GreekSet {
    /// Parse a comma separated list such as `"delta,vega"`, or `all` / `none`
    pub fn parse_list(list: &str) -> Option<GreekSet> {
        let mut set = GreekSet::NONE;
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            set |= match name.to_ascii_lowercase().as_str() {
                "all" => GreekSet::ALL,
                "none" => GreekSet::NONE,
                "delta" => GreekSet::DELTA,
                "gamma" => GreekSet::GAMMA,
                "vega" => GreekSet::VEGA,
                "theta" => GreekSet::THETA,
                "rho" => GreekSet::RHO,
                _ => return None,
            };
        }
        Some(set)
    }
}

impl Default for GreekSet {
    fn default() -> Self {
        GreekSet::ALL
    }
}

/// Greeks for a call and a put on the same inputs; unselected entries are `None`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GreeksResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_delta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gamma: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vega: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_theta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_theta: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_rho: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_rho: Option<f64>,
}

impl GreeksResult {
    /// `(label, value)` pairs for the computed entries, in display order
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("call_delta", self.call_delta),
            ("put_delta", self.put_delta),
            ("gamma", self.gamma),
            ("vega", self.vega),
            ("call_theta", self.call_theta),
            ("put_theta", self.put_theta),
            ("call_rho", self.call_rho),
            ("put_rho", self.put_rho),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

fn select(
    set: GreekSet,
    flag: GreekSet,
    name: &str,
    im: &Intermediates,
    formula: fn(&Intermediates) -> f64,
) -> PricingResult<Option<f64>> {
    if set.contains(flag) {
        check_computed(name, formula(im)).map(Some)
    } else {
        Ok(None)
    }
}

/// Compute the selected Greeks for `params`
pub fn compute_greeks(params: &OptionParameters, set: GreekSet) -> PricingResult<GreeksResult> {
    let im = Intermediates::compute(params.s, params.k, params.t, params.r, params.sigma)?;
    Ok(GreeksResult {
        call_delta: select(set, GreekSet::DELTA, "call delta", &im, Intermediates::call_delta)?,
        put_delta: select(set, GreekSet::DELTA, "put delta", &im, Intermediates::put_delta)?,
        gamma: select(set, GreekSet::GAMMA, "gamma", &im, Intermediates::gamma)?,
        vega: select(set, GreekSet::VEGA, "vega", &im, Intermediates::vega)?,
        call_theta: select(set, GreekSet::THETA, "call theta", &im, Intermediates::call_theta)?,
        put_theta: select(set, GreekSet::THETA, "put theta", &im, Intermediates::put_theta)?,
        call_rho: select(set, GreekSet::RHO, "call rho", &im, Intermediates::call_rho)?,
        put_rho: select(set, GreekSet::RHO, "put rho", &im, Intermediates::put_rho)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::bs_analytic;
    use approx::assert_relative_eq;

    #[test]
    fn test_batch_matches_single_formulas() {
        let p = OptionParameters {
            s: 95.0,
            k: 105.0,
            t: 0.75,
            r: 0.03,
            sigma: 0.35,
        };
        let g = compute_greeks(&p, GreekSet::ALL).unwrap();
        let single = |f: fn(f64, f64, f64, f64, f64) -> PricingResult<f64>| {
            f(p.s, p.k, p.t, p.r, p.sigma).unwrap()
        };
        assert_relative_eq!(g.call_delta.unwrap(), single(bs_analytic::call_delta));
        assert_relative_eq!(g.put_delta.unwrap(), single(bs_analytic::put_delta));
        assert_relative_eq!(g.gamma.unwrap(), single(bs_analytic::gamma));
        assert_relative_eq!(g.vega.unwrap(), single(bs_analytic::vega));
        assert_relative_eq!(g.call_theta.unwrap(), single(bs_analytic::call_theta));
        assert_relative_eq!(g.put_theta.unwrap(), single(bs_analytic::put_theta));
        assert_relative_eq!(g.call_rho.unwrap(), single(bs_analytic::call_rho));
        assert_relative_eq!(g.put_rho.unwrap(), single(bs_analytic::put_rho));
    }

    #[test]
    fn test_selection_leaves_others_empty() {
        let g = compute_greeks(&OptionParameters::default(), GreekSet::DELTA | GreekSet::RHO).unwrap();
        assert!(g.call_delta.is_some() && g.put_delta.is_some());
        assert!(g.call_rho.is_some() && g.put_rho.is_some());
        assert!(g.gamma.is_none() && g.vega.is_none());
        assert!(g.call_theta.is_none() && g.put_theta.is_none());
        assert_eq!(g.entries().len(), 4);
    }

    #[test]
    fn test_none_selection_still_validates() {
        let bad = OptionParameters {
            t: 0.0,
            ..Default::default()
        };
        assert!(compute_greeks(&bad, GreekSet::NONE).is_err());
        assert!(compute_greeks(&OptionParameters::default(), GreekSet::NONE)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(GreekSet::parse_list("all"), Some(GreekSet::ALL));
        assert_eq!(GreekSet::parse_list("none"), Some(GreekSet::NONE));
        assert_eq!(
            GreekSet::parse_list("Delta, vega"),
            Some(GreekSet::DELTA | GreekSet::VEGA)
        );
        assert_eq!(GreekSet::parse_list("vanna"), None);
    }
}
