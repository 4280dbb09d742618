// src/form.rs
//! Input-form boundary
//!
//! Front ends collect the five inputs as text, with `r` and `sigma` in
//! percentage points (`5` meaning 5%). This module is the only place that
//! converts between percent and the decimal units of the pricing core, and
//! it keeps the submitted text so that a failed submission can be shown
//! again with the user's input intact.

use crate::analytics::greeks::GreekSet;
use crate::analytics::valuation::{value, Valuation};
use crate::error::{PricingError, PricingResult};
use crate::params::OptionParameters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Percentage points to decimal fraction
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// Decimal fraction to percentage points
pub fn decimal_to_percent(decimal: f64) -> f64 {
    decimal * 100.0
}

/// Raw form fields, as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub s: String,
    pub k: String,
    pub t: String,
    /// Percent
    pub r: String,
    /// Percent
    pub sigma: String,
}

impl FormFields {
    /// Fields showing `params`, with `r` and `sigma` converted to percent
    pub fn from_parameters(params: &OptionParameters) -> Self {
        FormFields {
            s: params.s.to_string(),
            k: params.k.to_string(),
            t: params.t.to_string(),
            r: display_percent(params.r),
            sigma: display_percent(params.sigma),
        }
    }

    /// Read the fields, replacing any unreadable one with its default
    ///
    /// The result is not validated; pass it to [`value`] or call
    /// [`OptionParameters::validate`].
    pub fn parse_lenient(&self) -> OptionParameters {
        let d = OptionParameters::default();
        OptionParameters {
            s: parse_or("S", &self.s, d.s),
            k: parse_or("K", &self.k, d.k),
            t: parse_or("T", &self.t, d.t),
            r: percent_to_decimal(parse_or("r", &self.r, decimal_to_percent(d.r))),
            sigma: percent_to_decimal(parse_or("sigma", &self.sigma, decimal_to_percent(d.sigma))),
        }
    }

    /// Read the fields, failing on the first one that is not a number
    pub fn parse_strict(&self) -> PricingResult<OptionParameters> {
        Ok(OptionParameters {
            s: parse_field("S", &self.s)?,
            k: parse_field("K", &self.k)?,
            t: parse_field("T", &self.t)?,
            r: percent_to_decimal(parse_field("r", &self.r)?),
            sigma: percent_to_decimal(parse_field("sigma", &self.sigma)?),
        })
    }
}

impl Default for FormFields {
    fn default() -> Self {
        FormFields::from_parameters(&OptionParameters::default())
    }
}

/// What a front end renders after a submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormOutcome {
    /// Fields to show in the form again
    pub fields: FormFields,
    pub valuation: Option<Valuation>,
    /// User-facing message when valuation failed
    pub error: Option<String>,
}

impl FormOutcome {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Parse and value a submission, returning the underlying error unchanged
pub fn evaluate(fields: &FormFields, greeks: GreekSet, strict: bool) -> PricingResult<Valuation> {
    let params = if strict {
        fields.parse_strict()?
    } else {
        fields.parse_lenient()
    };
    value(&params, greeks)
}

/// Handle a form submission
///
/// On success the fields are normalized from the parsed parameters. On
/// failure the submitted text is kept and the error is carried as a message.
pub fn submit(fields: &FormFields, greeks: GreekSet, strict: bool) -> FormOutcome {
    match evaluate(fields, greeks, strict) {
        Ok(valuation) => FormOutcome {
            fields: FormFields::from_parameters(&valuation.params),
            valuation: Some(valuation),
            error: None,
        },
        Err(err) => {
            warn!(error = %err, "form submission rejected");
            FormOutcome {
                fields: fields.clone(),
                valuation: None,
                error: Some(user_message(&err)),
            }
        }
    }
}

fn user_message(err: &PricingError) -> String {
    match err {
        PricingError::InvalidInput {
            parameter,
            constraint,
            ..
        } => format!("{} {}", parameter, constraint),
        other => other.to_string(),
    }
}

fn parse_field(field: &str, input: &str) -> PricingResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|e| PricingError::InvalidField {
            field: field.to_string(),
            input: input.to_string(),
            reason: e.to_string(),
        })
}

fn parse_or(field: &str, input: &str, default: f64) -> f64 {
    match parse_field(field, input) {
        Ok(v) => v,
        Err(err) => {
            warn!(field, input, default, error = %err, "falling back to default");
            default
        }
    }
}

// Percent with 13 significant digits, which drops scaling noise such as
// 7.000000000000001 at any magnitude
fn display_percent(decimal: f64) -> String {
    let percent = decimal_to_percent(decimal);
    let cleaned = format!("{:.12e}", percent).parse::<f64>().unwrap_or(percent);
    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn fields(s: &str, k: &str, t: &str, r: &str, sigma: &str) -> FormFields {
        FormFields {
            s: s.into(),
            k: k.into(),
            t: t.into(),
            r: r.into(),
            sigma: sigma.into(),
        }
    }

    #[test]
    fn test_default_fields_show_percent() {
        let f = FormFields::default();
        assert_eq!(f.r, "5");
        assert_eq!(f.sigma, "20");
        assert_eq!(f.s, "100");
    }

    #[test]
    fn test_percent_is_divided_by_100() {
        let p = fields("100", "110", "0.5", "7", "35").parse_strict().unwrap();
        assert_relative_eq!(p.r, 0.07);
        assert_relative_eq!(p.sigma, 0.35);
        assert_eq!(FormFields::from_parameters(&p).r, "7");
    }

    #[test]
    fn test_lenient_falls_back_per_field() {
        let p = fields("abc", "90", "", "x", "25").parse_lenient();
        assert_eq!(p.s, 100.0);
        assert_eq!(p.k, 90.0);
        assert_eq!(p.t, 1.0);
        assert_relative_eq!(p.r, 0.05);
        assert_relative_eq!(p.sigma, 0.25);
    }

    #[test]
    fn test_strict_reports_field() {
        let err = fields("100", "1o0", "1", "5", "20").parse_strict().unwrap_err();
        assert!(matches!(err, PricingError::InvalidField { ref field, .. } if field == "K"));
    }

    #[test]
    fn test_submit_success_normalizes_fields() {
        let out = submit(&fields(" 100 ", "100", "1", "5", "20"), GreekSet::ALL, true);
        assert!(out.is_ok());
        assert_eq!(out.fields.s, "100");
        let v = out.valuation.unwrap();
        assert_relative_eq!(v.prices.call_price, 10.450583572185565, max_relative = 1e-9);
    }

    #[test]
    fn test_redisplay_keeps_extreme_magnitudes() {
        for (s, k) in [("1e-11", "1e-11"), ("1e300", "100")] {
            let first = submit(&fields(s, k, "1", "5", "20"), GreekSet::NONE, true);
            assert!(first.is_ok(), "{:?}", first.error);
            let v = first.valuation.unwrap();
            assert_eq!(v.params.s, s.parse::<f64>().unwrap());
            assert_eq!(v.params.k, k.parse::<f64>().unwrap());

            let again = submit(&first.fields, GreekSet::NONE, true);
            assert!(again.is_ok(), "{:?}", again.error);
            assert_eq!(again.valuation.unwrap().params, v.params);
        }
    }

    #[test]
    fn test_redisplay_small_percentages() {
        let p = fields("100", "100", "1", "0.0000001", "1e-9").parse_strict().unwrap();
        let shown = FormFields::from_parameters(&p);
        assert_eq!(shown.r.parse::<f64>().unwrap(), 1e-7);
        assert_eq!(shown.sigma.parse::<f64>().unwrap(), 1e-9);
    }

    #[test]
    fn test_evaluate_keeps_error_kind() {
        let zero_t = evaluate(&fields("100", "100", "0", "5", "20"), GreekSet::ALL, true);
        assert!(matches!(zero_t, Err(PricingError::InvalidInput { .. })));

        let overflow = evaluate(&fields("100", "100", "1000", "-100000", "20"), GreekSet::ALL, true);
        assert!(matches!(overflow, Err(PricingError::NumericOverflow { .. })));

        let text = evaluate(&fields("100", "x", "1", "5", "20"), GreekSet::ALL, true);
        assert!(matches!(text, Err(PricingError::InvalidField { .. })));
    }

    #[test]
    fn test_submit_error_keeps_input() {
        let submitted = fields("100", "100", "0", "5", "20");
        let out = submit(&submitted, GreekSet::ALL, false);
        assert!(!out.is_ok());
        assert!(out.valuation.is_none());
        assert_eq!(out.fields, submitted);
        assert!(out.error.unwrap().starts_with("T must be positive"));
    }
}
