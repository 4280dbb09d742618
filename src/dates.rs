// src/dates.rs
//! Time to expiry from calendar dates (ACT/365 Fixed).

use crate::error::{PricingError, PricingResult};
use chrono::NaiveDate;

pub const DAYS_PER_YEAR: f64 = 365.0;

/// Year fraction between `valuation` and `expiry`, ACT/365 Fixed
///
/// Fails unless `expiry` is strictly after `valuation`, since `T = 0` has no price.
pub fn year_fraction(valuation: NaiveDate, expiry: NaiveDate) -> PricingResult<f64> {
    let days = (expiry - valuation).num_days();
    if days <= 0 {
        return Err(PricingError::InvalidDate {
            reason: format!("expiry {} must be after valuation date {}", expiry, valuation),
        });
    }
    Ok(days as f64 / DAYS_PER_YEAR)
}

/// Parse an ISO `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> PricingResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|e| PricingError::InvalidDate {
        reason: format!("cannot parse {:?} as YYYY-MM-DD: {}", input, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_one_calendar_year() {
        let v = parse_date("2026-01-15").unwrap();
        let e = parse_date("2027-01-15").unwrap();
        assert_abs_diff_eq!(year_fraction(v, e).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_leap_year_counts_actual_days() {
        let v = parse_date("2028-01-01").unwrap();
        let e = parse_date("2029-01-01").unwrap();
        assert_abs_diff_eq!(year_fraction(v, e).unwrap(), 366.0 / 365.0, epsilon = 1e-15);
    }

    #[test]
    fn test_expired_or_same_day_is_rejected() {
        let d = parse_date("2026-10-18").unwrap();
        assert!(year_fraction(d, d).is_err());
        assert!(year_fraction(d, parse_date("2026-10-01").unwrap()).is_err());
    }

    #[test]
    fn test_bad_date_text() {
        assert!(matches!(
            parse_date("18/10/2026"),
            Err(PricingError::InvalidDate { .. })
        ));
    }
}
