// tests/integration_test.rs
use approx::{assert_abs_diff_eq, assert_relative_eq};
use bs_greeks::analytics::bs_analytic;
use bs_greeks::dates::{parse_date, year_fraction};
use bs_greeks::form::{submit, FormFields};
use bs_greeks::{value, GreekSet, OptionParameters, PricingError};

#[test]
fn test_canonical_at_the_money_case() {
    let v = value(&OptionParameters::default(), GreekSet::ALL).unwrap();

    assert_abs_diff_eq!(v.prices.call_price, 10.4506, epsilon = 1e-4);
    assert_abs_diff_eq!(v.prices.put_price, 5.5735, epsilon = 1e-4);
    assert_abs_diff_eq!(v.prices.parity_spread(), 4.8771, epsilon = 1e-4);
}

#[test]
fn test_deep_in_the_money_call() {
    let (s, k, t, r, sigma): (f64, f64, f64, f64, f64) = (1000.0, 100.0, 1.0, 0.05, 0.2);
    let forward_intrinsic = s - k * (-r * t).exp();

    assert_relative_eq!(bs_analytic::call_delta(s, k, t, r, sigma).unwrap(), 1.0, max_relative = 1e-12);
    assert_relative_eq!(
        bs_analytic::call_price(s, k, t, r, sigma).unwrap(),
        forward_intrinsic,
        max_relative = 1e-12
    );
}

#[test]
fn test_deep_out_of_the_money_call() {
    let (s, k, t, r, sigma): (f64, f64, f64, f64, f64) = (10.0, 100.0, 1.0, 0.05, 0.2);
    let price = bs_analytic::call_price(s, k, t, r, sigma).unwrap();

    assert!(price >= 0.0);
    assert!(price < 1e-12, "deep OTM call should be worthless, got {}", price);
    assert_abs_diff_eq!(bs_analytic::call_delta(s, k, t, r, sigma).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let cases = [
        ("S", (0.0, 100.0, 1.0, 0.05, 0.2)),
        ("K", (100.0, 0.0, 1.0, 0.05, 0.2)),
        ("T", (100.0, 100.0, 0.0, 0.05, 0.2)),
        ("sigma", (100.0, 100.0, 1.0, 0.05, 0.0)),
        ("S", (-1.0, 100.0, 1.0, 0.05, 0.2)),
        ("T", (100.0, 100.0, -0.5, 0.05, 0.2)),
    ];
    let formulas: [fn(f64, f64, f64, f64, f64) -> Result<f64, PricingError>; 11] = [
        bs_analytic::d1,
        bs_analytic::call_price,
        bs_analytic::put_price,
        bs_analytic::call_delta,
        bs_analytic::put_delta,
        bs_analytic::gamma,
        bs_analytic::vega,
        bs_analytic::call_theta,
        bs_analytic::put_theta,
        bs_analytic::call_rho,
        bs_analytic::put_rho,
    ];

    for (expected, (s, k, t, r, sigma)) in cases {
        for formula in formulas {
            match formula(s, k, t, r, sigma) {
                Err(PricingError::InvalidInput { parameter, .. }) => assert_eq!(parameter, expected),
                other => panic!("expected InvalidInput for {}, got {:?}", expected, other),
            }
        }
    }
}

#[test]
fn test_nan_inputs_are_rejected() {
    assert!(bs_analytic::call_price(f64::NAN, 100.0, 1.0, 0.05, 0.2).is_err());
    assert!(bs_analytic::put_price(100.0, 100.0, 1.0, f64::NAN, 0.2).is_err());
    assert!(bs_analytic::vega(100.0, 100.0, 1.0, 0.05, f64::INFINITY).is_err());
}

#[test]
fn test_form_round_trip_from_dates() {
    let t = year_fraction(parse_date("2026-01-15").unwrap(), parse_date("2027-01-15").unwrap()).unwrap();
    let fields = FormFields {
        t: t.to_string(),
        ..FormFields::default()
    };
    let outcome = submit(&fields, GreekSet::NONE, true);
    let v = outcome.valuation.expect("valid form");

    assert_relative_eq!(v.params.r, 0.05);
    assert_relative_eq!(v.params.sigma, 0.2);
    assert_abs_diff_eq!(v.prices.call_price, 10.4506, epsilon = 1e-4);
    assert_eq!(outcome.fields, FormFields::default());
}

#[test]
fn test_form_percent_units_are_not_applied_twice() {
    // sigma of "0.2" in the form is 0.2%, not 20%
    let fields = FormFields {
        sigma: "0.2".to_string(),
        ..FormFields::default()
    };
    let v = submit(&fields, GreekSet::NONE, true).valuation.unwrap();
    assert_relative_eq!(v.params.sigma, 0.002);
    assert!(v.prices.call_price < 10.0);
}

#[test]
fn test_form_error_redisplays_input() {
    let fields = FormFields {
        s: "twelve".to_string(),
        ..FormFields::default()
    };
    let strict = submit(&fields, GreekSet::ALL, true);
    assert!(strict.valuation.is_none());
    assert_eq!(strict.fields.s, "twelve");
    assert!(strict.error.unwrap().contains("twelve"));

    let lenient = submit(&fields, GreekSet::ALL, false);
    assert!(lenient.is_ok());
    assert_eq!(lenient.fields.s, "100");
}
