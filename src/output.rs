// src/output.rs
use crate::analytics::valuation::Valuation;
use crate::error::PricingResult;
use crate::form::decimal_to_percent;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{self, Write};

/// Aligned text report: inputs (r and sigma in percent), prices, then Greeks
pub fn render_table(v: &Valuation) -> String {
    let p = &v.params;
    let mut out = String::new();
    let rows: Vec<(&str, String)> = vec![
        ("S", format!("{}", p.s)),
        ("K", format!("{}", p.k)),
        ("T (years)", format!("{}", p.t)),
        ("r (%)", format!("{:.4}", decimal_to_percent(p.r))),
        ("sigma (%)", format!("{:.4}", decimal_to_percent(p.sigma))),
    ];
    for (name, value) in rows {
        let _ = writeln!(out, "{:<12}{:>14}", name, value);
    }
    let _ = writeln!(out, "{}", "-".repeat(26));
    let _ = writeln!(out, "{:<12}{:>14.4}", "call_price", v.prices.call_price);
    let _ = writeln!(out, "{:<12}{:>14.4}", "put_price", v.prices.put_price);
    for (name, value) in v.greeks.entries() {
        let _ = writeln!(out, "{:<12}{:>14.6}", name, value);
    }
    out
}

pub fn render_json(v: &Valuation) -> PricingResult<String> {
    Ok(serde_json::to_string_pretty(v)?)
}

/// `key,value` rows, one per input and result
pub fn render_csv(v: &Valuation) -> String {
    let p = &v.params;
    let mut out = String::from("key,value\n");
    let mut rows = vec![
        ("s", p.s),
        ("k", p.k),
        ("t", p.t),
        ("r", p.r),
        ("sigma", p.sigma),
        ("call_price", v.prices.call_price),
        ("put_price", v.prices.put_price),
    ];
    rows.extend(v.greeks.entries());
    for (key, value) in rows {
        let _ = writeln!(out, "{},{}", key, value);
    }
    out
}

pub fn write_valuation_to_csv(filename: &str, v: &Valuation) -> io::Result<()> {
    let mut file = File::create(filename)?;
    file.write_all(render_csv(v).as_bytes())
}
