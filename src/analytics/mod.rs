pub mod bs_analytic;
pub mod greeks;
pub mod valuation;
