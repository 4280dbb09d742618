//! bs-greeks CLI
//!
//! Command-line front end for the pricing core. Takes the same inputs as the
//! web form: `--rate` and `--sigma` are in percent, everything else is in
//! the model's own units.
//!
//! ```text
//! bs-greeks --spot 100 --strike 100 --expiry 1 --rate 5 --sigma 20
//! bs-greeks --strike 110 --expiry-date 2027-06-18 --format json
//! ```

use bs_greeks::dates::{parse_date, year_fraction};
use bs_greeks::form::{evaluate, FormFields};
use bs_greeks::output::{render_csv, render_json, render_table, write_valuation_to_csv};
use bs_greeks::{GreekSet, PricingError, PricingResult};
use clap::{Parser, ValueEnum};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
    Csv,
}

/// Black-Scholes prices and Greeks for European options
#[derive(Parser, Debug)]
#[command(name = "bs-greeks")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Underlying spot price
    #[arg(short, long, default_value = "100")]
    spot: String,

    /// Strike price
    #[arg(short = 'k', long, default_value = "100")]
    strike: String,

    /// Time to expiry in years
    #[arg(short = 't', long, default_value = "1", conflicts_with = "expiry_date")]
    expiry: String,

    /// Expiry date (YYYY-MM-DD); time to expiry is ACT/365 from the valuation date
    #[arg(long)]
    expiry_date: Option<String>,

    /// Valuation date (YYYY-MM-DD), defaults to today
    #[arg(long, requires = "expiry_date")]
    valuation_date: Option<String>,

    /// Risk-free rate in percent (5 means 5%)
    #[arg(short, long, default_value = "5")]
    rate: String,

    /// Volatility in percent (20 means 20%)
    #[arg(short = 'v', long, default_value = "20")]
    sigma: String,

    /// Greeks to report: comma separated list of delta,gamma,vega,theta,rho, or all / none
    #[arg(short, long, default_value = "all")]
    greeks: String,

    /// Substitute defaults for unreadable numbers instead of failing
    #[arg(long)]
    lenient: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Also write the result as CSV to this file
    #[arg(short, long)]
    output: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn time_to_expiry(cli: &Cli) -> PricingResult<String> {
    match &cli.expiry_date {
        Some(expiry) => {
            let expiry = parse_date(expiry)?;
            let valuation = match &cli.valuation_date {
                Some(d) => parse_date(d)?,
                None => chrono::Local::now().date_naive(),
            };
            let t = year_fraction(valuation, expiry)?;
            debug!(%valuation, %expiry, t, "time to expiry from dates");
            Ok(t.to_string())
        }
        None => Ok(cli.expiry.clone()),
    }
}

fn run(cli: &Cli) -> PricingResult<String> {
    let greeks = GreekSet::parse_list(&cli.greeks).ok_or_else(|| PricingError::InvalidField {
        field: "greeks".to_string(),
        input: cli.greeks.clone(),
        reason: "expected delta, gamma, vega, theta, rho, all or none".to_string(),
    })?;

    let fields = FormFields {
        s: cli.spot.clone(),
        k: cli.strike.clone(),
        t: time_to_expiry(cli)?,
        r: cli.rate.clone(),
        sigma: cli.sigma.clone(),
    };

    let valuation = evaluate(&fields, greeks, !cli.lenient).map_err(|err| {
        debug!(
            s = %fields.s,
            k = %fields.k,
            t = %fields.t,
            r = %fields.r,
            sigma = %fields.sigma,
            error = %err,
            "rejected inputs (r and sigma in percent)"
        );
        err
    })?;

    if let Some(path) = &cli.output {
        write_valuation_to_csv(path, &valuation)?;
        debug!(path = %path, "wrote csv");
    }

    match cli.format {
        Format::Table => Ok(render_table(&valuation)),
        Format::Json => render_json(&valuation),
        Format::Csv => Ok(render_csv(&valuation)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(report) => {
            print!("{}", report);
            if !report.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "pricing failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
