// scripts/benchmark.rs
use bs_greeks::analytics::bs_analytic;
use bs_greeks::math_utils::Timer;
use bs_greeks::{value, GreekSet, OptionParameters, PricingResult};
use std::env;
use std::fs::File;
use std::hint::black_box;
use std::io::{self, Write};
use std::process::Command;

#[derive(Debug)]
struct SystemInfo {
    os: String,
    cpu_cores: usize,
    rust_version: String,
    rustc_flags: String,
}

impl SystemInfo {
    fn gather() -> Self {
        SystemInfo {
            os: env::consts::OS.to_string(),
            cpu_cores: num_cpus::get(),
            rust_version: Command::new("rustc")
                .arg("--version")
                .output()
                .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
                .unwrap_or_else(|_| "Unknown Rust version".to_string()),
            rustc_flags: env::var("RUSTFLAGS").unwrap_or_else(|_| "default".to_string()),
        }
    }
}

#[derive(Debug)]
struct BenchmarkResult {
    name: String,
    evaluations: usize,
    time_ms: f64,
    evals_per_sec: f64,
    checksum: f64,
}

/// Strikes from 50 to 150 so d1 sweeps both tails
fn strike_grid(n: usize) -> Vec<f64> {
    (0..n).map(|i| 50.0 + 100.0 * i as f64 / n as f64).collect()
}

fn time_it<F>(name: &str, strikes: &[f64], mut f: F) -> PricingResult<BenchmarkResult>
where
    F: FnMut(f64) -> PricingResult<f64>,
{
    let mut timer = Timer::new();
    timer.start();
    let mut checksum = 0.0;
    for &k in strikes {
        checksum += black_box(f(black_box(k))?);
    }
    let time_ms = timer.elapsed_ms();
    Ok(BenchmarkResult {
        name: name.to_string(),
        evaluations: strikes.len(),
        time_ms,
        evals_per_sec: strikes.len() as f64 / (time_ms / 1000.0),
        checksum,
    })
}

fn run_benchmarks(n: usize) -> PricingResult<Vec<BenchmarkResult>> {
    let base = OptionParameters::default();
    let strikes = strike_grid(n);
    let (s, t, r, sigma) = (base.s, base.t, base.r, base.sigma);

    let mut results = Vec::new();
    results.push(time_it("call_price", &strikes, |k| {
        bs_analytic::call_price(s, k, t, r, sigma)
    })?);
    results.push(time_it("eight greeks, one call each", &strikes, |k| {
        Ok(bs_analytic::call_delta(s, k, t, r, sigma)?
            + bs_analytic::put_delta(s, k, t, r, sigma)?
            + bs_analytic::gamma(s, k, t, r, sigma)?
            + bs_analytic::vega(s, k, t, r, sigma)?
            + bs_analytic::call_theta(s, k, t, r, sigma)?
            + bs_analytic::put_theta(s, k, t, r, sigma)?
            + bs_analytic::call_rho(s, k, t, r, sigma)?
            + bs_analytic::put_rho(s, k, t, r, sigma)?)
    })?);
    results.push(time_it("eight greeks, batched", &strikes, |k| {
        let v = value(&OptionParameters { k, ..base }, GreekSet::ALL)?;
        Ok(v.greeks.entries().iter().map(|(_, x)| x).sum())
    })?);
    Ok(results)
}

fn write_results_to_csv(
    results: &[BenchmarkResult],
    system_info: &SystemInfo,
    filename: &str,
) -> io::Result<()> {
    let mut file = File::create(filename)?;
    writeln!(file, "# OS: {}", system_info.os)?;
    writeln!(file, "# CPU Cores: {}", system_info.cpu_cores)?;
    writeln!(file, "# Rust Version: {}", system_info.rust_version)?;
    writeln!(file, "# RUSTFLAGS: {}", system_info.rustc_flags)?;
    writeln!(
        file,
        "# Benchmark Date: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(file, "Benchmark,Evaluations,Time_ms,Evals_per_sec,Checksum")?;
    for result in results {
        writeln!(
            file,
            "{},{},{:.2},{:.0},{:.6}",
            result.name, result.evaluations, result.time_ms, result.evals_per_sec, result.checksum
        )?;
    }
    Ok(())
}

fn main() {
    println!("bs-greeks Benchmark");
    println!("===================\n");

    let system_info = SystemInfo::gather();
    println!("  OS: {}", system_info.os);
    println!("  CPU Cores: {}", system_info.cpu_cores);
    println!("  Rust Version: {}", system_info.rust_version);
    println!("  RUSTFLAGS: {}\n", system_info.rustc_flags);

    let n = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(1_000_000);

    let results = match run_benchmarks(n) {
        Ok(results) => results,
        Err(err) => {
            eprintln!("benchmark failed: {}", err);
            std::process::exit(1);
        }
    };

    println!(
        "{:<32} {:>12} {:>12} {:>16}",
        "Benchmark", "Evals", "Time (ms)", "Evals/sec"
    );
    println!("{:-<75}", "");
    for result in &results {
        println!(
            "{:<32} {:>12} {:>12.2} {:>16.0}",
            result.name, result.evaluations, result.time_ms, result.evals_per_sec
        );
    }

    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    let filename = format!("benchmark_results_{}.csv", timestamp);
    match write_results_to_csv(&results, &system_info, &filename) {
        Ok(()) => println!("\nResults saved to: {}", filename),
        Err(err) => eprintln!("could not write {}: {}", filename, err),
    }
}
