// demos/demo.rs
use bs_greeks::analytics::bs_analytic;
use bs_greeks::output;
use bs_greeks::{value, GreekSet, OptionParameters};

fn main() {
    println!("Running bs-greeks Demo\n");

    let params = OptionParameters::default();
    let v = value(&params, GreekSet::ALL).expect("Valid parameters");
    print!("{}", output::render_table(&v));

    let parity = params.s - params.k * params.discount_factor();
    println!(
        "\nPut-call parity: C - P = {:.6}, S - K*e^(-rT) = {:.6}",
        v.prices.parity_spread(),
        parity
    );

    println!("\nCall price across strikes (T = 1, r = 5%, sigma = 20%):");
    println!("{:>8} {:>10} {:>10} {:>10}", "K", "call", "put", "delta");
    for k in [80.0, 90.0, 100.0, 110.0, 120.0] {
        let call = bs_analytic::call_price(params.s, k, params.t, params.r, params.sigma)
            .expect("Valid parameters");
        let put = bs_analytic::put_price(params.s, k, params.t, params.r, params.sigma)
            .expect("Valid parameters");
        let delta = bs_analytic::call_delta(params.s, k, params.t, params.r, params.sigma)
            .expect("Valid parameters");
        println!("{:>8.1} {:>10.4} {:>10.4} {:>10.4}", k, call, put, delta);
    }

    let filename = "demo_valuation.csv";
    match output::write_valuation_to_csv(filename, &v) {
        Ok(()) => println!("\nValuation written to {}", filename),
        Err(e) => eprintln!("\nCould not write {}: {}", filename, e),
    }
}
