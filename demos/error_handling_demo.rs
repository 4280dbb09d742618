// demos/error_handling_demo.rs
use bs_greeks::analytics::bs_analytic;
use bs_greeks::form::{submit, FormFields};
use bs_greeks::{value, GreekSet, OptionParameters, PricingError};

fn main() {
    println!("Error Handling Demo for bs-greeks");
    println!("=================================\n");

    // 1: zero time to expiry
    println!("1. Pricing with T = 0...");
    match bs_analytic::call_price(100.0, 100.0, 0.0, 0.05, 0.2) {
        Ok(p) => println!("   Unexpected: got {}", p),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // 2: zero volatility via a struct literal
    println!("\n2. Validating sigma = 0...");
    let params = OptionParameters {
        sigma: 0.0,
        ..Default::default()
    };
    match value(&params, GreekSet::ALL) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // 3: discount factor overflow
    println!("\n3. Pricing with an extreme negative rate...");
    match bs_analytic::put_price(100.0, 100.0, 1000.0, -1000.0, 0.2) {
        Ok(p) => println!("   Unexpected: got {}", p),
        Err(e @ PricingError::NumericOverflow { .. }) => println!("   ✓ Caught overflow: {}", e),
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    // 4: form submission keeps the user's text
    println!("\n4. Submitting a form with a negative strike...");
    let fields = FormFields {
        k: "-100".to_string(),
        ..FormFields::default()
    };
    let outcome = submit(&fields, GreekSet::ALL, true);
    println!(
        "   ✓ Message: {}",
        outcome.error.as_deref().unwrap_or("none")
    );
    println!("   ✓ Strike shown again as {:?}", outcome.fields.k);

    // 5: error type matching
    println!("\n5. Matching on the error type...");
    match OptionParameters::new(-5.0, 100.0, 1.0, 0.05, 0.2) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(PricingError::InvalidInput {
            parameter,
            value,
            constraint,
        }) => {
            println!("   ✓ Caught InvalidInput: {} = {} ({})", parameter, value, constraint);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
