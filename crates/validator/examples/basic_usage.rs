//! Basic usage example for verdict-validator

use verdict_validator::foundation::Validate;
use verdict_validator::validators::LessThan;
use verdict_validator::value::Value;

fn main() {
    // A single leaf validator
    let validator = LessThan::new(9);

    // Valid input
    match validator.validate(&Value::from(5)) {
        Ok(()) => println!("✓ 5 is valid (less than 9)"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // Invalid input: the error carries the code and the context
    match validator.validate(&Value::from(10)) {
        Ok(()) => println!("✓ 10 is valid"),
        Err(e) => println!("✗ 10 is invalid: {} {:?}", e.error_code(), e.input_data().get("max")),
    }

    println!("\nverdict-validator is working correctly!");
}
