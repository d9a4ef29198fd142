//! Combinators example for verdict-validator

use verdict_validator::prelude::*;

fn main() {
    // AND: both bounds must hold
    let age = Multi::new().with(GreaterThan::new(17)).with(LessThan::new(130));
    // OR: an id is a number or a slug
    let id = MultiOr::new()
        .with(Type::new("integer"))
        .with(RegEx::new("/^[a-z][a-z0-9-]*$/"));

    println!("Testing age validation (18-129):\n");
    for input in [Value::from(36), Value::from(12), Value::from("forty")] {
        match age.validate(&input) {
            Ok(()) => println!("✓ {} is valid", stringify(&input)),
            Err(e) => println!("✗ {} is invalid: {:?}", stringify(&input), e.error_codes()),
        }
    }

    println!("\nTesting id validation (integer or slug):\n");
    for input in [Value::from(7), Value::from("post-42"), Value::from("Post 42")] {
        match id.validate(&input) {
            Ok(()) => println!("✓ {} is valid", stringify(&input)),
            Err(e) => println!("✗ {} is invalid: {:?}", stringify(&input), e.error_codes()),
        }
    }

    println!("\nCombinators are working correctly!");
}
