//! Validating JSON records with verdict-validator.
//!
//! Run: `cargo run -p verdict-validator --example json_validation`

use serde_json::json;
use verdict_validator::prelude::*;

fn main() -> Result<(), ConfigError> {
    typed_setup()?;
    configured_setup()?;
    custom_templates()?;
    Ok(())
}

/// Bind validators to keys in code.
fn typed_setup() -> Result<(), ConfigError> {
    println!("=== Typed Setup ===\n");

    let mut validator = DataValidator::new();
    validator
        .add_validator_with_message(NotEmpty::new(), "No field may be empty.")?
        .add_validator_by_key(Email::new(), ("email", "Email address"))?
        .add_validator_by_key(Url::new(), "homepage")?
        .add_validator_by_key(Date::new("Y-m-d"), ("born", "Date of birth"))?;

    let record = Value::from(json!({
        "email": "ada@",
        "homepage": "ftp://example.com",
        "born": "1815-12-10",
        "nickname": ""
    }));
    report(&validator.validate_record(&record)?);
    Ok(())
}

/// Build the same kind of validator from a configuration document.
fn configured_setup() -> Result<(), ConfigError> {
    println!("=== Configured Setup ===\n");

    let config = Value::from(json!({
        "port": {
            "validator": "multi",
            "options": {
                "stop_on_failure": true,
                "validators": [
                    { "validator": "type", "options": { "type": "integer" } },
                    { "validator": "between", "options": { "min": 1, "max": 65535 } }
                ]
            }
        },
        "host": { "validator": "not-empty" },
        "tags": { "validator": "bulk", "options": { "validator": "regex", "options": { "pattern": "/^[a-z]+$/" } } }
    }));

    let mut validator = DataValidator::new();
    validator.add_validator_map_from_value(&config)?;

    let good = Value::from(json!({ "host": "localhost", "port": 8080, "tags": ["web"] }));
    let bad = Value::from(json!({ "host": "", "port": 70000, "tags": ["web", "API"] }));
    report(&validator.validate_record(&good)?);
    report(&validator.validate_record(&bad)?);
    Ok(())
}

/// Override message wording from JSON.
fn custom_templates() -> Result<(), ConfigError> {
    println!("=== Custom Templates ===\n");

    let templates = ErrorTemplates::from_json_str(
        r#"{ "templates": { "not_between": "%value% must lie within %min%..%max%." } }"#,
    )?;
    let mut validator = DataValidator::with_logger(ErrorLogger::with_templates(templates));
    validator.add_validator_by_key(Between::new(1, 10), ("rating", "Rating"))?;

    report(&validator.validate_record(&Value::from(json!({ "rating": 11 })))?);
    Ok(())
}

fn report(report: &ValidationReport) {
    if report.is_valid() {
        println!("✓ record is valid\n");
        return;
    }
    println!("✗ record is invalid ({:?}):", report.error_codes());
    for message in report.error_messages() {
        println!("  - {message}");
    }
    println!();
}
