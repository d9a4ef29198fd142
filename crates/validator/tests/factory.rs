//! Name-based construction through custom factories.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use verdict_validator::prelude::*;

/// Accepts strings made of lowercase ASCII letters.
#[derive(Debug)]
struct Slug;

impl Validate for Slug {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value.as_str() {
            Some(text) if !text.is_empty() && text.bytes().all(|b| b.is_ascii_lowercase()) => Ok(()),
            _ => Err(ValidationError::for_value("not_slug", value)),
        }
    }
}

fn factory_with_slug() -> ValidatorFactory {
    let mut factory = ValidatorFactory::new();
    factory
        .register("Acme\\Slug", |_, _| Ok(Arc::new(Slug) as Arc<dyn Validate>))
        .unwrap();
    factory
}

#[test]
fn any_spelling_resolves_the_same_validator() {
    let factory = ValidatorFactory::shared();
    for name in ["GreaterThan", "greater-than", "greater_than", "verdict_validator::GreaterThan"] {
        let validator = factory.create(name, &options! { "min" => 3 }).unwrap();
        assert_eq!(validator.name(), "GreaterThan", "{name}");
        assert!(validator.validate(&Value::from(2)).is_err());
    }
}

#[test]
fn data_validator_uses_its_own_factory() {
    let mut logger = ErrorLogger::new();
    logger.set_template("not_slug", "%value% is not a slug.").unwrap();

    let mut validator = DataValidator::with_logger(logger).with_factory(factory_with_slug());
    validator
        .add_validator_by_key("slug", "handle")
        .unwrap()
        .add_validator_by_key(
            ValidatorSpec::named("bulk", options! { "validator" => "slug" }),
            "tags",
        )
        .unwrap();

    let record = Value::from(json!({ "handle": "Ada", "tags": ["rust", "c++"] }));
    assert!(!validator.is_valid(&record).unwrap());
    assert_eq!(
        validator.error_messages(),
        [
            "<code>handle</code>: Ada is not a slug.",
            "<code>tags</code>: c++ is not a slug.",
        ]
    );

    let mut plain = DataValidator::new();
    assert!(matches!(
        plain.add_validator_by_key("slug", "handle"),
        Err(ConfigError::UnknownValidator { .. })
    ));
}

#[test]
fn nested_configuration_resolves_through_the_same_factory() {
    let factory = factory_with_slug();
    let validator = factory
        .create_from_json(&json!({
            "validator": "pool",
            "options": { "validator": "negate", "options": { "validator": "slug" } }
        }))
        .unwrap();
    assert!(validator.validate(&Value::list(["ok", "Not Ok"])).is_ok());
    let error = validator.validate(&Value::list(["ok"])).unwrap_err();
    assert_eq!(error.error_code(), &ErrorCode::NEGATED_VALIDATOR_PASSED);
}
