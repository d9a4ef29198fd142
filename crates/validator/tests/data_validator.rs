//! End-to-end record validation.

use pretty_assertions::assert_eq;
use serde_json::json;
use verdict_validator::prelude::*;

// ============================================================================
// FULL RECORD
// ============================================================================

fn record_validator() -> ConfigResult<DataValidator> {
    let integer_range = Multi::with_validators([
        ValidatorSpec::named("greater-than", options! { "min" => 8, "max" => 9 }),
        ValidatorSpec::from(LessThan::new(9)),
    ])?
    .stop_on_failure();
    let float_range = Multi::new().with(GreaterThan::new(10)).with(LessThan::new(20));
    let float_key = KeyArg::try_from(Value::from(json!({ "key": "a_float", "label": "Float value" })))?;

    let mut validator = DataValidator::new();
    validator
        .add_validator_with_message(NotEmpty::new(), "No data value should be empty.")?
        .add_validator_by_key(integer_range, "an_integer")?
        .add_validator_by_key(RegEx::new("/Hello/"), "a_string")?
        .add_validator_by_key(RegEx::new("/Hello/"), "an_empty_string")?
        .add_validator_by_key_with_message(
            float_range,
            float_key,
            "\"%key%\" should be a float > 10 and < 20. \"%value%\" is wrong.",
        )?
        .add_validator_by_key(Date::new("d/m/Y"), "a_date")?
        .add_validator_by_key(Date::new("d/m/Y"), ("a_bad_date", "Some Bad Date"))?;
    Ok(validator)
}

fn record() -> Value {
    Value::from(json!({
        "an_integer": 10,
        "a_string": "Hello World",
        "an_empty_string": "",
        "a_float": 5.5,
        "a_date": "30/09/1982",
        "a_bad_date": "99/09/1982",
    }))
}

#[test]
fn reports_every_field_failure() {
    let mut validator = record_validator().unwrap();
    assert_eq!(validator.count(), 7);
    assert!(!validator.is_valid(&record()).unwrap());

    assert_eq!(
        validator.error_codes(),
        [
            ErrorCode::IS_EMPTY,
            ErrorCode::NOT_LESS,
            ErrorCode::NOT_MATCH,
            ErrorCode::NOT_GREATER,
            ErrorCode::INVALID_DATE_FORMAT,
        ]
    );
    assert_eq!(
        validator.error_messages(),
        [
            "No data value should be empty.",
            "<code>an_integer</code>: The input <code>(integer) 10</code> is not less than <code>(integer) 9</code>.",
            "<code>an_empty_string</code>: The input does not match against pattern <code>/Hello/</code>.",
            "\"Float value\" should be a float > 10 and < 20. \"(double) 5.5\" is wrong.",
            "<code>Some Bad Date</code>: The input <code>99/09/1982</code> does not fit the date format <code>d/m/Y</code>.",
        ]
    );
}

#[test]
fn reads_are_idempotent() {
    let mut validator = record_validator().unwrap();
    validator.is_valid(&record()).unwrap();

    let codes = validator.error_codes();
    let messages: Vec<String> = validator.error_messages().into_iter().map(str::to_owned).collect();
    let data = validator.error_data_map();
    assert_eq!(validator.error_codes(), codes);
    assert_eq!(validator.error_messages(), messages);
    assert_eq!(validator.error_data_map(), data);
}

#[test]
fn contexts_carry_the_raw_key_and_parameters() {
    let validator = record_validator().unwrap();
    let report = validator.validate_record(&record()).unwrap();

    let date = report.error_data(&ErrorCode::INVALID_DATE_FORMAT);
    assert_eq!(date.len(), 1);
    assert_eq!(date[0].key(), Some(&Value::from("a_bad_date")));
    assert_eq!(date[0].get("format"), Some(&Value::from("d/m/Y")));

    let float = report.error_data(&ErrorCode::NOT_GREATER);
    assert_eq!(float[0].value(), &Value::Float(5.5));
    assert_eq!(float[0].get("min"), Some(&Value::Int(10)));
}

#[test]
fn a_valid_record_logs_nothing() {
    let validator = record_validator().unwrap();
    let record = Value::from(json!({
        "an_integer": 8.5,
        "a_string": "Hello",
        "an_empty_string": "Hello again",
        "a_float": 15.0,
        "a_date": "01/01/2000",
        "a_bad_date": "29/02/2000",
    }));
    let report = validator.validate_record(&record).unwrap();
    assert!(report.is_valid());
    assert!(report.error_messages().is_empty());
}

// ============================================================================
// KEY ISOLATION
// ============================================================================

#[test]
fn failures_stay_with_their_key() {
    let mut validator = DataValidator::new();
    validator
        .add_validator_by_key(Type::new("string"), ("a", "First field"))
        .unwrap()
        .add_validator_by_key(Type::new("string"), "b")
        .unwrap();

    assert!(!validator.is_valid(&Value::record([
        ("a", Value::from(10)),
        ("b", Value::from("Hello")),
    ]))
    .unwrap());
    assert_eq!(validator.error_codes(), [ErrorCode::INVALID_TYPE_GIVEN]);
    let messages = validator.error_messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("First field"));
    assert!(!messages[0].contains("<code>b</code>"));
}

#[test]
fn generic_bindings_see_list_indexes() {
    let mut validator = DataValidator::new();
    validator.add_validator(GreaterThan::new(0)).unwrap();
    let report = validator
        .validate_record(&Value::list([3, 0, 5, -1]))
        .unwrap();
    let keys: Vec<_> = report
        .error_data(&ErrorCode::NOT_GREATER)
        .into_iter()
        .filter_map(InputContext::key)
        .cloned()
        .collect();
    assert_eq!(keys, [Value::from("1"), Value::from("3")]);
    assert_eq!(
        report.error_messages()[0],
        "<code>1</code>: The input <code>(integer) 0</code> is not greater than <code>(integer) 0</code>."
    );
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn built_from_json_configuration() {
    let factory = ValidatorFactory::shared();
    let config = Value::from(json!({
        "email": { "validator": "email" },
        "age": {
            "validator": "multi",
            "options": {
                "validators": [
                    { "validator": "type", "options": { "type": "integer" } },
                    { "validator": "between", "options": { "min": 18, "max": 130 } }
                ]
            }
        },
        "role": { "validator": "in-array", "options": { "haystack": ["admin", "editor"] } }
    }));
    assert!(factory.contains("between"));

    let mut validator = DataValidator::new();
    validator.add_validator_map_from_value(&config).unwrap();
    assert_eq!(validator.count(), 3);

    let good = Value::from(json!({ "email": "ada@example.com", "age": 36, "role": "admin" }));
    assert!(validator.is_valid(&good).unwrap());

    let bad = Value::from(json!({ "email": "ada", "age": "36", "role": "root" }));
    assert!(!validator.is_valid(&bad).unwrap());
    assert_eq!(
        validator.error_codes(),
        [ErrorCode::NOT_EMAIL, ErrorCode::INVALID_TYPE_GIVEN, ErrorCode::NOT_IN_ARRAY]
    );
}

#[test]
fn json_configuration_keeps_document_order() {
    let config = Value::from(json!({ "zeta": "not_empty", "alpha": "not_empty" }));
    let mut validator = DataValidator::new();
    validator.add_validator_map_from_value(&config).unwrap();

    assert!(!validator.is_valid(&Value::from(json!({ "zeta": "", "alpha": "" }))).unwrap());
    assert_eq!(
        validator.error_messages(),
        [
            "<code>zeta</code>: This value should not be empty.",
            "<code>alpha</code>: This value should not be empty.",
        ]
    );
}

#[test]
fn custom_templates_drive_messages() {
    let templates = ErrorTemplates::from_json_value(json!({
        "templates": { "is_empty": "Please fill in %key%." }
    }))
    .unwrap();
    let mut validator = DataValidator::with_logger(ErrorLogger::with_templates(templates));
    validator
        .add_validator_by_key(NotEmpty::new(), ("name", "your name"))
        .unwrap();
    assert!(!validator.is_valid(&Value::record([("name", "")])).unwrap());
    assert_eq!(
        validator.error_messages(),
        ["<code>your name</code>: Please fill in your name."]
    );
}

#[test]
fn report_exports_as_json() {
    let mut validator = DataValidator::new();
    validator.add_validator_by_key(LessThan::new(3), "n").unwrap();
    let report = validator.validate_record(&Value::record([("n", 4)])).unwrap();
    let exported: Vec<serde_json::Value> = report
        .logger()
        .entries()
        .iter()
        .map(|entry| serde_json::to_value(entry.context().to_value()).unwrap())
        .collect();
    assert_eq!(
        exported,
        [json!({ "value": 4, "max": 3, "inclusive": false, "key": "n" })]
    );
}
