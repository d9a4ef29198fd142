//! Validator factory.
//!
//! Maps validator names to constructors so validators can be named in
//! configuration instead of built in code. Lookup normalizes names: only the
//! last `::` or `\` separated segment counts, case is ignored and everything
//! but letters and digits is dropped, so `GreaterThan`, `greater-than`,
//! `greater_than` and `validators::GreaterThan` all find the same entry.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let factory = ValidatorFactory::shared();
//! let check = factory.create("less-than", &options! { "max" => 9 })?;
//! assert!(check.validate(&Value::from(10)).is_err());
//! ```

use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use tracing::debug;

use crate::combinators::{Bulk, Children, Multi, MultiOr, Negate, Pool};
use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{Options, Validate, ValidatorSpec, nested, required};
use crate::validators::{
    Between, Date, Email, GreaterThan, InArray, LessThan, NotEmpty, RegEx, Size, Type, Url,
};
use crate::value::{Key, Value};

/// Builds a validator from its options.
///
/// Combinators receive the factory so they can resolve their children by
/// name.
pub type Constructor =
    Arc<dyn Fn(&Options, &ValidatorFactory) -> ConfigResult<Arc<dyn Validate>> + Send + Sync>;

static SHARED: LazyLock<Arc<ValidatorFactory>> = LazyLock::new(|| Arc::new(ValidatorFactory::new()));

/// Canonical form of a validator name.
///
/// ```rust,ignore
/// assert_eq!(normalize_name("Acme\\Validator\\Greater_Than"), "greaterthan");
/// ```
pub fn normalize_name(name: &str) -> String {
    let segment = name
        .rsplit(['\\', ':'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(name);
    segment
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn leaf<V>(build: fn(&Options) -> ConfigResult<V>) -> Constructor
where
    V: Validate + 'static,
{
    Arc::new(move |options, _| Ok(Arc::new(build(options)?) as Arc<dyn Validate>))
}

fn composite<V>(build: fn(&Options, &ValidatorFactory) -> ConfigResult<V>) -> Constructor
where
    V: Validate + 'static,
{
    Arc::new(move |options, factory| Ok(Arc::new(build(options, factory)?) as Arc<dyn Validate>))
}

// ============================================================================
// FACTORY
// ============================================================================

/// Registry of validator constructors keyed by normalized name.
#[derive(Clone)]
pub struct ValidatorFactory {
    constructors: IndexMap<String, Constructor>,
}

impl ValidatorFactory {
    /// A factory with every built-in validator and combinator registered.
    ///
    /// `Callback` is not among them: a closure cannot come from options.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory
            .insert("Between", leaf(Between::from_options))
            .insert("Date", leaf(Date::from_options))
            .insert("Email", leaf(Email::from_options))
            .insert("GreaterThan", leaf(GreaterThan::from_options))
            .insert("InArray", leaf(InArray::from_options))
            .insert("LessThan", leaf(LessThan::from_options))
            .insert("NotEmpty", leaf(NotEmpty::from_options))
            .insert("RegEx", leaf(RegEx::from_options))
            .insert("Size", leaf(Size::from_options))
            .insert("Type", leaf(Type::from_options))
            .insert("Url", leaf(Url::from_options))
            .insert("Multi", composite(Multi::from_options))
            .insert("MultiOr", composite(MultiOr::from_options))
            .insert("FirstOf", composite(MultiOr::from_options))
            .insert("Negate", composite(Negate::from_options))
            .insert("Bulk", composite(Bulk::from_options))
            .insert("Pool", composite(Pool::from_options));
        factory
    }

    /// A factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            constructors: IndexMap::new(),
        }
    }

    /// The process-wide factory holding the built-ins.
    ///
    /// Typed constructors such as [`Multi::with_validators`] resolve names
    /// through it.
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Owning handle to [`shared`](Self::shared) for holders that may
    /// also own a custom factory.
    pub(crate) fn shared_handle() -> Arc<Self> {
        Arc::clone(&*SHARED)
    }

    fn insert(&mut self, name: &str, constructor: Constructor) -> &mut Self {
        self.constructors.insert(normalize_name(name), constructor);
        self
    }

    /// Registers (or replaces) a constructor under `name`.
    pub fn register<F>(&mut self, name: &str, constructor: F) -> ConfigResult<&mut Self>
    where
        F: Fn(&Options, &ValidatorFactory) -> ConfigResult<Arc<dyn Validate>>
            + Send
            + Sync
            + 'static,
    {
        let key = normalize_name(name);
        if key.is_empty() {
            return Err(ConfigError::InvalidConfig {
                reason: format!("validator name {name:?} has no letters or digits"),
            });
        }
        debug!(name, key = %key, "registering validator constructor");
        Ok(self.insert(name, Arc::new(constructor)))
    }

    /// Whether `name` (in any spelling) is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(&normalize_name(name))
    }

    /// Normalized names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }

    /// Builds the validator registered under `name`.
    pub fn create(&self, name: &str, options: &Options) -> ConfigResult<Arc<dyn Validate>> {
        let key = normalize_name(name);
        let Some(constructor) = self.constructors.get(&key) else {
            return Err(ConfigError::UnknownValidator {
                name: name.to_owned(),
            });
        };
        debug!(name, key = %key, options = options.len(), "creating validator");
        constructor(options, self)
    }

    /// Turns a spec into a validator, building named specs.
    pub fn resolve(&self, spec: impl Into<ValidatorSpec>) -> ConfigResult<Arc<dyn Validate>> {
        match spec.into() {
            ValidatorSpec::Instance(validator) => Ok(validator),
            ValidatorSpec::Named { name, options } => self.create(&name, &options),
        }
    }

    /// Builds a validator from a configuration value: a name, or a
    /// `{validator, options}` record.
    pub fn create_from_value(&self, value: &Value) -> ConfigResult<Arc<dyn Validate>> {
        self.resolve(spec_from_value(value, "ValidatorFactory", "validator")?)
    }

    /// Builds a validator from JSON, shaped like
    /// [`create_from_value`](Self::create_from_value) expects.
    pub fn create_from_json(&self, json: &serde_json::Value) -> ConfigResult<Arc<dyn Validate>> {
        self.create_from_value(&Value::from(json.clone()))
    }

    /// Resolves the single child a wrapping combinator names with its
    /// `validator` and `options` entries.
    pub(crate) fn resolve_child(
        &self,
        options: &Options,
        combinator: &'static str,
    ) -> ConfigResult<Arc<dyn Validate>> {
        let child = required(options, combinator, "validator")?;
        match child {
            Value::String(name) => {
                let child_options = match options.get("options") {
                    Some(value) => nested(value, combinator, "options")?,
                    None => Options::new(),
                };
                self.create(name, &child_options)
            }
            record => self.resolve(spec_from_value(record, combinator, "validator")?),
        }
    }

    /// Resolves a list of children from `options[option]`: absent means no
    /// children, a name or `{validator, options}` record is a single child,
    /// and a list holds any mix of both.
    pub(crate) fn resolve_list(
        &self,
        options: &Options,
        combinator: &'static str,
        option: &'static str,
    ) -> ConfigResult<Children> {
        let specs = match options.get(option) {
            None | Some(Value::Null) => Vec::new(),
            Some(value @ Value::String(_)) => vec![spec_from_value(value, combinator, option)?],
            Some(value @ Value::Array(items)) if items.contains_key(&Key::from("validator")) => {
                vec![spec_from_value(value, combinator, option)?]
            }
            Some(Value::Array(items)) => items
                .values()
                .map(|item| spec_from_value(item, combinator, option))
                .collect::<ConfigResult<Vec<_>>>()?,
            Some(other) => {
                return Err(ConfigError::invalid_option(
                    combinator,
                    option,
                    format!("expected a list of validators, {} given", other.kind()),
                ));
            }
        };
        specs.into_iter().map(|spec| self.resolve(spec)).collect()
    }
}

impl Default for ValidatorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidatorFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorFactory")
            .field("names", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Reads a validator spec from a configuration value.
pub fn spec_from_value(
    value: &Value,
    validator: &'static str,
    option: &'static str,
) -> ConfigResult<ValidatorSpec> {
    match value {
        Value::String(name) => Ok(ValidatorSpec::named(name.clone(), Options::new())),
        Value::Array(items) => {
            let Some(Value::String(name)) = items.get(&Key::from("validator")) else {
                return Err(ConfigError::invalid_option(
                    validator,
                    option,
                    "a validator record needs a string \"validator\" entry",
                ));
            };
            let options = match items.get(&Key::from("options")) {
                Some(value) => nested(value, validator, "options")?,
                None => Options::new(),
            };
            Ok(ValidatorSpec::named(name.clone(), options))
        }
        other => Err(ConfigError::invalid_option(
            validator,
            option,
            format!("expected a validator name or record, {} given", other.kind()),
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::foundation::{ErrorCode, ValidationError};
    use crate::options;

    #[rstest]
    #[case("GreaterThan", "greaterthan")]
    #[case("greater-than", "greaterthan")]
    #[case("greater_than", "greaterthan")]
    #[case("Acme\\Validator\\NotEmpty", "notempty")]
    #[case("verdict::validators::RegEx", "regex")]
    #[case("in array", "inarray")]
    fn names_normalize(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(normalize_name(name), expected);
    }

    #[test]
    fn built_ins_are_registered() {
        let factory = ValidatorFactory::new();
        let names: Vec<&str> = factory.names().collect();
        assert_eq!(
            names,
            [
                "between", "date", "email", "greaterthan", "inarray", "lessthan", "notempty",
                "regex", "size", "type", "url", "multi", "multior", "firstof", "negate", "bulk",
                "pool",
            ]
        );
        assert!(!factory.contains("callback"));
        assert!(factory.contains("Not-Empty"));
    }

    #[test]
    fn unknown_names_fail() {
        let err = ValidatorFactory::shared()
            .create("Acme\\Missing", &Options::new())
            .err()
            .unwrap();
        assert_eq!(
            err,
            ConfigError::UnknownValidator {
                name: "Acme\\Missing".to_owned()
            }
        );
        assert!(ValidatorFactory::empty().create("not_empty", &Options::new()).is_err());
    }

    #[test]
    fn options_reach_the_constructor() {
        let check = ValidatorFactory::shared()
            .create("less-than", &options! { "max" => 9 })
            .unwrap();
        assert_eq!(check.name(), "LessThan");
        assert!(check.validate(&Value::from(8)).is_ok());
        assert!(check.validate(&Value::from(10)).is_err());
    }

    struct Even;

    impl Validate for Even {
        fn validate(&self, value: &Value) -> Result<(), ValidationError> {
            match value.as_int() {
                Some(number) if number % 2 == 0 => Ok(()),
                _ => Err(ValidationError::for_value("not_even", value)),
            }
        }
    }

    #[test]
    fn custom_registration() {
        let mut factory = ValidatorFactory::new();
        factory
            .register("acme::Even", |_, _| Ok(Arc::new(Even) as Arc<dyn Validate>))
            .unwrap();
        let even = factory.create("even", &Options::new()).unwrap();
        assert!(even.validate(&Value::from(4)).is_ok());

        let bulk = factory
            .create("bulk", &options! { "validator" => "Even" })
            .unwrap();
        let error = bulk.validate(&Value::list([2, 3])).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::new("not_even"));

        assert!(factory.register("--", |_, _| Ok(Arc::new(Even) as Arc<dyn Validate>)).is_err());
    }

    #[test]
    fn nested_configuration_from_json() {
        let check = ValidatorFactory::shared()
            .create_from_json(&json!({
                "validator": "multi",
                "options": {
                    "validators": [
                        "not_empty",
                        { "validator": "negate", "options": {
                            "validator": "in_array",
                            "options": { "haystack": ["admin", "root"] }
                        }}
                    ]
                }
            }))
            .unwrap();
        assert!(check.validate(&Value::from("alice")).is_ok());
        let error = check.validate(&Value::from("root")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::NEGATED_VALIDATOR_PASSED);
        let error = check.validate(&Value::from("")).unwrap_err();
        assert_eq!(error.error_codes(), [ErrorCode::IS_EMPTY]);
    }

    #[rstest]
    #[case(json!(3))]
    #[case(json!({ "options": {} }))]
    #[case(json!({ "validator": "regex", "options": "x" }))]
    fn malformed_records(#[case] json: serde_json::Value) {
        assert!(ValidatorFactory::shared().create_from_json(&json).is_err());
    }

    #[test]
    fn list_option_shapes() {
        let factory = ValidatorFactory::shared();
        let single = factory
            .resolve_list(&options! { "validators" => "not_empty" }, "Multi", "validators")
            .unwrap();
        assert_eq!(single.len(), 1);
        let record = factory
            .resolve_list(
                &options! { "validators" => Value::record([("validator", "size")]) },
                "Multi",
                "validators",
            )
            .unwrap();
        assert_eq!(record.len(), 1);
        assert!(factory.resolve_list(&options! {}, "Multi", "validators").unwrap().is_empty());
        assert!(factory.resolve_list(&options! { "validators" => 1 }, "Multi", "validators").is_err());
    }
}
