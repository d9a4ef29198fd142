//! Record validation
//!
//! [`DataValidator`] binds validators to the keys of a record (an array
//! value), runs them, and routes every failure through an
//! [`ErrorLogger`] so each message names the field it belongs to.
//!
//! Two kinds of binding exist:
//!
//! - **generic** bindings run against every element of the record, keyed by
//!   the element's key;
//! - **keyed** bindings run against the value at their key (`null` when the
//!   record has no such key).
//!
//! A validator reporting several failures (a [`Multi`](crate::combinators::Multi)
//! for instance) has each failure logged on its own.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let mut validator = DataValidator::new();
//! validator
//!     .add_validator_with_message(NotEmpty::new(), "No data value should be empty.")?
//!     .add_validator_by_key(LessThan::new(9), "an_integer")?
//!     .add_validator_by_key(Date::new("d/m/Y"), ("a_bad_date", "Some Bad Date"))?;
//!
//! let report = validator.validate_record(&record)?;
//! for message in report.error_messages() {
//!     println!("{message}");
//! }
//! ```

mod key;
mod report;

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, instrument, trace};

pub use key::KeyArg;
pub use report::ValidationReport;

use crate::error::{ConfigError, ConfigResult};
use crate::factory::{ValidatorFactory, spec_from_value};
use crate::foundation::{ErrorCode, InputContext, Validate, ValidationError, ValidatorSpec};
use crate::logger::{ErrorLogger, LogKey};
use crate::value::{Key, Value};

// ============================================================================
// BINDINGS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum BindingKey {
    Generic,
    Key(String),
}

#[derive(Clone)]
struct Binding {
    validator: Arc<dyn Validate>,
    message: Option<String>,
}

/// One failure found while walking a record.
struct Failure<'a> {
    key: Option<LogKey>,
    code: &'a ErrorCode,
    context: InputContext,
    message: Option<&'a str>,
}

// ============================================================================
// DATA VALIDATOR
// ============================================================================

/// Validates records field by field.
///
/// Bindings are fixed at setup; validating never changes them, so one
/// configured `DataValidator` can check any number of records. Named
/// validator specs are resolved through the factory when bound, so a typo in
/// a name fails the `add_*` call rather than a later validation.
///
/// A label given for a key names that key in every message about it, from
/// generic and keyed bindings alike.
#[derive(Clone)]
pub struct DataValidator {
    bindings: IndexMap<BindingKey, Vec<Binding>>,
    labels: IndexMap<String, String>,
    factory: Arc<ValidatorFactory>,
    logger: ErrorLogger,
    last: Option<ValidationReport>,
}

impl DataValidator {
    /// A validator logging with the built-in templates.
    pub fn new() -> Self {
        Self::with_logger(ErrorLogger::new())
    }

    /// A validator logging through `logger`.
    ///
    /// Every run starts from a copy of `logger`, so entries it already holds
    /// appear in every report.
    pub fn with_logger(logger: ErrorLogger) -> Self {
        Self {
            bindings: IndexMap::new(),
            labels: IndexMap::new(),
            factory: ValidatorFactory::shared_handle(),
            logger,
            last: None,
        }
    }

    /// Resolves named specs through `factory` instead of the built-ins.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_factory(mut self, factory: ValidatorFactory) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    /// A copy whose logger is this logger merged with `other`.
    ///
    /// See [`ErrorLogger::merge`] for which entries survive.
    #[must_use]
    pub fn with_error_logger(&self, other: &ErrorLogger) -> Self {
        Self {
            logger: self.logger.merge(other),
            last: None,
            ..self.clone()
        }
    }

    pub fn error_logger(&self) -> &ErrorLogger {
        &self.logger
    }

    // ------------------------------------------------------------------------
    // Setup
    // ------------------------------------------------------------------------

    fn bind(
        &mut self,
        key: BindingKey,
        spec: ValidatorSpec,
        message: Option<String>,
    ) -> ConfigResult<&mut Self> {
        let validator = self.factory.resolve(spec)?;
        debug!(key = ?key, validator = %validator.name(), "bound validator");
        self.bindings
            .entry(key)
            .or_default()
            .push(Binding { validator, message });
        Ok(self)
    }

    /// Binds a validator to every element of the record.
    pub fn add_validator(&mut self, validator: impl Into<ValidatorSpec>) -> ConfigResult<&mut Self> {
        self.bind(BindingKey::Generic, validator.into(), None)
    }

    /// Binds a validator to every element, rendering its failures with
    /// `message` instead of the stored templates.
    pub fn add_validator_with_message(
        &mut self,
        validator: impl Into<ValidatorSpec>,
        message: impl Into<String>,
    ) -> ConfigResult<&mut Self> {
        self.bind(BindingKey::Generic, validator.into(), Some(message.into()))
    }

    /// Binds a validator to one key, several keys, or a labeled key.
    ///
    /// Fails with [`ConfigError::InvalidKey`] for an empty key or key list.
    pub fn add_validator_by_key(
        &mut self,
        validator: impl Into<ValidatorSpec>,
        key: impl Into<KeyArg>,
    ) -> ConfigResult<&mut Self> {
        self.bind_keys(validator.into(), key.into(), None)
    }

    /// Like [`add_validator_by_key`](Self::add_validator_by_key), rendering
    /// failures with `message`.
    pub fn add_validator_by_key_with_message(
        &mut self,
        validator: impl Into<ValidatorSpec>,
        key: impl Into<KeyArg>,
        message: impl Into<String>,
    ) -> ConfigResult<&mut Self> {
        self.bind_keys(validator.into(), key.into(), Some(message.into()))
    }

    fn bind_keys(
        &mut self,
        spec: ValidatorSpec,
        key: KeyArg,
        message: Option<String>,
    ) -> ConfigResult<&mut Self> {
        let bindings = key.into_bindings()?;
        let validator = self.factory.resolve(spec)?;
        for (key, label) in bindings {
            if let Some(label) = label {
                self.labels.insert(key.clone(), label);
            }
            self.bind(
                BindingKey::Key(key),
                ValidatorSpec::Instance(Arc::clone(&validator)),
                message.clone(),
            )?;
        }
        Ok(self)
    }

    /// Binds one validator per key.
    pub fn add_validator_map<I, K, S>(&mut self, validators: I) -> ConfigResult<&mut Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: Into<String>,
        S: Into<ValidatorSpec>,
    {
        for (key, spec) in validators {
            self.add_validator_by_key(spec, KeyArg::One(key.into()))?;
        }
        Ok(self)
    }

    /// Binds validators from a configuration record mapping each key to a
    /// validator name or `{validator, options}` record.
    ///
    /// Index keys are rejected with [`ConfigError::InvalidKey`].
    pub fn add_validator_map_from_value(&mut self, map: &Value) -> ConfigResult<&mut Self> {
        let Some(entries) = map.as_array() else {
            return Err(ConfigError::invalid_key(format!(
                "a validator map must be a record, {} given",
                map.kind()
            )));
        };
        for (key, spec) in entries {
            let Key::Name(key) = key else {
                return Err(ConfigError::invalid_key(format!(
                    "validator map keys must be strings, {key} given"
                )));
            };
            let spec = spec_from_value(spec, "DataValidator", "validators")?;
            self.add_validator_by_key(spec, KeyArg::One(key.clone()))?;
        }
        Ok(self)
    }

    /// Label registered for `key`, if any.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Number of (key, validator) bindings, generic ones included.
    pub fn count(&self) -> usize {
        self.bindings.values().map(Vec::len).sum()
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------

    /// Walks `value`, handing every failure to `sink`. Returns whether the
    /// record passed.
    fn collect<E>(
        &self,
        value: &Value,
        mut sink: impl FnMut(Failure<'_>) -> Result<(), E>,
    ) -> Result<bool, E> {
        if self.bindings.is_empty() {
            return Ok(true);
        }
        let Some(items) = value.as_array() else {
            sink(Failure {
                key: None,
                code: &ErrorCode::INVALID_TYPE_NON_TRAVERSABLE,
                context: InputContext::new(value.clone()),
                message: None,
            })?;
            return Ok(false);
        };

        let mut valid = true;
        if let Some(generic) = self.bindings.get(&BindingKey::Generic) {
            for (key, item) in items {
                let key = key.to_string();
                for binding in generic {
                    valid &= run(binding, &key, item, self.log_key(&key), &mut sink)?;
                }
            }
        }

        for (binding_key, bindings) in &self.bindings {
            let BindingKey::Key(key) = binding_key else {
                continue;
            };
            let item = items.get(&Key::from(key.as_str())).unwrap_or(&Value::Null);
            for binding in bindings {
                valid &= run(binding, key, item, self.log_key(key), &mut sink)?;
            }
        }
        Ok(valid)
    }

    fn log_key(&self, key: &str) -> LogKey {
        match self.labels.get(key) {
            Some(label) => LogKey::Labeled {
                key: key.to_owned(),
                label: label.clone(),
            },
            None => LogKey::Raw(key.to_owned()),
        }
    }

    /// Validates `record` and renders every failure.
    ///
    /// Fails with [`ConfigError::UnknownErrorCode`] when a validator reports
    /// a code that has neither a stored template nor an inline message.
    #[instrument(level = "debug", skip_all, fields(bindings = self.count()))]
    pub fn validate_record(&self, record: &Value) -> ConfigResult<ValidationReport> {
        let mut logger = self.logger.clone();
        let valid = self.collect(record, |failure| {
            let Failure {
                key,
                code,
                context,
                message,
            } = failure;
            match key {
                Some(key) => logger.log_for_key(key, code.clone(), context, message)?,
                None => logger.log(code.clone(), context, message)?,
            };
            Ok::<(), ConfigError>(())
        })?;
        debug!(valid, logged = logger.count(), "record validated");
        Ok(ValidationReport::new(valid, logger))
    }

    /// Validates `record` and keeps the report for the accessors below.
    pub fn is_valid(&mut self, record: &Value) -> ConfigResult<bool> {
        let report = self.validate_record(record)?;
        let valid = report.is_valid();
        self.last = Some(report);
        Ok(valid)
    }

    /// Report of the last [`is_valid`](Self::is_valid) call.
    pub fn last_report(&self) -> Option<&ValidationReport> {
        self.last.as_ref()
    }

    /// Codes of the last run; empty before the first.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.last
            .as_ref()
            .map(ValidationReport::error_codes)
            .unwrap_or_default()
    }

    /// Messages of the last run, grouped by code.
    pub fn error_messages(&self) -> Vec<&str> {
        self.last
            .as_ref()
            .map(ValidationReport::error_messages)
            .unwrap_or_default()
    }

    /// Contexts of the last run for `code`.
    pub fn error_data(&self, code: &ErrorCode) -> Vec<&InputContext> {
        self.last
            .as_ref()
            .map(|report| report.error_data(code))
            .unwrap_or_default()
    }

    pub fn error_data_map(&self) -> IndexMap<ErrorCode, Vec<InputContext>> {
        self.last
            .as_ref()
            .map(ValidationReport::error_data_map)
            .unwrap_or_default()
    }
}

/// Runs one binding against one value, handing each failure to `sink`.
fn run<E>(
    binding: &Binding,
    key: &str,
    item: &Value,
    log_key: LogKey,
    sink: &mut impl FnMut(Failure<'_>) -> Result<(), E>,
) -> Result<bool, E> {
    let outcome = binding.validator.validate(item);
    trace!(key, validator = %binding.validator.name(), passed = outcome.is_ok(), "evaluated binding");
    let Err(error) = outcome else {
        return Ok(true);
    };
    for (code, context) in error.failures() {
        let mut context = context.clone();
        context.insert(InputContext::KEY, key);
        sink(Failure {
            key: Some(log_key.clone()),
            code,
            context,
            message: binding.message.as_deref(),
        })?;
    }
    Ok(false)
}

impl Default for DataValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DataValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings: Vec<(&BindingKey, Vec<_>)> = self
            .bindings
            .iter()
            .map(|(key, bindings)| {
                (
                    key,
                    bindings.iter().map(|b| b.validator.name()).collect(),
                )
            })
            .collect();
        f.debug_struct("DataValidator")
            .field("bindings", &bindings)
            .field("labels", &self.labels)
            .field("logged", &self.logger.count())
            .finish_non_exhaustive()
    }
}

/// Lets a `DataValidator` sit inside combinators or another
/// `DataValidator`. Failures carry the record `key` in their context;
/// nothing is rendered.
impl Validate for DataValidator {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let mut failures = Vec::new();
        let Ok(_) = self.collect::<Infallible>(value, |failure| {
            failures.push(ValidationError::new(failure.code.clone(), failure.context));
            Ok(())
        });
        ValidationError::combine(failures).map_or(Ok(()), Err)
    }
}

crate::macros::impl_into_spec!(DataValidator);

// ============================================================================
// TESTS
// ============================================================================
