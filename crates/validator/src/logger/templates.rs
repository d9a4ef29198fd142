//! Error message templates.
//!
//! Templates are plain strings with `%name%` placeholders. The built-in set
//! covers every [`ErrorCode`] constant; overrides and custom codes can be
//! added in code or loaded from a JSON document:
//!
//! ```json
//! { "templates": { "is_empty": "Please fill in this field.", "too_cold": "Below %min%." } }
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::ErrorCode;

const DEFAULTS: [(ErrorCode, &str); 27] = [
    (
        ErrorCode::CUSTOM_ERROR,
        "Some errors occurred for <code>%value%</code>.",
    ),
    (
        ErrorCode::INVALID_DATE,
        "The input <code>%value%</code> does not appear to be a valid date.",
    ),
    (
        ErrorCode::INVALID_DATE_FORMAT,
        "The input <code>%value%</code> does not fit the date format <code>%format%</code>.",
    ),
    (
        ErrorCode::INVALID_DNS,
        "The host for the given input <code>%value%</code> could not be resolved.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_ARRAY,
        "Invalid type given for <code>%value%</code>. Array expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_COUNTABLE,
        "Invalid type given for <code>%value%</code>. Countable value expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_DATE,
        "Invalid type given for <code>%value%</code>. String, integer, array or date object expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_NUMERIC,
        "Invalid type given for <code>%value%</code>. Numeric value expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_SCALAR,
        "Invalid type given for <code>%value%</code>. String, integer or float expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_STRING,
        "Invalid type given for <code>%value%</code>. String expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_NON_TRAVERSABLE,
        "Invalid type given for <code>%value%</code>. Array or traversable value expected.",
    ),
    (
        ErrorCode::INVALID_TYPE_GIVEN,
        "Invalid type given for <code>%value%</code>. <code>%type%</code> expected.",
    ),
    (
        ErrorCode::INVALID_SIZE,
        "Size for input <code>%value%</code> is not <code>%size%</code>.",
    ),
    (ErrorCode::IS_EMPTY, "This value should not be empty."),
    (
        ErrorCode::NOT_BETWEEN,
        "The input <code>%value%</code> is not between <code>%min%</code> and <code>%max%</code>, inclusively.",
    ),
    (
        ErrorCode::NOT_BETWEEN_STRICT,
        "The input <code>%value%</code> is not strictly between <code>%min%</code> and <code>%max%</code>.",
    ),
    (
        ErrorCode::NOT_EMAIL,
        "The input <code>%value%</code> is not a valid email address.",
    ),
    (
        ErrorCode::NOT_GREATER,
        "The input <code>%value%</code> is not greater than <code>%min%</code>.",
    ),
    (
        ErrorCode::NOT_GREATER_INCLUSIVE,
        "The input <code>%value%</code> is not greater or equal than <code>%min%</code>.",
    ),
    (
        ErrorCode::NOT_IN_ARRAY,
        "The input <code>%value%</code> is not in the list of allowed values.",
    ),
    (
        ErrorCode::NOT_LESS,
        "The input <code>%value%</code> is not less than <code>%max%</code>.",
    ),
    (
        ErrorCode::NOT_LESS_INCLUSIVE,
        "The input <code>%value%</code> is not less or equal than <code>%max%</code>.",
    ),
    (
        ErrorCode::NOT_MATCH,
        "The input does not match against pattern <code>%pattern%</code>.",
    ),
    (
        ErrorCode::NOT_URL,
        "The input <code>%value%</code> is not a valid URL.",
    ),
    (
        ErrorCode::MULTIPLE_ERRORS,
        "Some errors occurred for <code>%value%</code>.",
    ),
    (
        ErrorCode::REGEX_INTERNAL_ERROR,
        "There was an internal error while using the pattern <code>%pattern%</code>.",
    ),
    (
        ErrorCode::NEGATED_VALIDATOR_PASSED,
        "The input <code>%value%</code> was expected to fail <code>%validator_name%</code>.",
    ),
];

/// Code → template store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorTemplates {
    templates: IndexMap<ErrorCode, String>,
}

/// JSON shape of a template configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// Template overrides and custom codes.
    pub templates: IndexMap<String, serde_json::Value>,
}

impl ErrorTemplates {
    /// The built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: DEFAULTS
                .into_iter()
                .map(|(code, template)| (code, template.to_owned()))
                .collect(),
        }
    }

    /// A store with no templates at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: IndexMap::new(),
        }
    }

    /// Built-in templates with `overrides` applied on top.
    pub fn with_overrides<I, C, T>(overrides: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<ErrorCode>,
        T: Into<String>,
    {
        let mut store = Self::new();
        for (code, template) in overrides {
            store.set(code, template)?;
        }
        Ok(store)
    }

    /// Built-in templates with overrides read from a JSON document.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: TemplateConfig =
            serde_json::from_str(json).map_err(|err| ConfigError::InvalidConfig {
                reason: err.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Built-in templates with overrides from an already decoded document.
    pub fn from_json_value(json: serde_json::Value) -> ConfigResult<Self> {
        let config: TemplateConfig =
            serde_json::from_value(json).map_err(|err| ConfigError::InvalidConfig {
                reason: err.to_string(),
            })?;
        Self::from_config(config)
    }

    /// Built-in templates with the overrides of `config`.
    ///
    /// Every entry must be a string; the first one that is not fails with
    /// [`ConfigError::InvalidTemplate`].
    pub fn from_config(config: TemplateConfig) -> ConfigResult<Self> {
        let mut store = Self::new();
        for (code, template) in config.templates {
            match template {
                serde_json::Value::String(template) => store.set(code, template)?,
                other => {
                    return Err(ConfigError::InvalidTemplate {
                        code,
                        found: json_kind(&other),
                    });
                }
            }
        }
        Ok(store)
    }

    /// Template for `code`.
    pub fn get(&self, code: &ErrorCode) -> Option<&str> {
        self.templates.get(code).map(String::as_str)
    }

    /// Registers or overrides the template for `code`.
    pub fn set(&mut self, code: impl Into<ErrorCode>, template: impl Into<String>) -> ConfigResult<()> {
        let code = code.into();
        if code.is_empty() {
            return Err(ConfigError::UnknownErrorCode {
                code: code.to_string(),
            });
        }
        self.templates.insert(code, template.into());
        Ok(())
    }

    pub fn contains(&self, code: &ErrorCode) -> bool {
        self.templates.contains_key(code)
    }

    /// Registered codes in registration order.
    pub fn codes(&self) -> impl Iterator<Item = &ErrorCode> {
        self.templates.keys()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// A new store with every template of `self` plus the templates of
    /// `other` for codes `self` does not know.
    #[must_use]
    pub fn merge(&self, other: &ErrorTemplates) -> ErrorTemplates {
        let mut merged = self.clone();
        for (code, template) in &other.templates {
            merged
                .templates
                .entry(code.clone())
                .or_insert_with(|| template.clone());
        }
        merged
    }
}

impl Default for ErrorTemplates {
    fn default() -> Self {
        Self::new()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
