//! Error logging and message rendering
//!
//! The [`ErrorLogger`] turns validation failures into human-readable
//! messages. Each failure is logged with its [`ErrorCode`] and
//! [`InputContext`]; the message comes from an inline template when the
//! caller supplies one, otherwise from the [`ErrorTemplates`] store.
//!
//! ```rust,ignore
//! use verdict_validator::prelude::*;
//!
//! let mut logger = ErrorLogger::new();
//! logger.log_for_key(("age", "Your age"), ErrorCode::NOT_GREATER, InputContext::new(3).with("min", 18), None)?;
//! assert_eq!(
//!     logger.last_message(),
//!     "<code>Your age</code>: The input <code>(integer) 3</code> is not greater than <code>(integer) 18</code>."
//! );
//! ```
//!
//! # Key decoration
//!
//! [`ErrorLogger::log_for_key`] without an inline template prefixes the
//! stored template with `<code>%key%</code>: `. An inline template is used
//! exactly as given, so it decides itself whether and where `%key%` appears.
//! `%key%` always renders the key's label when one is registered.

mod render;
mod templates;

use indexmap::{IndexMap, IndexSet};
use tracing::debug;

pub use render::build_message;
pub use templates::{ErrorTemplates, TemplateConfig};

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext};
use crate::value::Value;

// ============================================================================
// LOGGED ERROR
// ============================================================================

/// One rendered failure.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedError {
    code: ErrorCode,
    message: String,
    context: InputContext,
}

impl LoggedError {
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn context(&self) -> &InputContext {
        &self.context
    }
}

// ============================================================================
// LOG KEY
// ============================================================================

/// Field key of a key-qualified log call.
///
/// A labeled key registers its label with the logger; later calls with the
/// raw key alone render the label too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogKey {
    Raw(String),
    Labeled { key: String, label: String },
}

impl LogKey {
    /// The raw key.
    pub fn key(&self) -> &str {
        match self {
            Self::Raw(key) | Self::Labeled { key, .. } => key,
        }
    }
}

impl From<&str> for LogKey {
    fn from(key: &str) -> Self {
        Self::Raw(key.to_owned())
    }
}

impl From<String> for LogKey {
    fn from(key: String) -> Self {
        Self::Raw(key)
    }
}

impl<K: Into<String>, L: Into<String>> From<(K, L)> for LogKey {
    fn from((key, label): (K, L)) -> Self {
        Self::Labeled {
            key: key.into(),
            label: label.into(),
        }
    }
}

// ============================================================================
// ERROR LOGGER
// ============================================================================

/// Collects rendered failures.
///
/// Entries are append-only. Reads group messages by code, codes in the order
/// they were first logged.
#[derive(Debug, Clone, Default)]
pub struct ErrorLogger {
    templates: ErrorTemplates,
    entries: Vec<LoggedError>,
    labels: IndexMap<String, String>,
}

impl ErrorLogger {
    /// A logger with the built-in templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A logger rendering with `templates`.
    #[must_use]
    pub fn with_templates(templates: ErrorTemplates) -> Self {
        Self {
            templates,
            ..Self::default()
        }
    }

    pub fn templates(&self) -> &ErrorTemplates {
        &self.templates
    }

    /// Registers or overrides the template for `code`.
    pub fn set_template(
        &mut self,
        code: impl Into<ErrorCode>,
        template: impl Into<String>,
    ) -> ConfigResult<&mut Self> {
        self.templates.set(code, template)?;
        Ok(self)
    }

    /// Registers a human-readable label for `key`.
    pub fn register_label(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        self.labels.insert(key.into(), label.into());
        self
    }

    /// Label registered for `key`.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    /// Renders and records a failure.
    ///
    /// `template` takes precedence over the stored template. Fails with
    /// [`ConfigError::UnknownErrorCode`] when neither exists.
    pub fn log(
        &mut self,
        code: impl Into<ErrorCode>,
        context: InputContext,
        template: Option<&str>,
    ) -> ConfigResult<&mut Self> {
        let code = code.into();
        let template = self.resolve(&code, template)?;
        let message = build_message(template, &context, None).into_owned();
        self.push(code, message, context);
        Ok(self)
    }

    /// Renders and records a failure of the field `key`.
    ///
    /// Without an inline template the stored template is prefixed with
    /// `<code>%key%</code>: `. The raw key is added to the context as `key`
    /// unless the context already names one.
    pub fn log_for_key(
        &mut self,
        key: impl Into<LogKey>,
        code: impl Into<ErrorCode>,
        mut context: InputContext,
        template: Option<&str>,
    ) -> ConfigResult<&mut Self> {
        let key = key.into();
        if let LogKey::Labeled { key, label } = &key {
            self.labels.insert(key.clone(), label.clone());
        }
        let raw = key.key();
        let display = self.label(raw).unwrap_or(raw).to_owned();

        let code = code.into();
        let message = match template {
            Some(inline) => build_message(inline, &context, Some(&display)).into_owned(),
            None => {
                let stored = self.resolve(&code, None)?;
                let decorated = format!("<code>%key%</code>: {stored}");
                build_message(&decorated, &context, Some(&display)).into_owned()
            }
        };

        if !context.contains(InputContext::KEY) {
            context.insert(InputContext::KEY, Value::from(raw));
        }
        self.push(code, message, context);
        Ok(self)
    }

    fn resolve<'a>(&'a self, code: &ErrorCode, inline: Option<&'a str>) -> ConfigResult<&'a str> {
        inline
            .or_else(|| self.templates.get(code))
            .ok_or_else(|| ConfigError::UnknownErrorCode {
                code: code.to_string(),
            })
    }

    fn push(&mut self, code: ErrorCode, message: String, context: InputContext) {
        debug!(code = %code, total = self.entries.len() + 1, "logged validation error");
        self.entries.push(LoggedError {
            code,
            message,
            context,
        });
    }

    /// All messages, grouped by code.
    pub fn messages(&self) -> Vec<&str> {
        let mut grouped: IndexMap<&ErrorCode, Vec<&str>> = IndexMap::new();
        for entry in &self.entries {
            grouped.entry(&entry.code).or_default().push(entry.message());
        }
        grouped.into_values().flatten().collect()
    }

    /// Messages logged for `code`, oldest first.
    pub fn messages_for(&self, code: &ErrorCode) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| &entry.code == code)
            .map(LoggedError::message)
            .collect()
    }

    /// Distinct codes in first-seen order.
    pub fn codes(&self) -> Vec<ErrorCode> {
        self.entries
            .iter()
            .map(|entry| &entry.code)
            .collect::<IndexSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Most recent message, empty if nothing was logged.
    pub fn last_message(&self) -> &str {
        self.entries.last().map_or("", LoggedError::message)
    }

    /// Most recent message for `code`, empty if none.
    pub fn last_message_for(&self, code: &ErrorCode) -> &str {
        self.entries
            .iter()
            .rev()
            .find(|entry| &entry.code == code)
            .map_or("", LoggedError::message)
    }

    /// Total number of logged messages.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Contexts logged for `code`, oldest first.
    pub fn error_data(&self, code: &ErrorCode) -> Vec<&InputContext> {
        self.entries
            .iter()
            .filter(|entry| &entry.code == code)
            .map(LoggedError::context)
            .collect()
    }

    /// Contexts grouped by code.
    pub fn error_data_map(&self) -> IndexMap<ErrorCode, Vec<InputContext>> {
        let mut map: IndexMap<ErrorCode, Vec<InputContext>> = IndexMap::new();
        for entry in &self.entries {
            map.entry(entry.code.clone())
                .or_default()
                .push(entry.context.clone());
        }
        map
    }

    /// Entries in logging order.
    pub fn entries(&self) -> &[LoggedError] {
        &self.entries
    }

    /// Iterates messages, grouped by code.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages().into_iter()
    }

    /// A new logger with this logger's templates, labels and entries, plus
    /// `other`'s entries for codes this logger has a template for.
    ///
    /// Entries of `other` under codes unknown to this logger are dropped.
    /// Labels of `other` fill in keys this logger has no label for.
    #[must_use]
    pub fn merge(&self, other: &ErrorLogger) -> ErrorLogger {
        let mut merged = self.clone();
        merged.entries.extend(
            other
                .entries
                .iter()
                .filter(|entry| self.templates.contains(&entry.code))
                .cloned(),
        );
        for (key, label) in &other.labels {
            merged
                .labels
                .entry(key.clone())
                .or_insert_with(|| label.clone());
        }
        merged
    }
}

// ============================================================================
// TESTS
// ============================================================================
