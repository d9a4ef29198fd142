//! Outcome of one record validation.

use indexmap::IndexMap;

use crate::foundation::{ErrorCode, InputContext};
use crate::logger::ErrorLogger;

/// What a [`DataValidator`](super::DataValidator) run found.
///
/// Holds the logger the run wrote to: the validator's base logger plus every
/// failure of this run, rendered.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    valid: bool,
    logger: ErrorLogger,
}

impl ValidationReport {
    pub(crate) fn new(valid: bool, logger: ErrorLogger) -> Self {
        Self { valid, logger }
    }

    /// Whether the record passed every binding.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Distinct codes in first-seen order.
    pub fn error_codes(&self) -> Vec<ErrorCode> {
        self.logger.codes()
    }

    /// Rendered messages, grouped by code.
    pub fn error_messages(&self) -> Vec<&str> {
        self.logger.messages()
    }

    /// Contexts logged for `code`; each carries the record `key` when the
    /// failure belonged to one.
    pub fn error_data(&self, code: &ErrorCode) -> Vec<&InputContext> {
        self.logger.error_data(code)
    }

    pub fn error_data_map(&self) -> IndexMap<ErrorCode, Vec<InputContext>> {
        self.logger.error_data_map()
    }

    pub fn logger(&self) -> &ErrorLogger {
        &self.logger
    }

    pub fn into_logger(self) -> ErrorLogger {
        self.logger
    }
}
