//! Regular expression match.
//!
//! Patterns are written in delimited form: a delimiter, the expression, the
//! same delimiter (or the closing bracket for `(`, `[`, `{`, `<`), then
//! optional flags.
//!
//! | Flag | Meaning                         |
//! |------|---------------------------------|
//! | `i`  | case-insensitive                |
//! | `m`  | `^` and `$` match at lines      |
//! | `s`  | `.` matches newlines            |
//! | `x`  | whitespace and `#` comments     |
//! | `u`  | Unicode (always on)             |

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, required};
use crate::value::Value;

/// Compiles a delimited pattern such as `/^\d+$/i`.
fn compile_delimited(pattern: &str) -> Result<Regex, String> {
    let pattern = pattern.trim_start();
    let open = pattern
        .chars()
        .next()
        .ok_or_else(|| "empty pattern".to_owned())?;
    if open.is_alphanumeric() || open == '\\' || open.is_whitespace() {
        return Err("delimiter must not be alphanumeric, backslash or whitespace".to_owned());
    }
    let close = match open {
        '(' => ')',
        '[' => ']',
        '{' => '}',
        '<' => '>',
        other => other,
    };

    let start = open.len_utf8();
    let end = pattern
        .rfind(close)
        .filter(|&end| end >= start)
        .ok_or_else(|| format!("no ending delimiter '{close}' found"))?;

    let mut builder = RegexBuilder::new(&pattern[start..end]);
    for flag in pattern[end + close.len_utf8()..].chars() {
        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'x' => {
                builder.ignore_whitespace(true);
            }
            'u' | '\n' | '\r' | ' ' => {}
            other => return Err(format!("unknown modifier '{other}'")),
        }
    }
    builder.build().map_err(|err| err.to_string())
}

/// Value must match a regular expression.
///
/// Strings and numbers are matched against their text. A pattern that does
/// not compile is not a setup error: every validation then fails with
/// [`ErrorCode::REGEX_INTERNAL_ERROR`].
///
/// ```rust,ignore
/// let hello = RegEx::new("/Hello/");
/// assert!(hello.validate(&Value::from("Hello World")).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct RegEx {
    pattern: String,
    compiled: Result<Regex, String>,
}

impl RegEx {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let compiled = compile_delimited(&pattern);
        if let Err(reason) = &compiled {
            warn!(pattern = %pattern, reason = %reason, "regular expression does not compile");
        }
        Self { pattern, compiled }
    }

    /// Options: `pattern` (required string).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        match required(options, "RegEx", "pattern")? {
            Value::String(pattern) => Ok(Self::new(pattern.clone())),
            other => Err(ConfigError::invalid_option(
                "RegEx",
                "pattern",
                format!("expected a string, {} given", other.kind()),
            )),
        }
    }

    /// The pattern as written, delimiters included.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the pattern compiled.
    pub fn is_compiled(&self) -> bool {
        self.compiled.is_ok()
    }
}

impl Validate for RegEx {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let context = || InputContext::new(value.clone()).with("pattern", self.pattern.as_str());

        let text = match value {
            Value::String(_) | Value::Int(_) | Value::Float(_) => value.to_text(),
            _ => None,
        };
        let Some(text) = text else {
            return Err(ValidationError::new(ErrorCode::INVALID_TYPE_NON_SCALAR, context()));
        };

        match &self.compiled {
            Err(reason) => Err(ValidationError::new(ErrorCode::REGEX_INTERNAL_ERROR, context())
                .with_param("reason", reason.as_str())),
            Ok(regex) if regex.is_match(&text) => Ok(()),
            Ok(_) => Err(ValidationError::new(ErrorCode::NOT_MATCH, context())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::options;

    #[rstest]
    #[case("/Hello/", "Hello World", true)]
    #[case("/Hello/", "", false)]
    #[case("/hello/i", "HELLO", true)]
    #[case("/hello/", "HELLO", false)]
    #[case("#^a.b$#s", "a\nb", true)]
    #[case("/^b$/m", "a\nb", true)]
    #[case("{^\\d+$}", "123", true)]
    #[case("~ a b ~x", "ab", true)]
    #[case("/path\\/to/", "path/to", true)]
    fn delimited_patterns(#[case] pattern: &str, #[case] input: &str, #[case] valid: bool) {
        let regex = RegEx::new(pattern);
        assert!(regex.is_compiled(), "{pattern}");
        assert_eq!(regex.validate(&Value::from(input)).is_ok(), valid, "{pattern} on {input:?}");
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("/unterminated")]
    #[case("/a/q")]
    #[case("/(/")]
    fn broken_patterns(#[case] pattern: &str) {
        let regex = RegEx::new(pattern);
        assert!(!regex.is_compiled());
        let error = regex.validate(&Value::from("x")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::REGEX_INTERNAL_ERROR);
        assert_eq!(error.input_data().get("pattern"), Some(&Value::from(pattern)));
    }

    #[test]
    fn numbers_are_matched_as_text() {
        let digits = RegEx::new("/^\\d+(\\.\\d+)?$/");
        assert!(digits.validate(&Value::Int(42)).is_ok());
        assert!(digits.validate(&Value::Float(4.5)).is_ok());
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Bool(true))]
    #[case(Value::list(["a"]))]
    fn non_scalar_input(#[case] value: Value) {
        let error = RegEx::new("/a/").validate(&value).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_TYPE_NON_SCALAR);
    }

    #[test]
    fn no_match_context() {
        let error = RegEx::new("/Hello/").validate(&Value::from("")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::NOT_MATCH);
        assert_eq!(
            error.input_data(),
            &InputContext::new("").with("pattern", "/Hello/")
        );
    }

    #[test]
    fn pattern_option() {
        assert!(matches!(
            RegEx::from_options(&options! {}),
            Err(ConfigError::MissingOption { option: "pattern", .. })
        ));
        assert!(RegEx::from_options(&options! { "pattern" => 1 }).is_err());
        let regex = RegEx::from_options(&options! { "pattern" => "/x/" }).unwrap();
        assert_eq!(regex.pattern(), "/x/");
    }
}
