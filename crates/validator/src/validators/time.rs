//! Date validator.
//!
//! Formats are written with single-letter `date()` codes (`d/m/Y`), the
//! dialect most configuration files use. They are translated to `chrono`
//! strftime items once, at construction.
//!
//! | Letter    | Meaning                       | chrono |
//! |-----------|-------------------------------|--------|
//! | `d`, `j`  | day of month                  | `%d`   |
//! | `m`, `n`  | month number                  | `%m`   |
//! | `M`, `F`  | month name (short, long)      | `%b`, `%B` |
//! | `Y`, `y`  | year (four, two digits)       | `%Y`, `%y` |
//! | `D`, `l`  | weekday name (short, long)    | `%a`, `%A` |
//! | `H`, `G`  | hour, 24h                     | `%H`   |
//! | `h`, `g`  | hour, 12h                     | `%I`   |
//! | `A`, `a`  | AM/PM                         | `%p`   |
//! | `i`       | minutes                       | `%M`   |
//! | `s`       | seconds                       | `%S`   |
//! | `U`       | Unix timestamp                | `%s`   |
//!
//! A backslash makes the next character literal.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::DateTime;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, text};
use crate::value::Value;

const DEFAULT_FORMAT: &str = "d.m.Y";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct ChronoFormat {
    pattern: String,
    has_day: bool,
    has_month: bool,
    has_year: bool,
    has_hour: bool,
}

fn translate(format: &str) -> Result<ChronoFormat, String> {
    let mut out = ChronoFormat::default();
    let mut chars = format.chars();
    while let Some(c) = chars.next() {
        let item = match c {
            '\\' => {
                let Some(literal) = chars.next() else {
                    return Err("format ends with an escape".to_owned());
                };
                push_literal(&mut out.pattern, literal);
                continue;
            }
            'd' | 'j' => {
                out.has_day = true;
                "%d"
            }
            'm' | 'n' => {
                out.has_month = true;
                "%m"
            }
            'M' => {
                out.has_month = true;
                "%b"
            }
            'F' => {
                out.has_month = true;
                "%B"
            }
            'Y' => {
                out.has_year = true;
                "%Y"
            }
            'y' => {
                out.has_year = true;
                "%y"
            }
            'H' | 'G' => {
                out.has_hour = true;
                "%H"
            }
            'h' | 'g' => {
                out.has_hour = true;
                "%I"
            }
            'D' => "%a",
            'l' => "%A",
            'A' | 'a' => "%p",
            'i' => "%M",
            's' => "%S",
            'U' => {
                out.has_day = true;
                out.has_month = true;
                out.has_year = true;
                "%s"
            }
            literal => {
                push_literal(&mut out.pattern, literal);
                continue;
            }
        };
        out.pattern.push_str(item);
    }
    Ok(out)
}

fn push_literal(pattern: &mut String, literal: char) {
    if literal == '%' {
        pattern.push_str("%%");
    } else {
        pattern.push(literal);
    }
}

/// Text of an array entry when arrays are joined into a date string.
fn join_part(value: &Value) -> String {
    match value {
        Value::Bool(true) => "1".to_owned(),
        Value::Array(_) => "Array".to_owned(),
        other => other.to_text().unwrap_or_default(),
    }
}

/// Value must be a date in the configured format.
///
/// - strings are parsed with the format
/// - integers and floats are Unix timestamps
/// - arrays are joined with `-` and parsed as a string
/// - objects are parsed through their string conversion
///
/// ```rust,ignore
/// let date = Date::new("d/m/Y");
/// assert!(date.validate(&Value::from("30/09/1982")).is_ok());
/// assert!(date.validate(&Value::from("99/09/1982")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Date {
    format: String,
    compiled: Result<ChronoFormat, String>,
}

impl Date {
    pub fn new(format: impl Into<String>) -> Self {
        let format = format.into();
        let compiled = translate(&format);
        Self { format, compiled }
    }

    /// Options: `format` (default `d.m.Y`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        let date = Self::new(text(options, "Date", "format", DEFAULT_FORMAT)?);
        if let Err(reason) = &date.compiled {
            return Err(ConfigError::invalid_option("Date", "format", reason.clone()));
        }
        Ok(date)
    }

    /// The format as configured.
    pub fn format(&self) -> &str {
        &self.format
    }

    fn parses(&self, text: &str) -> bool {
        let Ok(format) = &self.compiled else {
            return false;
        };
        let mut parsed = Parsed::new();
        if parse(&mut parsed, text, StrftimeItems::new(&format.pattern)).is_err() {
            return false;
        }
        let date_ok = !(format.has_day && format.has_month && format.has_year)
            || parsed.to_naive_date().is_ok();
        let time_ok = !format.has_hour || parsed.to_naive_time().is_ok();
        date_ok && time_ok
    }

    fn check_text(&self, text: &str, value: &Value) -> Result<(), ValidationError> {
        if self.parses(text) {
            Ok(())
        } else {
            Err(self.failure(ErrorCode::INVALID_DATE_FORMAT, value))
        }
    }

    fn failure(&self, code: ErrorCode, value: &Value) -> ValidationError {
        ValidationError::new(
            code,
            InputContext::new(value.clone()).with("format", self.format.as_str()),
        )
    }
}

impl Default for Date {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl Validate for Date {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        match value {
            Value::String(text) => self.check_text(text, value),
            Value::Int(seconds) => match DateTime::from_timestamp(*seconds, 0) {
                Some(_) => Ok(()),
                None => Err(self.failure(ErrorCode::INVALID_DATE, value)),
            },
            Value::Float(seconds) if seconds.is_finite() => {
                let whole = seconds.floor();
                let nanos = ((seconds - whole) * 1e9) as u32;
                match DateTime::from_timestamp(whole as i64, nanos.min(999_999_999)) {
                    Some(_) => Ok(()),
                    None => Err(self.failure(ErrorCode::INVALID_DATE, value)),
                }
            }
            Value::Float(_) => Err(self.failure(ErrorCode::INVALID_DATE, value)),
            Value::Array(items) => {
                let joined = items.values().map(join_part).collect::<Vec<_>>().join("-");
                self.check_text(&joined, value)
            }
            Value::Object(object) => match object.display() {
                Some(text) => self.check_text(text, value),
                None => Err(self.failure(ErrorCode::INVALID_TYPE_NON_DATE, value)),
            },
            Value::Null | Value::Bool(_) => {
                Err(self.failure(ErrorCode::INVALID_TYPE_NON_DATE, value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::options;
    use crate::value::Object;

    #[rstest]
    #[case("d/m/Y", "30/09/1982", true)]
    #[case("d/m/Y", "99/09/1982", false)]
    #[case("d/m/Y", "31/02/1982", false)]
    #[case("d.m.Y", "01.12.2020", true)]
    #[case("d.m.Y", "01.12.2020 extra", false)]
    #[case("j.n.y", "1.2.20", true)]
    #[case("Y-m-d H:i:s", "2020-02-29 23:59:59", true)]
    #[case("Y-m-d H:i:s", "2020-02-29 24:00:00", false)]
    #[case("H:i", "13:45", true)]
    #[case("d M Y", "05 Mar 2021", true)]
    #[case("\\d\\a\\y d", "day 05", true)]
    fn string_dates(#[case] format: &str, #[case] input: &str, #[case] valid: bool) {
        let result = Date::new(format).validate(&Value::from(input));
        assert_eq!(result.is_ok(), valid, "{format} on {input}");
    }

    #[test]
    fn format_failure_context() {
        let error = Date::new("d/m/Y").validate(&Value::from("99/09/1982")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_DATE_FORMAT);
        assert_eq!(
            error.input_data(),
            &InputContext::new("99/09/1982").with("format", "d/m/Y")
        );
    }

    #[test]
    fn timestamps() {
        let date = Date::default();
        assert!(date.validate(&Value::Int(402_192_000)).is_ok());
        assert!(date.validate(&Value::Float(402_192_000.5)).is_ok());
        let error = date.validate(&Value::Int(i64::MAX)).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_DATE);
        let error = date.validate(&Value::Float(f64::NAN)).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_DATE);
    }

    #[test]
    fn arrays_are_joined_with_dashes() {
        let date = Date::new("Y-m-d");
        assert!(date.validate(&Value::list([2020, 2, 29])).is_ok());
        assert!(date.validate(&Value::list([2021, 2, 29])).is_err());
    }

    #[test]
    fn objects_use_their_string_conversion() {
        let date = Date::new("Y-m-d");
        let stamp = Object::new("DateTime").with_display("2020-01-01");
        assert!(date.validate(&Value::from(stamp)).is_ok());
        let error = date.validate(&Value::from(Object::new("Thing"))).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_TYPE_NON_DATE);
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::Bool(true))]
    fn other_types(#[case] value: Value) {
        let error = Date::default().validate(&value).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_TYPE_NON_DATE);
    }

    #[test]
    fn format_option() {
        assert_eq!(Date::from_options(&options! {}).unwrap().format(), "d.m.Y");
        assert_eq!(
            Date::from_options(&options! { "format" => "d/m/Y" }).unwrap(),
            Date::new("d/m/Y")
        );
        assert!(Date::from_options(&options! { "format" => "Y\\" }).is_err());
        assert!(Date::from_options(&options! { "format" => 5 }).is_err());
    }
}
