//! Loose ordering and equality between values.
//!
//! Range and membership validators compare user input against configured
//! bounds without requiring both sides to share a variant: `"10"` compares
//! equal to `10`, `true` behaves like `1`, and two non-numeric strings
//! compare lexically.

use std::cmp::Ordering;

use super::Value;

/// A numeric reading of a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn as_f64(self) -> f64 {
        match self {
            Self::Int(number) => number as f64,
            Self::Float(number) => number,
        }
    }

    fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(&right)),
            (left, right) => left.as_f64().partial_cmp(&right.as_f64()),
        }
    }
}

/// Parses a numeric string: optional surrounding whitespace, optional sign,
/// decimal digits with an optional fraction and exponent.
fn parse_numeric(text: &str) -> Option<Number> {
    let text = text.trim();
    let body = text.strip_prefix(['+', '-']).unwrap_or(text);
    let valid = body.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !valid {
        return None;
    }
    if let Ok(number) = text.parse::<i64>() {
        return Some(Number::Int(number));
    }
    text.parse::<f64>().ok().map(Number::Float)
}

impl Value {
    /// Numeric reading of numbers, booleans, null and numeric strings.
    #[must_use]
    pub fn to_number(&self) -> Option<Number> {
        match self {
            Self::Int(number) => Some(Number::Int(*number)),
            Self::Float(number) => Some(Number::Float(*number)),
            Self::Bool(flag) => Some(Number::Int(i64::from(*flag))),
            Self::Null => Some(Number::Int(0)),
            Self::String(text) => parse_numeric(text),
            Self::Array(_) | Self::Object(_) => None,
        }
    }

    /// Whether this is an integer, a float or a numeric string.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::Float(_) => true,
            Self::String(text) => parse_numeric(text).is_some(),
            _ => false,
        }
    }

    /// Orders two values loosely.
    ///
    /// Two non-numeric strings compare lexically; otherwise both sides must
    /// have a numeric reading. Arrays and objects are never comparable.
    #[must_use]
    pub fn loose_cmp(&self, other: &Value) -> Option<Ordering> {
        if let (Self::String(left), Self::String(right)) = (self, other) {
            if parse_numeric(left).is_none() || parse_numeric(right).is_none() {
                return Some(left.cmp(right));
            }
        }
        match (self, other) {
            (Self::String(text), _) | (_, Self::String(text))
                if parse_numeric(text).is_none() =>
            {
                None
            }
            _ => self.to_number()?.compare(other.to_number()?),
        }
    }

    /// Loose equality: arrays compare entry by entry, objects by identity of
    /// their contents, everything else through [`Value::loose_cmp`].
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Self::Array(left), Self::Array(right)) => {
                left.len() == right.len()
                    && left.iter().all(|(key, item)| {
                        right.get(key).is_some_and(|candidate| item.loose_eq(candidate))
                    })
            }
            (Self::Object(left), Self::Object(right)) => left == right,
            (Self::Array(_) | Self::Object(_), _) | (_, Self::Array(_) | Self::Object(_)) => false,
            _ => self.loose_cmp(other) == Some(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Value::Int(10), Value::Int(9), Some(Ordering::Greater))]
    #[case(Value::Float(5.5), Value::Int(10), Some(Ordering::Less))]
    #[case(Value::from("10"), Value::Int(10), Some(Ordering::Equal))]
    #[case(Value::from(" 2.5 "), Value::Float(2.5), Some(Ordering::Equal))]
    #[case(Value::from("apple"), Value::from("banana"), Some(Ordering::Less))]
    #[case(Value::Bool(true), Value::Int(1), Some(Ordering::Equal))]
    #[case(Value::from("abc"), Value::Int(1), None)]
    #[case(Value::list([1]), Value::Int(1), None)]
    fn loose_ordering(#[case] left: Value, #[case] right: Value, #[case] expected: Option<Ordering>) {
        assert_eq!(left.loose_cmp(&right), expected);
    }

    #[test]
    fn numeric_strings() {
        assert!(Value::from("1e3").is_numeric());
        assert!(Value::from("-12").is_numeric());
        assert!(!Value::from("inf").is_numeric());
        assert!(!Value::from("12abc").is_numeric());
        assert!(!Value::from("").is_numeric());
    }

    #[test]
    fn loose_equality() {
        assert!(Value::from("1").loose_eq(&Value::Int(1)));
        assert!(!Value::from("a").loose_eq(&Value::from("b")));
        assert!(Value::list([1, 2]).loose_eq(&Value::list(["1", "2"])));
        assert!(!Value::list([1]).loose_eq(&Value::Int(1)));
    }
}
