//! Runtime type check.

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, required};
use crate::value::Value;

/// The type a [`Type`] validator expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Integer,
    Double,
    Numeric,
    String,
    Boolean,
    Null,
    Array,
    Traversable,
    Object,
    Scalar,
    /// An object's type name, compared without leading `\`.
    Named(String),
}

impl TypeName {
    /// Reads a type name; aliases are case-insensitive.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Self::Integer,
            "double" | "float" => Self::Double,
            "numeric" | "number" => Self::Numeric,
            "string" => Self::String,
            "boolean" | "bool" => Self::Boolean,
            "null" => Self::Null,
            "array" => Self::Array,
            "traversable" | "iterable" => Self::Traversable,
            "object" => Self::Object,
            "scalar" => Self::Scalar,
            _ => Self::Named(name.trim().trim_start_matches('\\').to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Numeric => "numeric",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Traversable => "traversable",
            Self::Object => "object",
            Self::Scalar => "scalar",
            Self::Named(name) => name,
        }
    }

    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Integer, Value::Int(_))
            | (Self::Double, Value::Float(_))
            | (Self::String, Value::String(_))
            | (Self::Boolean, Value::Bool(_))
            | (Self::Null, Value::Null)
            | (Self::Array | Self::Traversable, Value::Array(_))
            | (Self::Object, Value::Object(_)) => true,
            (Self::Numeric, value) => value.is_numeric(),
            (Self::Scalar, value) => value.is_scalar(),
            (Self::Named(name), Value::Object(object)) => {
                object.type_name().trim_start_matches('\\') == name
            }
            _ => false,
        }
    }
}

/// Value must be of the given type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    expected: TypeName,
}

impl Type {
    pub fn new(name: &str) -> Self {
        Self {
            expected: TypeName::parse(name),
        }
    }

    /// Options: `type` (required, non-empty string).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        match required(options, "Type", "type")? {
            Value::String(name) if !name.trim().is_empty() => Ok(Self::new(name)),
            other => Err(ConfigError::invalid_option(
                "Type",
                "type",
                format!("expected a type name, {} given", other.kind()),
            )),
        }
    }

    pub fn expected(&self) -> &TypeName {
        &self.expected
    }
}

impl Validate for Type {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        if self.expected.matches(value) {
            return Ok(());
        }
        Err(ValidationError::new(
            ErrorCode::INVALID_TYPE_GIVEN,
            InputContext::new(value.clone()).with("type", self.expected.as_str()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::options;
    use crate::value::Object;

    #[rstest]
    #[case("int", Value::Int(1), true)]
    #[case("Integer", Value::from("1"), false)]
    #[case("float", Value::Float(1.5), true)]
    #[case("double", Value::Int(1), false)]
    #[case("numeric", Value::from("1e3"), true)]
    #[case("number", Value::from("x"), false)]
    #[case("bool", Value::Bool(false), true)]
    #[case("null", Value::Null, true)]
    #[case("traversable", Value::list([1, 2]), true)]
    #[case("array", Value::from("[]"), false)]
    #[case("scalar", Value::from("text"), true)]
    #[case("scalar", Value::Null, false)]
    #[case("object", Value::from(Object::new("Acme\\Point")), true)]
    #[case("\\Acme\\Point", Value::from(Object::new("Acme\\Point")), true)]
    #[case("Acme\\Line", Value::from(Object::new("Acme\\Point")), false)]
    fn type_matches(#[case] name: &str, #[case] value: Value, #[case] valid: bool) {
        assert_eq!(Type::new(name).validate(&value).is_ok(), valid);
    }

    #[test]
    fn failure_names_the_expected_type() {
        let error = Type::new("int").validate(&Value::from("1")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_TYPE_GIVEN);
        assert_eq!(error.input_data().get("type"), Some(&Value::from("integer")));
    }

    #[test]
    fn type_option_is_required() {
        assert!(matches!(
            Type::from_options(&options! {}),
            Err(ConfigError::MissingOption { option: "type", .. })
        ));
        assert!(matches!(
            Type::from_options(&options! { "type" => 3 }),
            Err(ConfigError::InvalidOption { option: "type", .. })
        ));
        assert_eq!(
            Type::from_options(&options! { "type" => "BOOL" }).unwrap(),
            Type::new("boolean")
        );
    }
}
