//! Text renderings of values used in error messages.

use std::borrow::Cow;

use super::{Key, Value};

/// Converts a value to the text substituted into message placeholders.
///
/// | value                          | text                         |
/// |--------------------------------|------------------------------|
/// | string                         | unchanged                    |
/// | null                           | `NULL`                       |
/// | `true` / `false`               | `(boolean) TRUE` / `(boolean) FALSE` |
/// | integer `10`                   | `(integer) 10`               |
/// | float `5.5` / `10.0`           | `(double) 5.5` / `(double) 10` |
/// | object with string conversion  | the conversion               |
/// | object without one             | `(object) TypeName`          |
/// | array                          | [`var_export`] dump          |
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        Value::Null => Cow::Borrowed("NULL"),
        Value::Bool(true) => Cow::Borrowed("(boolean) TRUE"),
        Value::Bool(false) => Cow::Borrowed("(boolean) FALSE"),
        Value::Int(number) => Cow::Owned(format!("(integer) {number}")),
        Value::Float(number) => Cow::Owned(format!("(double) {}", format_float(*number))),
        Value::Object(object) => match object.display() {
            Some(display) => Cow::Borrowed(display),
            None => Cow::Owned(format!("(object) {}", object.type_name())),
        },
        Value::Array(_) => Cow::Owned(var_export(value)),
    }
}

/// Dumps a value as a parseable literal.
///
/// ```text
/// array (
///   0 => 'an',
///   'nested' =>
///   array (
///     0 => 1.0,
///   ),
/// )
/// ```
///
/// Strings are single-quoted with `\` and `'` escaped; floats always carry a
/// fractional part; nested arrays start on their own line.
pub fn var_export(value: &Value) -> String {
    let mut out = String::new();
    write_export(&mut out, value, 0);
    out
}

fn write_export(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(flag) => out.push_str(if *flag { "true" } else { "false" }),
        Value::Int(number) => out.push_str(&number.to_string()),
        Value::Float(number) => out.push_str(&export_float(*number)),
        Value::String(text) => write_quoted(out, text),
        Value::Object(object) => {
            out.push('\\');
            out.push_str(object.type_name());
            out.push_str("::__set_state(array(\n");
            indent(out, depth);
            out.push_str("))");
        }
        Value::Array(items) => {
            out.push_str("array (\n");
            for (key, item) in items {
                indent(out, depth + 1);
                match key {
                    Key::Index(index) => out.push_str(&index.to_string()),
                    Key::Name(name) => write_quoted(out, name),
                }
                out.push_str(" => ");
                if matches!(item, Value::Array(_) | Value::Object(_)) {
                    out.push('\n');
                    indent(out, depth + 1);
                }
                write_export(out, item, depth + 1);
                out.push_str(",\n");
            }
            indent(out, depth);
            out.push(')');
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}

fn write_quoted(out: &mut String, text: &str) {
    out.push('\'');
    for ch in text.chars() {
        if matches!(ch, '\\' | '\'') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
}

/// Shortest float text: `5.5`, `10`, `NAN`, `INF`, `-INF`.
pub(crate) fn format_float(number: f64) -> String {
    if number.is_nan() {
        "NAN".to_owned()
    } else if number.is_infinite() {
        (if number > 0.0 { "INF" } else { "-INF" }).to_owned()
    } else {
        format!("{number}")
    }
}

fn export_float(number: f64) -> String {
    let text = format_float(number);
    if number.is_finite() && !text.contains(['.', 'e', 'E']) {
        text + ".0"
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::value::Object;

    #[test]
    fn stringify_scalars() {
        assert_eq!(stringify(&Value::Null), "NULL");
        assert_eq!(stringify(&Value::Bool(true)), "(boolean) TRUE");
        assert_eq!(stringify(&Value::Bool(false)), "(boolean) FALSE");
        assert_eq!(stringify(&Value::Int(10)), "(integer) 10");
        assert_eq!(stringify(&Value::Float(5.5)), "(double) 5.5");
        assert_eq!(stringify(&Value::Float(10.0)), "(double) 10");
        assert_eq!(stringify(&Value::from("plain")), "plain");
    }

    #[test]
    fn stringify_objects() {
        assert_eq!(stringify(&Object::new("Clock").into()), "(object) Clock");
        assert_eq!(
            stringify(&Object::new("Clock").with_display("12:00").into()),
            "12:00"
        );
    }

    #[test]
    fn export_list() {
        let list = Value::list(["an", "array"]);
        assert_eq!(
            var_export(&list),
            "array (\n  0 => 'an',\n  1 => 'array',\n)"
        );
        assert_eq!(stringify(&list), var_export(&list));
    }

    #[test]
    fn export_nested_record() {
        let record = Value::record([
            ("name", Value::from("O'Brien")),
            ("scores", Value::list([1.0, 2.5])),
            ("active", Value::Bool(true)),
            ("note", Value::Null),
        ]);
        assert_eq!(
            var_export(&record),
            "array (\n  'name' => 'O\\'Brien',\n  'scores' => \n  array (\n    0 => 1.0,\n    1 => 2.5,\n  ),\n  'active' => true,\n  'note' => NULL,\n)"
        );
    }

    #[test]
    fn export_empty_array() {
        assert_eq!(var_export(&Value::empty_array()), "array (\n)");
    }
}
