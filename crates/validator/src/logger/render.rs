//! Placeholder substitution.

use std::borrow::Cow;

use tracing::trace;

use crate::foundation::InputContext;
use crate::value::stringify;

/// Renders `template` against `context`.
///
/// 1. A template without `%` is returned unchanged.
/// 2. `%value%` becomes the stringified `value` entry (`NULL` if absent).
/// 3. `%key%` becomes `key` when given, else the stringified `key` entry,
///    else the empty string.
/// 4. Every other context entry `%name%` becomes its stringified value.
///
/// Placeholders with no matching entry are left as they are.
///
/// ```rust,ignore
/// let context = InputContext::new(10).with("max", 9);
/// assert_eq!(
///     build_message("%value% exceeds %max% (%unit%)", &context, None),
///     "(integer) 10 exceeds (integer) 9 (%unit%)",
/// );
/// ```
pub fn build_message<'t>(template: &'t str, context: &InputContext, key: Option<&str>) -> Cow<'t, str> {
    if !template.contains('%') {
        return Cow::Borrowed(template);
    }

    let mut message = replace(template, InputContext::VALUE, &stringify(context.value()));
    let key = match (key, context.key()) {
        (Some(key), _) => Cow::Borrowed(key),
        (None, Some(entry)) => stringify(entry),
        (None, None) => Cow::Borrowed(""),
    };
    message = replace(&message, InputContext::KEY, &key);
    for (name, value) in context.iter() {
        if name == InputContext::VALUE || name == InputContext::KEY {
            continue;
        }
        if !message.contains('%') {
            break;
        }
        message = replace(&message, name, &stringify(value));
    }

    trace!(template, message = %message, "rendered error message");
    Cow::Owned(message)
}

fn replace(text: &str, name: &str, with: &str) -> String {
    text.replace(&format!("%{name}%"), with)
}
