//! Helper macros.

/// Builds an [`Options`](crate::foundation::Options) map.
///
/// ```rust,ignore
/// use verdict_validator::options;
///
/// let options = options! { "min" => 8, "inclusive" => true };
/// assert_eq!(options.len(), 2);
/// ```
#[macro_export]
macro_rules! options {
    () => {
        $crate::foundation::Options::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut options = $crate::foundation::Options::new();
        $(
            options.insert(::std::string::String::from($name), $crate::value::Value::from($value));
        )+
        options
    }};
}

/// Lets built-in validators be passed wherever a
/// [`ValidatorSpec`](crate::foundation::ValidatorSpec) is expected.
macro_rules! impl_into_spec {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for $crate::foundation::ValidatorSpec {
                fn from(validator: $ty) -> Self {
                    Self::instance(validator)
                }
            }
        )+
    };
}

pub(crate) use impl_into_spec;
