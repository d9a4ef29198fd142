//! String content validators: [`Email`] and [`Url`].

use std::net::ToSocketAddrs;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::foundation::{ErrorCode, InputContext, Options, Validate, ValidationError, flag};
use crate::value::Value;

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
    .ok()
});

/// Whether `host` resolves to at least one address.
fn resolves(host: &str, port: u16) -> bool {
    let resolved = (host.trim_matches(['[', ']']), port)
        .to_socket_addrs()
        .is_ok_and(|mut addrs| addrs.next().is_some());
    debug!(host, resolved, "dns lookup");
    resolved
}

/// The text of strings and of objects with a string conversion.
fn string_input(value: &Value) -> Option<&str> {
    match value {
        Value::String(text) => Some(text),
        Value::Object(object) => object.display(),
        _ => None,
    }
}

// ============================================================================
// EMAIL
// ============================================================================

/// Value must be an email address.
///
/// With `check_dns`, the domain must also resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Email {
    check_dns: bool,
}

impl Email {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the domain to resolve.
    #[must_use = "builder methods must be chained or built"]
    pub fn check_dns(mut self) -> Self {
        self.check_dns = true;
        self
    }

    /// Options: `check_dns` (default `false`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        Ok(Self {
            check_dns: flag(options, "Email", "check_dns", false)?,
        })
    }
}

impl Validate for Email {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let fail = |code: ErrorCode| {
            Err(ValidationError::new(
                code,
                InputContext::new(value.clone()).with("check_dns", self.check_dns),
            ))
        };

        let Some(text) = string_input(value) else {
            return fail(ErrorCode::INVALID_TYPE_NON_STRING);
        };
        if text.is_empty() {
            return fail(ErrorCode::IS_EMPTY);
        }
        let well_formed = text.len() <= 254
            && EMAIL_REGEX.as_ref().is_some_and(|regex| regex.is_match(text));
        if !well_formed {
            return fail(ErrorCode::NOT_EMAIL);
        }
        if self.check_dns {
            let domain = text.rsplit_once('@').map_or("", |(_, domain)| domain);
            if !resolves(domain, 25) {
                return fail(ErrorCode::INVALID_DNS);
            }
        }
        Ok(())
    }
}

// ============================================================================
// URL
// ============================================================================

/// Value must be an absolute URL with an allowed scheme and a host.
///
/// Allowed schemes default to `http` and `https`. With `check_dns`, the host
/// must also resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Url {
    allowed_protocols: Vec<String>,
    check_dns: bool,
}

impl Url {
    pub fn new() -> Self {
        Self {
            allowed_protocols: vec!["http".to_owned(), "https".to_owned()],
            check_dns: false,
        }
    }

    /// Replaces the allowed schemes. An empty list keeps the defaults.
    #[must_use = "builder methods must be chained or built"]
    pub fn allowed_protocols<I, S>(mut self, protocols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let protocols: Vec<String> = protocols
            .into_iter()
            .map(|protocol| protocol.into().to_ascii_lowercase())
            .filter(|protocol| !protocol.is_empty())
            .collect();
        if !protocols.is_empty() {
            self.allowed_protocols = protocols;
        }
        self
    }

    /// Requires the host to resolve.
    #[must_use = "builder methods must be chained or built"]
    pub fn check_dns(mut self) -> Self {
        self.check_dns = true;
        self
    }

    /// Options: `allowed_protocols` (list of strings, default
    /// `[http, https]`), `check_dns` (default `false`).
    pub fn from_options(options: &Options) -> ConfigResult<Self> {
        let mut url = Self::new();
        match options.get("allowed_protocols") {
            None | Some(Value::Null) => {}
            Some(Value::Array(items)) => {
                url = url.allowed_protocols(items.values().filter_map(Value::as_str));
            }
            Some(other) => {
                return Err(ConfigError::invalid_option(
                    "Url",
                    "allowed_protocols",
                    format!("expected a list of schemes, {} given", other.kind()),
                ));
            }
        }
        url.check_dns = flag(options, "Url", "check_dns", false)?;
        Ok(url)
    }

    pub fn protocols(&self) -> &[String] {
        &self.allowed_protocols
    }
}

impl Default for Url {
    fn default() -> Self {
        Self::new()
    }
}

impl Validate for Url {
    fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        let fail = |code: ErrorCode| {
            Err(ValidationError::new(
                code,
                InputContext::new(value.clone())
                    .with("allowed_protocols", Value::list(self.allowed_protocols.iter()))
                    .with("check_dns", self.check_dns),
            ))
        };

        let Some(text) = string_input(value) else {
            return fail(ErrorCode::INVALID_TYPE_NON_STRING);
        };
        if text.is_empty() {
            return fail(ErrorCode::IS_EMPTY);
        }
        if text.contains(char::is_whitespace) {
            return fail(ErrorCode::NOT_URL);
        }
        let Ok(parsed) = url::Url::parse(text) else {
            return fail(ErrorCode::NOT_URL);
        };
        let scheme_allowed = self
            .allowed_protocols
            .iter()
            .any(|protocol| protocol == parsed.scheme());
        let Some(host) = parsed.host_str().filter(|host| !host.is_empty()) else {
            return fail(ErrorCode::NOT_URL);
        };
        if !scheme_allowed {
            return fail(ErrorCode::NOT_URL);
        }
        if self.check_dns && !resolves(host, parsed.port_or_known_default().unwrap_or(80)) {
            return fail(ErrorCode::INVALID_DNS);
        }
        Ok(())
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
    #[case("user@example.com", true)]
    #[case("first.last+tag@sub.example.org", true)]
    #[case("invalid", false)]
    #[case("@example.com", false)]
    #[case("user@", false)]
    #[case("user@localhost", false)]
    #[case("us er@example.com", false)]
    fn email_format(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(Email::new().validate(&Value::from(input)).is_ok(), valid, "{input}");
    }

    #[test]
    fn email_codes() {
        let email = Email::new();
        let code = |value: Value| email.validate(&value).unwrap_err().error_code().clone();
        assert_eq!(code(Value::Int(1)), ErrorCode::INVALID_TYPE_NON_STRING);
        assert_eq!(code(Value::from("")), ErrorCode::IS_EMPTY);
        assert_eq!(code(Value::from("nope")), ErrorCode::NOT_EMAIL);
        let address = Object::new("Address").with_display("a@b.example");
        assert!(email.validate(&Value::from(address)).is_ok());
    }

    #[test]
    fn email_dns_for_unresolvable_domain() {
        let error = Email::new()
            .check_dns()
            .validate(&Value::from("someone@does-not-exist.invalid"))
            .unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_DNS);
        assert_eq!(error.input_data().get("check_dns"), Some(&Value::Bool(true)));
    }

    #[rstest]
    #[case("http://example.com", true)]
    #[case("https://example.com/path?q=1#frag", true)]
    #[case("https://user:pw@example.com:8080/", true)]
    #[case("http://127.0.0.1", true)]
    #[case("http://[::1]/", true)]
    #[case("ftp://example.com", false)]
    #[case("example.com", false)]
    #[case("http://", false)]
    #[case("http://exa mple.com", false)]
    #[case("mailto:user@example.com", false)]
    fn url_format(#[case] input: &str, #[case] valid: bool) {
        assert_eq!(Url::new().validate(&Value::from(input)).is_ok(), valid, "{input}");
    }

    #[test]
    fn url_protocols() {
        let ftp = Url::new().allowed_protocols(["FTP"]);
        assert!(ftp.validate(&Value::from("ftp://example.com")).is_ok());
        assert!(ftp.validate(&Value::from("http://example.com")).is_err());
        assert_eq!(Url::new().allowed_protocols(Vec::<String>::new()).protocols(), ["http", "https"]);
    }

    #[test]
    fn url_codes() {
        let url = Url::new();
        assert_eq!(
            url.validate(&Value::Null).unwrap_err().error_code(),
            &ErrorCode::INVALID_TYPE_NON_STRING
        );
        assert_eq!(url.validate(&Value::from("")).unwrap_err().error_code(), &ErrorCode::IS_EMPTY);
        let error = url.check_dns().validate(&Value::from("http://does-not-exist.invalid")).unwrap_err();
        assert_eq!(error.error_code(), &ErrorCode::INVALID_DNS);
    }

    #[test]
    fn url_options() {
        let url = Url::from_options(&options! {
            "allowed_protocols" => Value::list(["git", "ssh"]),
            "check_dns" => "off",
        })
        .unwrap();
        assert_eq!(url.protocols(), ["git", "ssh"]);
        assert!(Url::from_options(&options! { "allowed_protocols" => "http" }).is_err());
        assert_eq!(Email::from_options(&options! { "check_dns" => 1 }).unwrap(), Email::new().check_dns());
    }
}
