//! Scheme check for the URL argument.
//!
//! Only the literal, case-sensitive prefixes `http://` and `https://` are
//! accepted. Everything else is rejected before any browser is considered.

use std::fmt;

use crate::error::ValidationError;
use crate::syslog::SystemLog;

const ACCEPTED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// A URL argument that passed [`validate_http_url`].
///
/// Holds the argument exactly as given; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUrl(String);

impl HttpUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HttpUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accepts `url` unchanged if it starts with `http://` or `https://`.
///
/// On rejection one error record `"<program>: not an HTTP/HTTPS URL: '<url>'"`
/// is written to `syslog`. Nothing is logged on success.
pub fn validate_http_url(
    url: &str,
    program: &str,
    syslog: &dyn SystemLog,
) -> Result<HttpUrl, ValidationError> {
    if ACCEPTED_PREFIXES.iter().any(|p| url.starts_with(p)) {
        return Ok(HttpUrl(url.to_string()));
    }

    let err = ValidationError {
        url: url.to_string(),
    };
    syslog.error(&format!("{program}: {err}"));
    Err(err)
}
