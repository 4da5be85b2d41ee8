//! Hostname to browser mapping.
//!
//! Rules are plain data so they can come from the config file. The built-in
//! rules send `askubuntu.com` to Firefox and everything else to Chromium.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BROWSER: &str = "chromium-browser";

/// One special-cased hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRule {
    /// Exact hostname to match (no wildcards, no subdomains).
    pub hostname: String,
    /// Executable to launch, looked up on PATH.
    pub browser: String,
}

impl HostRule {
    pub fn new(hostname: impl Into<String>, browser: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            browser: browser.into(),
        }
    }

    fn matches(&self, hostname: &str) -> bool {
        self.hostname.eq_ignore_ascii_case(hostname)
    }
}

/// Ordered hostname rules plus the fallback browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserRules {
    pub default_browser: String,
    pub hosts: Vec<HostRule>,
}

impl Default for BrowserRules {
    fn default() -> Self {
        Self {
            default_browser: DEFAULT_BROWSER.to_string(),
            hosts: vec![HostRule::new("askubuntu.com", "firefox")],
        }
    }
}

impl BrowserRules {
    /// Browser for `hostname`: the first matching rule, else the default.
    /// No hostname never matches a rule.
    pub fn select(&self, hostname: Option<&str>) -> &str {
        hostname
            .and_then(|host| self.hosts.iter().find(|rule| rule.matches(host)))
            .map(|rule| rule.browser.as_str())
            .unwrap_or(&self.default_browser)
    }
}

/// Hostname of `url`, or `None` if it does not parse or has no host.
///
/// A bad port does not hide the host: `https://askubuntu.com:99999/` still
/// yields `askubuntu.com`. IPv6 literals come back without brackets.
pub fn hostname_of(url: &str) -> Option<String> {
    let parsed = match url::Url::parse(url) {
        Ok(parsed) => parsed,
        Err(url::ParseError::InvalidPort) => url::Url::parse(&without_port(url)?).ok()?,
        Err(_) => return None,
    };
    match parsed.host()? {
        url::Host::Domain(domain) if domain.is_empty() => None,
        url::Host::Domain(domain) => Some(domain.to_string()),
        url::Host::Ipv4(addr) => Some(addr.to_string()),
        url::Host::Ipv6(addr) => Some(addr.to_string()),
    }
}

/// `url` with everything after the host in the authority removed.
fn without_port(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(end);
    let (userinfo, host_port) = match authority.rfind('@') {
        Some(at) => authority.split_at(at + 1),
        None => ("", authority),
    };
    let host = match host_port.find(']') {
        Some(close) if host_port.starts_with('[') => &host_port[..=close],
        _ => host_port.split(':').next().unwrap_or(""),
    };
    Some(format!("{scheme}://{userinfo}{host}{tail}"))
}
