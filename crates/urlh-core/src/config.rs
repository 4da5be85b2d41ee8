use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::browser::{BrowserRules, HostRule};

const APP_NAME: &str = "http-url-handler";

/// Configuration loaded from `~/.config/http-url-handler/config.toml`.
///
/// ```toml
/// default_browser = "chromium-browser"
///
/// [[hosts]]
/// hostname = "askubuntu.com"
/// browser = "firefox"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandlerConfig {
    /// Browser for every hostname without a rule.
    pub default_browser: String,
    /// Special-cased hostnames, first match wins.
    #[serde(default)]
    pub hosts: Vec<HostRule>,
}

impl Default for HandlerConfig {
    fn default() -> Self {
        let BrowserRules {
            default_browser,
            hosts,
        } = BrowserRules::default();
        Self {
            default_browser,
            hosts,
        }
    }
}

impl HandlerConfig {
    pub fn rules(&self) -> BrowserRules {
        BrowserRules {
            default_browser: self.default_browser.clone(),
            hosts: self.hosts.clone(),
        }
    }

    fn check(&self) -> Result<()> {
        if self.default_browser.trim().is_empty() {
            bail!("default_browser must not be empty");
        }
        for (i, HostRule { hostname, browser }) in self.hosts.iter().enumerate() {
            if hostname.trim().is_empty() {
                bail!("hosts[{i}]: hostname must not be empty");
            }
            if browser.trim().is_empty() {
                bail!("hosts[{i}] ({hostname}): browser must not be empty");
            }
        }
        Ok(())
    }
}

/// Where the config file is looked up, if it exists.
pub fn config_path() -> Result<Option<PathBuf>> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME)?;
    Ok(xdg_dirs.find_config_file("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to built-in rules.
///
/// The file is never created; a URL handler should not write to `$HOME`.
pub fn load_default() -> Result<HandlerConfig> {
    match config_path()? {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("no config file found, using built-in browser rules");
            Ok(HandlerConfig::default())
        }
    }
}

/// Load and check configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<HandlerConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg = parse(&data).with_context(|| format!("invalid config {}", path.display()))?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}

fn parse(data: &str) -> Result<HandlerConfig> {
    let cfg: HandlerConfig = toml::from_str(data)?;
    cfg.check()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = HandlerConfig::default();
        assert_eq!(cfg.default_browser, "chromium-browser");
        assert_eq!(
            cfg.hosts,
            vec![HostRule::new("askubuntu.com", "firefox")]
        );
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HandlerConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed = parse(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_browser = "firefox"

            [[hosts]]
            hostname = "meet.google.com"
            browser = "google-chrome"

            [[hosts]]
            hostname = "askubuntu.com"
            browser = "epiphany"
        "#;
        let cfg = parse(toml).unwrap();
        assert_eq!(cfg.default_browser, "firefox");
        assert_eq!(cfg.hosts.len(), 2);
        assert_eq!(cfg.rules().select(Some("meet.google.com")), "google-chrome");
        assert_eq!(cfg.rules().select(Some("askubuntu.com")), "epiphany");
        assert_eq!(cfg.rules().select(Some("example.com")), "firefox");
    }

    #[test]
    fn config_toml_without_hosts() {
        let cfg = parse(r#"default_browser = "firefox""#).unwrap();
        assert!(cfg.hosts.is_empty());
        assert_eq!(cfg.rules().select(Some("askubuntu.com")), "firefox");
    }

    #[test]
    fn config_toml_rejects_empty_values() {
        assert!(parse(r#"default_browser = " ""#).is_err());

        let empty_host = r#"
            default_browser = "firefox"
            [[hosts]]
            hostname = ""
            browser = "firefox"
        "#;
        assert!(parse(empty_host).is_err());

        let empty_browser = r#"
            default_browser = "firefox"
            [[hosts]]
            hostname = "askubuntu.com"
            browser = ""
        "#;
        let err = parse(empty_browser).unwrap_err();
        assert!(err.to_string().contains("askubuntu.com"));
    }

    #[test]
    fn config_toml_requires_default_browser() {
        assert!(parse("").is_err());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"default_browser = \"w3m\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.default_browser, "w3m");
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }
}
