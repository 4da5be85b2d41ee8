//! Error types for URL validation and browser launch.

use std::io;
use std::process::ExitStatus;

/// The argument is not an `http://` or `https://` URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("not an HTTP/HTTPS URL: '{url}'")]
pub struct ValidationError {
    /// The rejected argument, verbatim.
    pub url: String,
}

/// The selected browser could not open the URL.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// The browser executable could not be started (not on PATH, not executable, ...).
    #[error("could not start browser '{browser}' for {url}")]
    Spawn {
        browser: String,
        url: String,
        #[source]
        source: io::Error,
    },
    /// The browser ran but exited unsuccessfully.
    #[error("browser '{browser}' failed to open {url} ({status})")]
    Exited {
        browser: String,
        url: String,
        status: ExitStatus,
    },
}

impl LaunchError {
    /// Name of the browser executable that failed.
    pub fn browser(&self) -> &str {
        match self {
            LaunchError::Spawn { browser, .. } | LaunchError::Exited { browser, .. } => browser,
        }
    }

    /// Exit code reported by the browser, if it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            LaunchError::Spawn { .. } => None,
            LaunchError::Exited { status, .. } => status.code(),
        }
    }
}
