//! Diagnostic logging to stderr, leveled by the `-v` / `-d` flags.
//!
//! The subscriber is returned rather than installed so callers can scope it
//! with `tracing::subscriber::with_default`.

use std::fmt;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

/// Verbosity of the stderr log, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    #[default]
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    /// `debug` beats `verbose`; neither means [`LogLevel::Warning`].
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        match (verbose, debug) {
            (_, true) => LogLevel::Debug,
            (true, false) => LogLevel::Info,
            (false, false) => LogLevel::Warning,
        }
    }

    /// Directive for [`EnvFilter`].
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        })
    }
}

/// Plain-text stderr subscriber filtered at `level`.
pub fn stderr_subscriber(level: LogLevel) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level.as_filter()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_from_flags() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Warning);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Debug);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert_eq!(LogLevel::default(), LogLevel::Warning);
    }
}
