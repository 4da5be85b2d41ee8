//! CLI for the http/https URL handler.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use urlh_core::config;
use urlh_core::logging::LogLevel;
use urlh_core::{validate_http_url, SystemLog};

use commands::run_open;

/// Handler for http/https URLs.
#[derive(Debug, Parser)]
#[command(name = "http-url-handler", version)]
#[command(about = "Handler for http/https URLs", long_about = None)]
pub struct Cli {
    /// More verbose logging.
    #[arg(short, long, overrides_with_all = ["verbose", "debug"])]
    pub verbose: bool,

    /// Enable debugging logs.
    #[arg(short, long, overrides_with_all = ["verbose", "debug"])]
    pub debug: bool,

    /// Read browser rules from this file instead of ~/.config/http-url-handler/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the browser command instead of running it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// URL starting with 'http://' or 'https://'.
    pub url: String,
}

impl Cli {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.verbose, self.debug)
    }

    /// Validate the URL, load browser rules, then open (or print) it.
    ///
    /// Nothing past validation runs for a rejected URL, not even config loading.
    pub fn run(&self, program: &str, syslog: &dyn SystemLog) -> Result<()> {
        let url = validate_http_url(&self.url, program, syslog)?;
        tracing::debug!("log level = {}", self.log_level());
        tracing::debug!("url = '{}'", url);

        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_default()?,
        };

        run_open(program, &cfg.rules(), syslog, &url, self.dry_run)
    }
}

#[cfg(test)]
mod tests;
