//! Browser selection and launch for a validated URL.

use std::fmt;
use std::process::Command;

use crate::browser::{hostname_of, BrowserRules};
use crate::error::LaunchError;
use crate::syslog::SystemLog;
use crate::validate::HttpUrl;

/// The browser chosen for a URL, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub browser: String,
    pub url: HttpUrl,
}

impl LaunchPlan {
    /// `<browser> <url>`, with the URL as a single argument.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.browser);
        cmd.arg(self.url.as_str());
        cmd
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.browser, self.url)
    }
}

/// Picks a browser by hostname and runs it.
pub struct Dispatcher<'a> {
    program: &'a str,
    rules: &'a BrowserRules,
    syslog: &'a dyn SystemLog,
}

impl<'a> Dispatcher<'a> {
    /// `program` prefixes system log records; `syslog` receives launch failures.
    pub fn new(program: &'a str, rules: &'a BrowserRules, syslog: &'a dyn SystemLog) -> Self {
        Self {
            program,
            rules,
            syslog,
        }
    }

    pub fn plan(&self, url: &HttpUrl) -> LaunchPlan {
        let hostname = hostname_of(url.as_str());
        tracing::debug!("hostname = {:?}", hostname);
        let browser = self.rules.select(hostname.as_deref());
        tracing::info!("browser = '{}'", browser);
        LaunchPlan {
            browser: browser.to_string(),
            url: url.clone(),
        }
    }

    /// Runs the plan and blocks until the browser exits.
    ///
    /// Spawn failures and non-zero exits write one system log record each.
    pub fn launch(&self, plan: &LaunchPlan) -> Result<(), LaunchError> {
        let result = match plan.command().status() {
            Ok(status) if status.success() => {
                tracing::debug!("browser '{}' exited with {}", plan.browser, status);
                return Ok(());
            }
            Ok(status) => LaunchError::Exited {
                browser: plan.browser.clone(),
                url: plan.url.to_string(),
                status,
            },
            Err(source) => LaunchError::Spawn {
                browser: plan.browser.clone(),
                url: plan.url.to_string(),
                source,
            },
        };

        self.syslog.error(&format!(
            "{}: could not open URL with browser '{}': {}",
            self.program, plan.browser, plan.url
        ));
        Err(result)
    }

    /// [`plan`](Self::plan) followed by [`launch`](Self::launch).
    pub fn dispatch(&self, url: &HttpUrl) -> Result<(), LaunchError> {
        let plan = self.plan(url);
        self.launch(&plan)
    }
}
