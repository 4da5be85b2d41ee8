pub mod config;
pub mod logging;

pub mod browser;
pub mod dispatch;
pub mod error;
pub mod syslog;
pub mod validate;

pub use browser::{BrowserRules, HostRule};
pub use dispatch::{Dispatcher, LaunchPlan};
pub use error::{LaunchError, ValidationError};
pub use syslog::{MemoryLog, Syslog, SystemLog};
pub use validate::{validate_http_url, HttpUrl};
