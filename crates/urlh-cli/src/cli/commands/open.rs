//! Open a validated URL in the browser picked for its host.

use anyhow::Result;
use urlh_core::{BrowserRules, Dispatcher, HttpUrl, SystemLog};

/// Launch the browser for `url`, or print `<browser> <url>` when `dry_run` is set.
pub fn run_open(
    program: &str,
    rules: &BrowserRules,
    syslog: &dyn SystemLog,
    url: &HttpUrl,
    dry_run: bool,
) -> Result<()> {
    let dispatcher = Dispatcher::new(program, rules, syslog);
    let plan = dispatcher.plan(url);
    if dry_run {
        println!("{plan}");
        return Ok(());
    }
    dispatcher.launch(&plan)?;
    Ok(())
}
