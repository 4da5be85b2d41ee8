use clap::{CommandFactory, Parser};
use urlh_core::{logging, Syslog, ValidationError};

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    let program = std::env::args()
        .next()
        .unwrap_or_else(|| "http-url-handler".to_string());
    let syslog = Syslog::open(&program);

    // Logging is scoped to this run instead of installed process-wide.
    let subscriber = logging::stderr_subscriber(cli.log_level());
    let result = tracing::subscriber::with_default(subscriber, || cli.run(&program, &syslog));

    if let Err(err) = result {
        if let Some(invalid) = err.downcast_ref::<ValidationError>() {
            Cli::command()
                .error(clap::error::ErrorKind::ValueValidation, invalid)
                .exit();
        }
        eprintln!("{program}: {err:#}");
        std::process::exit(1);
    }
}
