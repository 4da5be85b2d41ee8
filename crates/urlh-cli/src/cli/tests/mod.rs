//! CLI tests, split by concern.

use super::Cli;
use clap::Parser;


fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}
