//! CLI command handlers.

mod open;

pub use open::run_open;
