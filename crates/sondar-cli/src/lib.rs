//! Sondador CLI library
//!
//! Command-line interface for Sondar's page resource checks.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
mod output;
mod runner;

pub use commands::{CheckArgs, Cli, ColorArg, Commands, ExtractArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::ConsoleReporter;
pub use runner::CheckRunner;
