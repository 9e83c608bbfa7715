//! CLI module for shopfront
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP API
//! - setup: One-shot schema bootstrap

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, setup};
pub use errors::{CliError, CliErrorCode, CliResult};
