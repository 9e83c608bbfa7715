//! CLI argument definitions using clap
//!
//! Commands:
//! - shopfront serve [--port <port>]
//! - shopfront setup [--schema <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::setup::DEFAULT_SCHEMA_PATH;

/// shopfront - users, orders and applicants JSON API
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Create the database and tables from a SQL script, then exit
    Setup {
        /// Path to the schema script
        #[arg(long, default_value = DEFAULT_SCHEMA_PATH)]
        schema: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_port_override() {
        let cli = Cli::try_parse_from(["shopfront", "serve", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(8080) }));
    }

    #[test]
    fn test_setup_default_schema_path() {
        let cli = Cli::try_parse_from(["shopfront", "setup"]).unwrap();
        match cli.command {
            Command::Setup { schema } => assert_eq!(schema, PathBuf::from(DEFAULT_SCHEMA_PATH)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["shopfront"]).is_err());
    }
}
