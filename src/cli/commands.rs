//! CLI command implementations
//!
//! `serve` runs until a shutdown signal; `setup` applies the schema script
//! once and exits. Both load settings from the environment first.

use std::path::Path;
use std::sync::Arc;

use tracing::{error, info};

use crate::config::Settings;
use crate::http_server::HttpServer;
use crate::observability::{self, Event};
use crate::setup;
use crate::store::MySqlStore;

use super::args::Command;
use super::errors::{CliError, CliErrorCode, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    observability::init();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args.
///
/// A failure is logged here, once, as an `ERROR` event; callers only decide
/// the exit status.
pub fn run_command(cmd: Command) -> CliResult<()> {
    let result = load_settings().and_then(|settings| match cmd {
        Command::Serve { port } => serve(settings, port),
        Command::Setup { schema } => setup(&settings, &schema),
    });

    if let Err(e) = &result {
        error!(event = %fatal_event(e), code = e.code_str(), "{}", e.message());
    }
    result
}

fn fatal_event(e: &CliError) -> Event {
    match e.code() {
        CliErrorCode::SetupFailed => Event::SetupFailed,
        _ => Event::BootFailed,
    }
}

fn load_settings() -> CliResult<Settings> {
    let settings = Settings::load()?;
    info!(
        event = %Event::ConfigLoaded,
        port = settings.port,
        db_host = %settings.db_host,
        "settings loaded"
    );
    Ok(settings)
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

/// Start the HTTP server
///
/// 1. Open the pool (exits if the database is unreachable)
/// 2. Bind and serve until Ctrl-C / SIGTERM
/// 3. Close the pool
pub fn serve(mut settings: Settings, port: Option<u16>) -> CliResult<()> {
    if let Some(port) = port {
        settings.port = port;
    }

    runtime()?.block_on(async move {
        info!(event = %Event::BootStart, "starting shopfront");

        let store = MySqlStore::connect(&settings).await?;
        info!(event = %Event::PoolReady, "successfully connected to MySQL");

        let server = HttpServer::new(settings, Arc::new(store.clone()));
        let served = server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)));

        store.close().await;
        info!(event = %Event::ShutdownComplete, "server stopped");

        served
    })
}

/// Apply the schema script and exit
pub fn setup(settings: &Settings, schema: &Path) -> CliResult<()> {
    runtime()?.block_on(setup::run(settings, schema))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_event_names_failed_command() {
        assert_eq!(
            fatal_event(&CliError::setup_failed("failed to connect")),
            Event::SetupFailed
        );
        assert_eq!(
            fatal_event(&CliError::boot_failed("address in use")),
            Event::BootFailed
        );
        assert_eq!(
            fatal_event(&CliError::config_error("invalid environment")),
            Event::BootFailed
        );
    }
}
