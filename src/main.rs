//! problem-solver - Main entry point
//!
//! Loads configuration, initializes logging and runs one command against the
//! saved sheet, or the interactive wizard when no command is given.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use problem_solver::adapters::cli::{Cli, Command};
use problem_solver::config::{AppConfig, LoggingConfig};

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    init_tracing(&config.logging);

    let mut app = commands::App::build(&config).await;
    app.run(cli.command.unwrap_or(Command::Wizard)).await
}

/// Logs go to stderr so report text on stdout stays clean.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
