//! Saku CLI - ML-based monthly spending analysis
//!
//! Usage:
//!   saku analyze --income N --food N ...   Analyze one month
//!   saku models                            Validate the configured models
//!   saku serve --port 3000                 Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    let settings = commands::load_settings(
        cli.config.as_deref(),
        cli.classifier.as_deref(),
        cli.regressor.as_deref(),
    )?;

    match cli.command {
        Commands::Analyze { amounts, json } => {
            let models = commands::load_models(&settings)?;
            commands::cmd_analyze(&models, &settings, &amounts.into(), json)
        }
        Commands::Models => commands::cmd_models(&settings),
        Commands::Serve {
            port,
            host,
            allowed_origins,
        } => commands::cmd_serve(settings, &host, port, allowed_origins).await,
    }
}
