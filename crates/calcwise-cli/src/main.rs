//! Calcwise CLI - Recommendations for calculator results
//!
//! Usage:
//!   calcwise serve --port 3000                         Start web server
//!   calcwise analyze --type mortgage --data '{...}'    Analyze one result
//!   calcwise calculators --category health             List calculators
//!   calcwise config                                    Show effective config

mod cli;
mod commands;

#[cfg(test)]
mod tests;

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

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => commands::cmd_serve(config, host, port, no_auth, static_dir).await,
        Commands::Analyze {
            calculator_type,
            data,
            file,
            context,
            json,
        } => commands::cmd_analyze(
            &config,
            &calculator_type,
            data.as_deref(),
            file.as_deref(),
            context.as_deref(),
            json,
        ),
        Commands::Calculators { category } => commands::cmd_calculators(category.as_deref()),
        Commands::Config => commands::cmd_config(&config, cli.config.as_deref()),
    }
}
