//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calcwise - Plain-language advice for calculator results
#[derive(Parser)]
#[command(name = "calcwise")]
#[command(about = "Recommendation engine for personal calculators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the per-user override, then built-in defaults)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Disable API key authentication even if CALCWISE_API_KEYS is set
        ///
        /// WARNING: Do not use this flag when exposing the server to a network.
        #[arg(long)]
        no_auth: bool,

        /// Directory containing static files to serve (e.g., ui/dist)
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Analyze calculator results from the command line
    Analyze {
        /// Calculator type (e.g. mortgage, auto-loan, bmi)
        #[arg(short = 't', long = "type")]
        calculator_type: String,

        /// Calculator results as inline JSON
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        data: Option<String>,

        /// Read calculator results from a JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// User context as inline JSON (age, income, riskTolerance, ...)
        #[arg(long)]
        context: Option<String>,

        /// Print the raw JSON response instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List supported calculators
    Calculators {
        /// Only show one category: financial, health, math, utility, viral
        #[arg(long)]
        category: Option<String>,
    },

    /// Show the effective configuration
    Config,
}
