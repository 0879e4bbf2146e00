//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analyze` - One-shot analysis of calculator results
//! - `calculators` - Catalog listing
//! - `config` - Effective configuration display
//! - `serve` - Web server command

pub mod analyze;
pub mod calculators;
pub mod config;
pub mod serve;

// Re-export command functions for main.rs
pub use analyze::*;
pub use calculators::*;
pub use config::*;
pub use serve::*;

use std::path::Path;

use anyhow::{Context, Result};
use calcwise_core::AppConfig;

/// Load the layered config, naming the file in any error
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::load(path).with_context(|| match path {
        Some(p) => format!("Failed to load config from {}", p.display()),
        None => "Failed to load config".to_string(),
    })
}

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
