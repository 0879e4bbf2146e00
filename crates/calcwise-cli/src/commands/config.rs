//! Config command implementation

use std::path::Path;

use anyhow::Result;
use calcwise_core::{
    config::{default_config_path, API_KEYS_ENV},
    AppConfig,
};

pub fn cmd_config(config: &AppConfig, explicit: Option<&Path>) -> Result<()> {
    println!();
    println!("⚙️  Calcwise Configuration");
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Source: {}", config_source(explicit));
    if config.api_keys.is_empty() {
        println!("   🔓 API keys: none ({} not set)", API_KEYS_ENV);
    } else {
        println!("   🔑 API keys: {} configured", config.api_keys.len());
    }
    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}

/// Describe which layer the config came from
pub fn config_source(explicit: Option<&Path>) -> String {
    if let Some(path) = explicit.filter(|p| p.exists()) {
        return path.display().to_string();
    }
    match default_config_path().filter(|p| p.exists()) {
        Some(path) => path.display().to_string(),
        None => "built-in defaults".to_string(),
    }
}
