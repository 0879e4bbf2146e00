//! Server command implementation

use std::path::PathBuf;

use anyhow::Result;
use calcwise_core::{config::API_KEYS_ENV, AppConfig};

pub async fn cmd_serve(
    mut config: AppConfig,
    host: Option<String>,
    port: Option<u16>,
    no_auth: bool,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    apply_serve_overrides(&mut config, host, port, no_auth, static_dir);

    println!("🚀 Starting Calcwise web server...");
    println!(
        "   Listening: http://{}:{}",
        config.server.host, config.server.port
    );
    if let Some(dir) = &config.server.static_dir {
        println!("   Static files: {}", dir.display());
    }
    if !config.server.allowed_origins.is_empty() {
        println!(
            "   🌐 Allowed origins: {}",
            config.server.allowed_origins.join(", ")
        );
    }

    if config.api_keys.is_empty() {
        println!();
        println!("   ⚠️  Authentication DISABLED - do not expose to network!");
        if !no_auth {
            println!("      Set {} to require bearer API keys", API_KEYS_ENV);
        }
    } else {
        println!(
            "   🔑 API keys: {} configured ({})",
            config.api_keys.len(),
            API_KEYS_ENV
        );
    }
    println!();
    println!("   Press Ctrl+C to stop");

    calcwise_server::serve(&config).await
}

/// Fold command-line flags over the loaded config
pub fn apply_serve_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<u16>,
    no_auth: bool,
    static_dir: Option<PathBuf>,
) {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    if static_dir.is_some() {
        config.server.static_dir = static_dir;
    }
    if no_auth {
        config.api_keys.clear();
    }
}
