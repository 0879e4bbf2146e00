//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use serde_json::json;
use tempfile::NamedTempFile;

use calcwise_core::{AppConfig, Category, RiskTolerance};

use crate::cli::{Cli, Commands};
use crate::commands::{self, truncate};

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_analyze_inline() {
    let cli = Cli::try_parse_from([
        "calcwise",
        "analyze",
        "--type",
        "mortgage",
        "--data",
        r#"{"homePrice": 400000}"#,
        "--json",
    ])
    .unwrap();

    match cli.command {
        Commands::Analyze {
            calculator_type,
            data,
            file,
            context,
            json,
        } => {
            assert_eq!(calculator_type, "mortgage");
            assert_eq!(data.as_deref(), Some(r#"{"homePrice": 400000}"#));
            assert!(file.is_none());
            assert!(context.is_none());
            assert!(json);
        }
        _ => panic!("expected analyze"),
    }
}

#[test]
fn test_parse_analyze_requires_input() {
    let result = Cli::try_parse_from(["calcwise", "analyze", "--type", "bmi"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_analyze_rejects_both_inputs() {
    let result = Cli::try_parse_from([
        "calcwise", "analyze", "-t", "bmi", "--data", "{}", "--file", "bmi.json",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_serve_overrides() {
    let cli = Cli::try_parse_from([
        "calcwise",
        "--verbose",
        "serve",
        "--port",
        "8080",
        "--host",
        "0.0.0.0",
        "--static-dir",
        "ui/dist",
    ])
    .unwrap();

    assert!(cli.verbose);
    match cli.command {
        Commands::Serve {
            port,
            host,
            no_auth,
            static_dir,
        } => {
            assert_eq!(port, Some(8080));
            assert_eq!(host.as_deref(), Some("0.0.0.0"));
            assert!(!no_auth);
            assert_eq!(static_dir, Some(PathBuf::from("ui/dist")));
        }
        _ => panic!("expected serve"),
    }
}

#[test]
fn test_parse_global_config_after_subcommand() {
    let cli = Cli::try_parse_from(["calcwise", "config", "--config", "custom.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn test_parse_calculators_category() {
    let cli = Cli::try_parse_from(["calcwise", "calculators", "--category", "viral"]).unwrap();
    match cli.command {
        Commands::Calculators { category } => assert_eq!(category.as_deref(), Some("viral")),
        _ => panic!("expected calculators"),
    }
}

// ========== Analyze Command Tests ==========

#[test]
fn test_read_payload_inline() {
    let payload = commands::read_payload(Some(r#"{"bmi": 22.5}"#), None).unwrap();
    assert_eq!(payload["bmi"], 22.5);
}

#[test]
fn test_read_payload_from_file() {
    let file = write_temp(r#"{"balance": 5000, "apr": 22.9}"#);
    let payload = commands::read_payload(None, Some(file.path())).unwrap();
    assert_eq!(payload["balance"], 5000);
}

#[test]
fn test_read_payload_invalid_json() {
    let err = commands::read_payload(Some("{not json"), None).unwrap_err();
    assert!(err.to_string().contains("--data"));

    let file = write_temp("balance = 5000");
    let err = commands::read_payload(None, Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("not valid JSON"));
}

#[test]
fn test_read_payload_missing_file() {
    let missing = PathBuf::from("/nonexistent/calcwise/payload.json");
    let err = commands::read_payload(None, Some(&missing)).unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[test]
fn test_parse_context() {
    let ctx = commands::parse_context(Some(r#"{"age": 52, "income": 90000, "riskTolerance": "aggressive"}"#))
        .unwrap()
        .unwrap();
    assert_eq!(ctx.age, Some(52));
    assert_eq!(ctx.risk_tolerance, Some(RiskTolerance::Aggressive));

    assert!(commands::parse_context(None).unwrap().is_none());
    assert!(commands::parse_context(Some("\"retired\"")).is_err());
}

#[test]
fn test_run_analysis_known_calculator() {
    let config = AppConfig::default();
    let response = commands::run_analysis(
        &config,
        "mortgage",
        json!({"homePrice": 400000, "downPayment": 20000, "interestRate": 7, "loanTerm": 30}),
        None,
    )
    .unwrap();

    assert!(response.recommendation("High Loan-to-Value Ratio").is_some());
    assert!(response.recommendations.len() <= config.analysis.max_recommendations);
}

#[test]
fn test_run_analysis_uses_config_cap() {
    let mut config = AppConfig::default();
    config.analysis.max_recommendations = 1;

    let response = commands::run_analysis(
        &config,
        "budget",
        json!({"monthlyIncome": 4000, "housing": 2000, "food": 900, "entertainment": 600, "debtPayments": 800}),
        None,
    )
    .unwrap();

    assert_eq!(response.recommendations.len(), 1);
}

#[test]
fn test_run_analysis_invalid_data() {
    let err = commands::run_analysis(&AppConfig::default(), "mortgage", json!("lots"), None)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to analyze mortgage"));
}

#[test]
fn test_render_analysis() {
    let response = commands::run_analysis(
        &AppConfig::default(),
        "credit-card",
        json!({"balance": 8000, "apr": 29.99, "monthlyPayment": 250, "creditLimit": 10000}),
        None,
    )
    .unwrap();

    let text = commands::render_analysis(&response);
    assert!(text.contains(&response.summary));
    assert!(text.contains("Recommendations:"));
    assert!(text.contains("Extremely High Interest Rate"));
    assert!(text.contains("Next steps:"));
    assert!(text.contains("🔴"));
}

#[test]
fn test_cmd_analyze_json_output() {
    let result = commands::cmd_analyze(
        &AppConfig::default(),
        "tip",
        Some(r#"{"billAmount": 60, "tipPercent": 20}"#),
        None,
        None,
        true,
    );
    assert!(result.is_ok());
}

// ========== Calculators Command Tests ==========

#[test]
fn test_list_calculators_all() {
    let all = commands::list_calculators(None).unwrap();
    assert_eq!(all.len(), calcwise_core::CalculatorType::all().len());
}

#[test]
fn test_list_calculators_by_category() {
    let health = commands::list_calculators(Some("health")).unwrap();
    assert!(!health.is_empty());
    assert!(health.iter().all(|c| c.category == Category::Health));
}

#[test]
fn test_list_calculators_unknown_category() {
    let err = commands::list_calculators(Some("astrology")).unwrap_err();
    assert!(err.to_string().contains("expected one of: financial"));
    assert!(commands::cmd_calculators(Some("astrology")).is_err());
}

// ========== Config Command Tests ==========

#[test]
fn test_load_config_from_file() {
    let file = write_temp(
        r#"
[server]
host = "0.0.0.0"
port = 8088

[analysis]
max_recommendations = 3
"#,
    );

    let config = commands::load_config(Some(file.path())).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8088);
    assert_eq!(config.analysis.max_recommendations, 3);
    assert!(config.analysis.sort_by_priority);
}

#[test]
fn test_load_config_invalid_toml() {
    let file = write_temp("[server\nport = ");
    let err = commands::load_config(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to load config"));
}

#[test]
fn test_config_source() {
    let file = write_temp("[server]\nport = 4000\n");
    assert_eq!(
        commands::config_source(Some(file.path())),
        file.path().display().to_string()
    );
}

#[test]
fn test_cmd_config() {
    let result = commands::cmd_config(&AppConfig::default(), None);
    assert!(result.is_ok());
}

// ========== Serve Override Tests ==========

#[test]
fn test_apply_serve_overrides() {
    let mut config = AppConfig::default();
    config.api_keys = vec!["secret".to_string()];

    commands::apply_serve_overrides(
        &mut config,
        Some("0.0.0.0".to_string()),
        Some(9000),
        true,
        Some(PathBuf::from("ui/dist")),
    );

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.static_dir, Some(PathBuf::from("ui/dist")));
    assert!(config.api_keys.is_empty());
}

#[test]
fn test_apply_serve_overrides_keeps_config() {
    let mut config = AppConfig::default();
    config.server.port = 4321;
    config.api_keys = vec!["secret".to_string()];

    commands::apply_serve_overrides(&mut config, None, None, false, None);

    assert_eq!(config.server.port, 4321);
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.api_keys, vec!["secret"]);
}

// ========== Utility Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("Compound Interest Calculator", 12), "Compound ...");
}
