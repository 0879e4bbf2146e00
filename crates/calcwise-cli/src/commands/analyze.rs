//! Analyze command implementation

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use calcwise_core::{
    format, AnalysisEngine, AnalysisOptions, AnalysisResponse, AppConfig, Priority,
    UserContext,
};

pub fn cmd_analyze(
    config: &AppConfig,
    calculator_type: &str,
    data: Option<&str>,
    file: Option<&Path>,
    context: Option<&str>,
    json: bool,
) -> Result<()> {
    let payload = read_payload(data, file)?;
    let ctx = parse_context(context)?;
    let response = run_analysis(config, calculator_type, payload, ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render_analysis(&response));
    }

    Ok(())
}

/// Load the calculator payload from `--data` or `--file`
pub fn read_payload(data: Option<&str>, file: Option<&Path>) -> Result<serde_json::Value> {
    match (data, file) {
        (Some(inline), _) => {
            serde_json::from_str(inline).context("--data is not valid JSON")
        }
        (None, Some(path)) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not valid JSON", path.display()))
        }
        (None, None) => bail!("Provide calculator results with --data or --file"),
    }
}

/// Parse `--context` into a user context
pub fn parse_context(context: Option<&str>) -> Result<Option<UserContext>> {
    context
        .map(|raw| serde_json::from_str(raw).context("--context is not a valid user context"))
        .transpose()
}

/// Run one analysis with the configured post-processing
pub fn run_analysis(
    config: &AppConfig,
    calculator_type: &str,
    payload: serde_json::Value,
    ctx: Option<UserContext>,
) -> Result<AnalysisResponse> {
    let engine = AnalysisEngine::with_options(AnalysisOptions::from(&config.analysis));
    engine
        .analyze_value(calculator_type, payload, ctx)
        .with_context(|| format!("Failed to analyze {} results", calculator_type))
}

fn priority_icon(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

/// Human-readable rendering of an analysis
pub fn render_analysis(response: &AnalysisResponse) -> String {
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "📋 {}", response.summary);

    if !response.recommendations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Recommendations:");
        for rec in &response.recommendations {
            let _ = writeln!(
                out,
                "  {} [{}] {}",
                priority_icon(rec.priority),
                rec.kind,
                rec.title
            );
            let _ = writeln!(out, "     {}", rec.description);
            for item in &rec.action_items {
                let _ = writeln!(out, "     • {}", item);
            }
            if let Some(savings) = rec.potential_savings {
                let _ = writeln!(out, "     💰 Potential savings: {}", format::currency(savings));
            }
            if let Some(impact) = &rec.estimated_impact {
                let _ = writeln!(out, "     Impact: {}", impact);
            }
        }
    }

    let sections = [
        ("Key insights", &response.key_insights),
        ("Risk factors", &response.risk_factors),
        ("Next steps", &response.next_steps),
    ];
    for (heading, items) in sections {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", heading);
        for item in items {
            let _ = writeln!(out, "  - {}", item);
        }
    }

    let total = response.total_potential_savings();
    if total > 0.0 {
        let _ = writeln!(out);
        let _ = writeln!(out, "Total potential savings: {}", format::currency(total));
    }

    out
}
