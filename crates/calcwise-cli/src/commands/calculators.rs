//! Calculator catalog command

use anyhow::{anyhow, Result};
use calcwise_core::{CalculatorInfo, CalculatorType, Category};

use super::truncate;

pub fn cmd_calculators(category: Option<&str>) -> Result<()> {
    let calculators = list_calculators(category)?;

    if calculators.is_empty() {
        println!("No calculators found.");
        return Ok(());
    }

    println!();
    println!("🧮 Calculators ({})", calculators.len());
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   {:<22} {:<32} {}", "ID", "NAME", "CATEGORY");
    for info in &calculators {
        println!(
            "   {:<22} {:<32} {}",
            info.id.as_str(),
            truncate(info.name, 32),
            info.category.as_str()
        );
    }

    Ok(())
}

/// Catalog entries, optionally limited to one category
pub fn list_calculators(category: Option<&str>) -> Result<Vec<CalculatorInfo>> {
    let filter = category
        .map(|c| c.parse::<Category>().map_err(|e| anyhow!(e)))
        .transpose()?;

    Ok(CalculatorType::all()
        .iter()
        .filter(|c| filter.map_or(true, |cat| c.category() == cat))
        .map(|c| c.info())
        .collect())
}
