//! CSV reporter
//!
//! One row per category plus a total, values rounded to 2 decimals.

use crate::models::{Category, Estimate};
use anyhow::{anyhow, Result};

pub const HEADER: [&str; 2] = ["Category", "kg CO2e"];

/// Render the category totals as CSV
pub fn render(estimate: &Estimate) -> Result<String> {
    let result = &estimate.result;
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(HEADER)?;
    for category in Category::ALL {
        wtr.write_record([
            category.label().to_string(),
            format!("{:.2}", result.category_kg(category)),
        ])?;
    }
    wtr.write_record(["Total".to_string(), format!("{:.2}", result.total_kg)])?;

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV: {}", e.error()))?;
    Ok(String::from_utf8(bytes)?)
}
