//! JSON reporter
//!
//! Outputs the full estimate, the tip and the chart series as pretty-printed
//! JSON. Useful for piping to jq or feeding another front end.

use super::{ChartData, RenderOptions};
use crate::models::Estimate;
use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    date: NaiveDate,
    #[serde(flatten)]
    estimate: &'a Estimate,
    tip: &'static str,
    chart: ChartData,
}

impl<'a> JsonReport<'a> {
    fn new(estimate: &'a Estimate, opts: &RenderOptions) -> Self {
        Self {
            date: opts.date,
            estimate,
            tip: estimate.result.tip(),
            chart: ChartData::from_result(&estimate.result),
        }
    }
}

/// Render report as JSON
pub fn render(estimate: &Estimate, opts: &RenderOptions) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(estimate, opts))?)
}
