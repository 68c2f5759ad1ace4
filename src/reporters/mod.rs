//! Output reporters for EcoStep estimates
//!
//! Supports multiple output formats:
//! - `text` - Terminal dashboard with colors and a bar chart
//! - `json` - Machine-readable JSON
//! - `markdown` - Dated Markdown report
//! - `csv` - Category totals, one row per category
//! - `html` - Standalone HTML dashboard with charts

mod chart;
mod csv_report;
mod html;
mod json;
mod markdown;
mod text;

pub use chart::{category_color, ChartData, ChartSlice};

use crate::models::{Estimate, Grade};
use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
    Csv,
    Html,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            "html" => Ok(OutputFormat::Html),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown, csv, html",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Html => write!(f, "html"),
        }
    }
}

/// Settings that are not part of the estimate itself
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Date stamp for reports and export file names
    pub date: NaiveDate,
    /// ANSI colors in text output
    pub color: bool,
}

impl RenderOptions {
    pub fn today() -> Self {
        Self {
            date: chrono::Local::now().date_naive(),
            color: true,
        }
    }
}

/// Render an estimate in the named format
pub fn report(estimate: &Estimate, format: &str, opts: &RenderOptions) -> Result<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(estimate, fmt, opts)
}

/// Render an estimate using an OutputFormat enum
pub fn report_with_format(
    estimate: &Estimate,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(estimate, opts),
        OutputFormat::Json => json::render(estimate, opts),
        OutputFormat::Markdown => markdown::render(estimate, opts),
        OutputFormat::Csv => csv_report::render(estimate),
        OutputFormat::Html => html::render(estimate, opts),
    }
}

/// Get the recommended file extension for a format
pub fn file_extension(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Csv => "csv",
        OutputFormat::Html => "html",
    }
}

/// `carbon_report_<date>.<ext>`
pub fn export_file_name(format: OutputFormat, date: NaiveDate) -> String {
    format!(
        "carbon_report_{}.{}",
        date.format("%Y-%m-%d"),
        file_extension(format)
    )
}

/// How a grade is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStyle {
    pub badge: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
    pub feedback: &'static str,
    pub css_class: &'static str,
    pub ansi: &'static str,
}

pub fn grade_style(grade: Grade) -> GradeStyle {
    match grade {
        Grade::Low => GradeStyle {
            badge: "Excellent",
            color: "#10b981",
            icon: "🟢",
            feedback: "🌱 Excellent! Keep it up.",
            css_class: "badge-low",
            ansi: "\x1b[32m", // Green
        },
        Grade::Moderate => GradeStyle {
            badge: "Good",
            color: "#f59e0b",
            icon: "🟡",
            feedback: "⚠️ Good, room to improve.",
            css_class: "badge-moderate",
            ansi: "\x1b[33m", // Yellow
        },
        Grade::High => GradeStyle {
            badge: "Needs Work",
            color: "#ef4444",
            icon: "🔴",
            feedback: "🔥 High impact. Make changes.",
            css_class: "badge-high",
            ansi: "\x1b[31m", // Red
        },
    }
}

/// Context figures the way reports show them: whole trees, whole phone
/// charges (both truncated) and km with one decimal
pub(crate) fn whole(value: f64) -> i64 {
    value.trunc() as i64
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::estimator;
    use crate::models::InputSnapshot;

    /// The default form: Petrol 3 L, AC 2 h, TV 2 h, Laptop 4 h, Lights 3 h, Mixed
    pub(crate) fn test_estimate() -> Estimate {
        estimator::estimate(&InputSnapshot::default()).expect("default snapshot is complete")
    }

    pub(crate) fn test_options() -> RenderOptions {
        RenderOptions {
            date: NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
            color: false,
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("html").unwrap(), OutputFormat::Html);
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_export_file_name() {
        let date = test_options().date;
        assert_eq!(
            export_file_name(OutputFormat::Csv, date),
            "carbon_report_2025-03-14.csv"
        );
        assert_eq!(
            export_file_name(OutputFormat::Markdown, date),
            "carbon_report_2025-03-14.md"
        );
    }

    #[test]
    fn test_grade_styles_differ() {
        assert_eq!(grade_style(Grade::Low).badge, "Excellent");
        assert_eq!(grade_style(Grade::Moderate).badge, "Good");
        assert_eq!(grade_style(Grade::High).badge, "Needs Work");
        assert_eq!(grade_style(Grade::High).color, "#ef4444");
    }

    #[test]
    fn test_every_format_renders() {
        let est = test_estimate();
        for fmt in ["text", "json", "markdown", "csv", "html"] {
            let out = report(&est, fmt, &test_options()).unwrap();
            assert!(!out.is_empty(), "{} output empty", fmt);
        }
    }

    #[test]
    fn test_whole_truncates() {
        assert_eq!(whole(204.95), 204);
        assert_eq!(whole(0.0), 0);
    }
}
