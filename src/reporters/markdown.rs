//! Markdown reporter
//!
//! The downloadable text report: summary, per-category breakdown with shares
//! and the context equivalents, stamped with the report date.

use super::{whole, RenderOptions};
use crate::models::{Category, Estimate};
use anyhow::Result;

/// Render report as Markdown
pub fn render(estimate: &Estimate, opts: &RenderOptions) -> Result<String> {
    let mut md = String::new();

    md.push_str(&render_header(opts));
    md.push('\n');
    md.push_str(&render_summary(estimate));
    md.push('\n');
    md.push_str(&render_breakdown(estimate));
    md.push('\n');
    md.push_str(&render_context(estimate));

    Ok(md)
}

fn render_header(opts: &RenderOptions) -> String {
    format!(
        "# Carbon Footprint Report\nDate: {}\n",
        opts.date.format("%Y-%m-%d")
    )
}

fn render_summary(estimate: &Estimate) -> String {
    let r = &estimate.result;
    format!(
        r#"## Summary
- Daily Total: {:.2} kg CO₂e
- Monthly Estimate: {:.0} kg CO₂e
- Grade: {}
"#,
        r.total_kg, r.monthly_kg, r.grade
    )
}

fn render_breakdown(estimate: &Estimate) -> String {
    let r = &estimate.result;
    let mut md = String::from("## Breakdown\n");
    for category in Category::ALL {
        md.push_str(&format!(
            "- {}: {:.2} kg ({:.1}%)\n",
            category,
            r.category_kg(category),
            r.share_percent(category)
        ));
    }
    md
}

fn render_context(estimate: &Estimate) -> String {
    let r = &estimate.result;
    format!(
        r#"## Context
- {} trees needed
- {} phone charges equivalent
- {:.1} km driving equivalent
"#,
        whole(r.trees_equivalent),
        whole(r.phones_equivalent),
        r.km_equivalent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::aggregate;
    use crate::reporters::tests::{test_estimate, test_options};

    #[test]
    fn test_markdown_summary() {
        let md = render(&test_estimate(), &test_options()).unwrap();
        assert!(md.starts_with("# Carbon Footprint Report\nDate: 2025-03-14\n"));
        assert!(md.contains("- Daily Total: 11.68 kg CO₂e"));
        assert!(md.contains("- Monthly Estimate: 350 kg CO₂e"));
        assert!(md.contains("- Grade: Low"));
    }

    #[test]
    fn test_markdown_breakdown_shares() {
        let md = render(&test_estimate(), &test_options()).unwrap();
        // 6.20748 / 11.68238 = 53.1%
        assert!(md.contains("- Transport: 6.21 kg (53.1%)"));
        assert!(md.contains("- Electricity: 1.47 kg (12.6%)"));
        assert!(md.contains("- Diet: 4.00 kg (34.2%)"));
    }

    #[test]
    fn test_markdown_context_truncates() {
        let md = render(&test_estimate(), &test_options()).unwrap();
        // 11.68238 / 0.057 = 204.95, / 0.008 = 1460.30, / 0.17 = 68.72
        assert!(md.contains("- 204 trees needed"));
        assert!(md.contains("- 1460 phone charges equivalent"));
        assert!(md.contains("- 68.7 km driving equivalent"));
    }

    #[test]
    fn test_markdown_zero_total() {
        let mut est = test_estimate();
        est.result = aggregate(0.0, 0.0, 0.0);
        let md = render(&est, &test_options()).unwrap();
        assert!(md.contains("- Transport: 0.00 kg (0.0%)"));
        assert!(md.contains("- 0 trees needed"));
        assert!(md.contains("- 0.0 km driving equivalent"));
    }
}
