//! HTML reporter with embedded styles and charts
//!
//! Generates a standalone dashboard page that can be viewed in any browser.
//! Includes:
//! - Daily total with the grade badge and feedback
//! - Category proportions (SVG pie) and magnitudes (bars)
//! - Context cards (trees, phone charges, km driven)
//! - The tip for the largest category

use super::{grade_style, whole, ChartData, ChartSlice, RenderOptions};
use crate::factors;
use crate::models::{Appliance, Estimate};
use anyhow::Result;

const PIE_RADIUS: f64 = 90.0;
const PIE_CENTER: f64 = 100.0;

/// Render report as standalone HTML
pub fn render(estimate: &Estimate, opts: &RenderOptions) -> Result<String> {
    let mut html = String::new();

    html.push_str(&render_head(estimate));
    html.push_str("<body>\n<div class=\"container\">\n");
    html.push_str(&render_header(opts));
    html.push_str("<div class=\"content\">\n");

    html.push_str(&render_grade_section(estimate));
    html.push_str(&render_inputs(estimate));

    let chart = ChartData::from_result(&estimate.result);
    if estimate.result.total_kg > 0.0 && !chart.is_empty() {
        html.push_str(&render_charts(&chart));
        html.push_str(&render_insights(estimate));
    } else {
        html.push_str(
            "<div class=\"section empty\"><p>Nothing to chart for a zero footprint.</p></div>\n",
        );
    }

    html.push_str(&render_tip(estimate));
    html.push_str("</div>\n"); // content

    html.push_str(&render_footer());
    html.push_str("</div>\n</body>\n</html>\n");

    Ok(html)
}

fn render_head(estimate: &Estimate) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>EcoStep - {:.2} kg CO₂e</title>
    <style>
{CSS}
    </style>
</head>
"#,
        estimate.result.total_kg
    )
}

fn render_header(opts: &RenderOptions) -> String {
    format!(
        r#"<div class="header">
    <h1>🌿 EcoStep Daily Footprint</h1>
    <p class="timestamp">{}</p>
</div>
"#,
        opts.date.format("%Y-%m-%d")
    )
}

fn render_grade_section(estimate: &Estimate) -> String {
    let r = &estimate.result;
    let style = grade_style(r.grade);
    format!(
        r#"<div class="grade-section">
    <div class="total">{:.2} <span class="unit">kg CO₂e / day</span></div>
    <div class="grade-badge {}" style="background: {}">{} {}</div>
    <p class="feedback">{}</p>
    <div class="metrics-grid">
        <div class="metric-card"><h3>Monthly</h3><div class="metric-value">{:.0} kg</div></div>
        <div class="metric-card"><h3>Electricity</h3><div class="metric-value">{:.2} kWh</div></div>
        <div class="metric-card"><h3>Impact</h3><div class="metric-value">{}</div></div>
    </div>
</div>
"#,
        r.total_kg,
        style.css_class,
        style.color,
        style.icon,
        style.badge,
        html_escape(style.feedback),
        r.monthly_kg,
        estimate.electricity_kwh,
        r.grade
    )
}

fn render_inputs(estimate: &Estimate) -> String {
    let input = &estimate.input;
    let mut rows = format!(
        "        <tr><td>Fuel</td><td>{} ({:.1} L)</td></tr>\n",
        html_escape(input.fuel_kind.label()),
        input.fuel_litres
    );
    for appliance in Appliance::ALL {
        if let Some(hours) = input.appliance_usage.get(appliance) {
            rows.push_str(&format!(
                "        <tr><td>{}</td><td>{:.1} h</td></tr>\n",
                html_escape(appliance.label()),
                hours
            ));
        }
    }
    let diet = input.diet.map(|d| d.label()).unwrap_or("Unrecognised");
    rows.push_str(&format!(
        "        <tr><td>Diet</td><td>{}</td></tr>\n",
        html_escape(diet)
    ));

    format!(
        r#"<div class="section">
    <h2 class="section-title">Inputs</h2>
    <table class="inputs">
{}    </table>
</div>
"#,
        rows
    )
}

fn render_charts(chart: &ChartData) -> String {
    let mut wedges = String::new();
    let mut legend = String::new();
    let mut bars = String::new();

    for slice in &chart.slices {
        if slice.value > 0.0 {
            wedges.push_str(&pie_wedge(slice));
        }
        legend.push_str(&format!(
            "            <li><span class=\"swatch\" style=\"background: {}\"></span>{} {:.1}%</li>\n",
            slice.color, slice.category, slice.percent
        ));
        let width = if chart.max_value > 0.0 {
            slice.value / chart.max_value * 100.0
        } else {
            0.0
        };
        bars.push_str(&format!(
            r#"        <div class="bar-row">
            <span class="bar-label">{}</span>
            <div class="bar"><div class="bar-fill" style="width: {:.1}%; background: {}"></div></div>
            <span class="bar-value">{:.2} kg</span>
        </div>
"#,
            slice.category, width, slice.color, slice.value
        ));
    }

    format!(
        r#"<div class="section charts">
    <div class="chart">
        <h2 class="section-title">Breakdown</h2>
        <svg viewBox="0 0 200 200" width="200" height="200" role="img">
{}        </svg>
        <ul class="legend">
{}        </ul>
    </div>
    <div class="chart">
        <h2 class="section-title">Impact by Category</h2>
{}    </div>
</div>
"#,
        wedges, legend, bars
    )
}

/// One pie wedge as SVG. A slice covering the whole circle cannot be drawn
/// as an arc, so it becomes a plain circle.
fn pie_wedge(slice: &ChartSlice) -> String {
    let sweep = slice.end_deg - slice.start_deg;
    if sweep >= 359.999 {
        return format!(
            "            <circle cx=\"{c}\" cy=\"{c}\" r=\"{r}\" fill=\"{}\"/>\n",
            slice.color,
            c = PIE_CENTER,
            r = PIE_RADIUS
        );
    }
    let (x1, y1) = polar(slice.start_deg);
    let (x2, y2) = polar(slice.end_deg);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "            <path d=\"M {c} {c} L {:.3} {:.3} A {r} {r} 0 {} 1 {:.3} {:.3} Z\" fill=\"{}\"/>\n",
        x1,
        y1,
        large_arc,
        x2,
        y2,
        slice.color,
        c = PIE_CENTER,
        r = PIE_RADIUS
    )
}

/// Point on the pie rim, degrees clockwise from 12 o'clock
fn polar(deg: f64) -> (f64, f64) {
    let rad = deg.to_radians();
    (
        PIE_CENTER + PIE_RADIUS * rad.sin(),
        PIE_CENTER - PIE_RADIUS * rad.cos(),
    )
}

fn render_insights(estimate: &Estimate) -> String {
    let r = &estimate.result;
    format!(
        r#"<div class="section">
    <h2 class="section-title">In Context</h2>
    <div class="metrics-grid">
        <div class="metric-card insight"><h3>🌳 Trees</h3><div class="metric-value">{}</div><p>trees absorbing for a day ({} kg each)</p></div>
        <div class="metric-card insight"><h3>📱 Phone charges</h3><div class="metric-value">{}</div><p>full smartphone charges</p></div>
        <div class="metric-card insight"><h3>🚗 Driving</h3><div class="metric-value">{:.1} km</div><p>in an average petrol car</p></div>
    </div>
</div>
"#,
        whole(r.trees_equivalent),
        factors::TREE_DAILY_ABSORPTION_KG,
        whole(r.phones_equivalent),
        r.km_equivalent
    )
}

fn render_tip(estimate: &Estimate) -> String {
    format!(
        r#"<div class="section tip">
    <h2 class="section-title">💡 Tip: {}</h2>
    <p>{}</p>
</div>
"#,
        estimate.result.dominant_category,
        html_escape(estimate.result.tip())
    )
}

fn render_footer() -> String {
    let mut sources = String::new();
    for source in factors::SOURCES {
        sources.push_str(&format!("        <li>{}</li>\n", html_escape(source)));
    }
    format!(
        r#"<div class="footer">
    <p>Generated by EcoStep. Factors from:</p>
    <ul>
{}    </ul>
</div>
"#,
        sources
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// Embedded CSS
const CSS: &str = r#"
:root {
    --primary-color: #24753E;
    --background-color: #f0fdf4;
    --text-color: #1e293b;
    --card-background: white;
    --border-color: #e2e8f0;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    line-height: 1.6;
    color: var(--text-color);
    background: var(--background-color);
    padding: 2rem;
}

.container {
    max-width: 960px;
    margin: 0 auto;
    background: var(--card-background);
    border-radius: 12px;
    box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);
    overflow: hidden;
}

.header {
    background: linear-gradient(135deg, #24753E 0%, #10b981 100%);
    color: white;
    padding: 2.5rem 2rem;
    text-align: center;
}

.header h1 { font-size: 2.25rem; margin-bottom: 0.5rem; }
.header .timestamp { opacity: 0.9; font-size: 0.95rem; }

.content { padding: 2rem; }

.grade-section {
    text-align: center;
    padding: 2rem;
    background: #f1f5f9;
    border-radius: 8px;
    margin-bottom: 2rem;
}

.total { font-size: 3rem; font-weight: 700; }
.total .unit { font-size: 1rem; font-weight: 400; color: #64748b; }

.grade-badge {
    display: inline-block;
    padding: 0.35rem 1rem;
    border-radius: 999px;
    color: white;
    font-weight: 600;
    margin: 0.5rem 0;
}

.feedback { color: #475569; margin-bottom: 1rem; }

.section { margin-bottom: 2rem; }
.section-title { font-size: 1.25rem; margin-bottom: 1rem; }

.metrics-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 1rem;
}

.metric-card {
    padding: 1rem;
    border: 1px solid var(--border-color);
    border-radius: 8px;
    background: white;
}

.metric-card h3 { font-size: 0.9rem; color: #64748b; }
.metric-value { font-size: 1.75rem; font-weight: 700; }
.insight p { font-size: 0.85rem; color: #64748b; }

table.inputs { border-collapse: collapse; width: 100%; }
table.inputs td { padding: 0.4rem 0.75rem; border-bottom: 1px solid var(--border-color); }

.charts { display: flex; flex-wrap: wrap; gap: 2rem; }
.chart { flex: 1; min-width: 260px; }

.legend { list-style: none; margin-top: 0.5rem; }
.swatch {
    display: inline-block;
    width: 0.8rem;
    height: 0.8rem;
    border-radius: 2px;
    margin-right: 0.5rem;
}

.bar-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.75rem; }
.bar-label { width: 6rem; }
.bar { flex: 1; height: 1rem; background: #e2e8f0; border-radius: 4px; overflow: hidden; }
.bar-fill { height: 100%; }
.bar-value { width: 5rem; text-align: right; font-variant-numeric: tabular-nums; }

.tip {
    padding: 1rem;
    background: #ecfdf5;
    border-left: 4px solid #10b981;
    border-radius: 4px;
}

.empty { color: #64748b; text-align: center; }

.footer {
    padding: 1.5rem 2rem;
    color: #64748b;
    font-size: 0.85rem;
    border-top: 1px solid var(--border-color);
}

.footer ul { margin-left: 1.25rem; }

@media (max-width: 768px) {
    body { padding: 1rem; }
    .header h1 { font-size: 1.75rem; }
    .total { font-size: 2.25rem; }
}

@media print {
    body { padding: 0; background: white; }
    .container { box-shadow: none; }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::aggregate;
    use crate::reporters::tests::{test_estimate, test_options};

    #[test]
    fn test_html_render_structure() {
        let html = render(&test_estimate(), &test_options()).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("2025-03-14"));
        assert!(html.contains("11.68"));
        assert!(html.contains("Excellent"));
        assert!(html.contains("#10b981"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_html_pie_has_a_wedge_per_category() {
        let html = render(&test_estimate(), &test_options()).unwrap();
        assert_eq!(html.matches("<path d=").count(), 3);
        assert!(html.contains("#24753E"));
        assert!(html.contains("204"));
    }

    #[test]
    fn test_html_single_category_is_full_circle() {
        let mut est = test_estimate();
        est.result = aggregate(0.0, 0.0, 4.0);
        let html = render(&est, &test_options()).unwrap();
        assert!(html.contains("<circle"));
        assert_eq!(html.matches("<path d=").count(), 0);
    }

    #[test]
    fn test_html_zero_total_skips_charts() {
        let mut est = test_estimate();
        est.result = aggregate(0.0, 0.0, 0.0);
        let html = render(&est, &test_options()).unwrap();
        assert!(!html.contains("<svg"));
        assert!(!html.contains("In Context"));
        assert!(html.contains("Tip:"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>&'\""), "&lt;b&gt;&amp;&#39;&quot;");
    }

    #[test]
    fn test_polar_quarter_turns() {
        let (x, y) = polar(90.0);
        assert!((x - (PIE_CENTER + PIE_RADIUS)).abs() < 1e-9);
        assert!((y - PIE_CENTER).abs() < 1e-9);
    }
}
