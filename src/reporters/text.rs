//! Text (terminal) reporter with colors and a bar chart

use super::{grade_style, whole, ChartData, RenderOptions};
use crate::models::{Appliance, Category, Estimate};
use anyhow::Result;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

const BAR_WIDTH: usize = 30;

/// ANSI codes, or empty strings when color is off
#[derive(Clone, Copy)]
struct Palette {
    reset: &'static str,
    bold: &'static str,
    dim: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                reset: RESET,
                bold: BOLD,
                dim: DIM,
            }
        } else {
            Self {
                reset: "",
                bold: "",
                dim: "",
            }
        }
    }

    fn paint(&self, code: &'static str) -> &'static str {
        if self.reset.is_empty() {
            ""
        } else {
            code
        }
    }
}

/// Category bar colors (ANSI escape codes)
fn category_ansi(category: Category) -> &'static str {
    match category {
        Category::Transport => "\x1b[32m",   // Green
        Category::Electricity => "\x1b[33m", // Yellow
        Category::Diet => "\x1b[92m",        // Light green
    }
}

/// Render the estimate as a terminal dashboard
pub fn render(estimate: &Estimate, opts: &RenderOptions) -> Result<String> {
    let p = Palette::new(opts.color);
    let Palette { reset, bold, dim } = p;
    let r = &estimate.result;
    let style = grade_style(r.grade);
    let grade_c = p.paint(style.ansi);

    let mut out = String::new();

    // Header
    out.push_str(&format!("\n{bold}EcoStep Daily Footprint{reset}\n"));
    out.push_str(&format!(
        "{dim}──────────────────────────────────────{reset}\n"
    ));
    out.push_str(&format!(
        "{} {bold}{:.2} kg CO₂e{reset}  {grade_c}{bold}{}{reset} ({} impact)\n",
        style.icon, r.total_kg, style.badge, r.grade
    ));
    out.push_str(&format!("{}\n\n", style.feedback));

    out.push_str(&format!(
        "  Daily: {:.1} kg   Monthly: {:.0} kg   Electricity: {:.2} kWh\n\n",
        r.total_kg, r.monthly_kg, estimate.electricity_kwh
    ));

    // Inputs
    let input = &estimate.input;
    out.push_str(&format!("{bold}INPUTS{reset}\n"));
    out.push_str(&format!(
        "  Fuel: {} ({:.1} L)\n",
        input.fuel_kind, input.fuel_litres
    ));
    let hours: Vec<String> = Appliance::ALL
        .iter()
        .filter_map(|&a| {
            input
                .appliance_usage
                .get(a)
                .map(|h| format!("{} {:.1}h", a.label(), h))
        })
        .collect();
    out.push_str(&format!("  Appliances: {}\n", hours.join(", ")));
    let diet = input
        .diet
        .map(|d| d.label().to_string())
        .unwrap_or_else(|| "unrecognised (0 kg)".to_string());
    out.push_str(&format!("  Diet: {}\n\n", diet));

    // Breakdown
    let chart = ChartData::from_result(r);
    out.push_str(&format!("{bold}BREAKDOWN{reset}\n"));
    for slice in &chart.slices {
        let bar_c = p.paint(category_ansi(slice.category));
        let bar = "█".repeat(chart.bar_len(slice.value, BAR_WIDTH));
        out.push_str(&format!(
            "  {:<12} {bar_c}{:<width$}{reset} {:>6.2} kg {dim}{:>5.1}%{reset}\n",
            slice.category.label(),
            bar,
            slice.value,
            slice.percent,
            width = BAR_WIDTH
        ));
    }
    out.push('\n');

    // Insights only mean something for a positive total
    if r.total_kg > 0.0 {
        out.push_str(&format!("{bold}CONTEXT{reset}\n"));
        out.push_str(&format!(
            "  🌳 {} trees to absorb it in a day\n",
            whole(r.trees_equivalent)
        ));
        out.push_str(&format!(
            "  📱 {} phone charges\n",
            whole(r.phones_equivalent)
        ));
        out.push_str(&format!("  🚗 {:.1} km of driving\n\n", r.km_equivalent));
    }

    out.push_str(&format!(
        "{bold}TIP{reset} {dim}({} is your largest source){reset}\n",
        r.dominant_category
    ));
    out.push_str(&format!("  {}\n", r.tip()));

    Ok(out)
}
