//! Chart series shared by the text and HTML reporters
//!
//! Two views over the same three category values: a proportion chart (pie)
//! and a magnitude chart (horizontal bars).

use crate::models::{Category, FootprintResult};
use serde::Serialize;

/// Display colour for a category
pub fn category_color(category: Category) -> &'static str {
    match category {
        Category::Transport => "#24753E",
        Category::Electricity => "#f59e0b",
        Category::Diet => "#10b981",
    }
}

/// One category in both charts
#[derive(Debug, Clone, Serialize)]
pub struct ChartSlice {
    pub category: Category,
    pub value: f64,
    /// Share of the total in percent
    pub percent: f64,
    pub color: &'static str,
    /// Pie wedge, degrees clockwise from 12 o'clock
    pub start_deg: f64,
    pub end_deg: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub slices: Vec<ChartSlice>,
    /// Largest category value, the bar chart's full scale
    pub max_value: f64,
}

impl ChartData {
    pub fn from_result(result: &FootprintResult) -> Self {
        let mut cursor = 0.0;
        let mut max_value: f64 = 0.0;
        let slices = Category::ALL
            .iter()
            .map(|&category| {
                let value = result.category_kg(category);
                let percent = result.share_percent(category);
                let sweep = percent / 100.0 * 360.0;
                let slice = ChartSlice {
                    category,
                    value,
                    percent,
                    color: category_color(category),
                    start_deg: cursor,
                    end_deg: cursor + sweep,
                };
                cursor += sweep;
                max_value = max_value.max(value);
                slice
            })
            .collect();

        Self { slices, max_value }
    }

    /// Nothing to draw when every category is zero
    pub fn is_empty(&self) -> bool {
        self.slices.iter().all(|s| s.value <= 0.0)
    }

    /// Bar length for `value` scaled to `width` cells
    pub fn bar_len(&self, value: f64, width: usize) -> usize {
        if self.max_value <= 0.0 || value <= 0.0 {
            return 0;
        }
        ((value / self.max_value) * width as f64).round() as usize
    }
}
