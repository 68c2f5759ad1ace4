//! Core data models for EcoStep
//!
//! Every value here is immutable input or derived output. A footprint is
//! recomputed from a fresh [`InputSnapshot`] on each input change; nothing
//! is carried between computations.

use crate::factors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fuel burned for personal transport today
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum FuelKind {
    #[default]
    Petrol,
    Diesel,
    /// EV, walking or cycling
    None,
}

impl FuelKind {
    pub const ALL: [FuelKind; 3] = [FuelKind::Petrol, FuelKind::Diesel, FuelKind::None];

    /// Emission factor in kg CO2e per litre
    pub const fn kg_per_litre(self) -> f64 {
        match self {
            FuelKind::Petrol => factors::PETROL_FACTOR,
            FuelKind::Diesel => factors::DIESEL_FACTOR,
            FuelKind::None => 0.0,
        }
    }

    /// Form label shown in the fuel selector
    pub const fn label(self) -> &'static str {
        match self {
            FuelKind::Petrol => "Petrol",
            FuelKind::Diesel => "Diesel",
            FuelKind::None => "None (EV / Walk / Cycle)",
        }
    }

    /// Whether litres are meaningful for this fuel
    pub const fn burns_fuel(self) -> bool {
        !matches!(self, FuelKind::None)
    }

    /// Lenient label match: a label mentioning "Petrol" or "Diesel" selects
    /// that fuel, checked in that order. Anything else is [`FuelKind::None`].
    pub fn from_label_containing(label: &str) -> FuelKind {
        if label.contains("Petrol") {
            FuelKind::Petrol
        } else if label.contains("Diesel") {
            FuelKind::Diesel
        } else {
            FuelKind::None
        }
    }
}

impl std::fmt::Display for FuelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Household appliance tracked by the electricity form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Appliance {
    Ac,
    Tv,
    Laptop,
    Lights,
}

impl Appliance {
    pub const ALL: [Appliance; 4] = [
        Appliance::Ac,
        Appliance::Tv,
        Appliance::Laptop,
        Appliance::Lights,
    ];

    /// Power draw in kWh per hour of use
    pub const fn kwh_per_hour(self) -> f64 {
        match self {
            Appliance::Ac => factors::AC_KWH_PER_HOUR,
            Appliance::Tv => factors::TV_KWH_PER_HOUR,
            Appliance::Laptop => factors::LAPTOP_KWH_PER_HOUR,
            Appliance::Lights => factors::LIGHTS_KWH_PER_HOUR,
        }
    }

    /// Upper bound of the hours slider. An input clamp, not a domain rule.
    pub const fn max_hours(self) -> f64 {
        match self {
            Appliance::Ac => 18.0,
            Appliance::Tv => 16.0,
            Appliance::Laptop => 16.0,
            Appliance::Lights => 24.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Appliance::Ac => "AC (1.5 Ton)",
            Appliance::Tv => "TV (LED)",
            Appliance::Laptop => "Laptop",
            Appliance::Lights => "Lights (LED)",
        }
    }
}

impl std::fmt::Display for Appliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Typical daily diet
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DietCategory {
    HighMeat,
    #[default]
    Mixed,
    Vegetarian,
}

impl DietCategory {
    pub const ALL: [DietCategory; 3] = [
        DietCategory::HighMeat,
        DietCategory::Mixed,
        DietCategory::Vegetarian,
    ];

    /// Daily footprint in kg CO2e
    pub const fn kg_per_day(self) -> f64 {
        match self {
            DietCategory::HighMeat => factors::HIGH_MEAT_KG_PER_DAY,
            DietCategory::Mixed => factors::MIXED_KG_PER_DAY,
            DietCategory::Vegetarian => factors::VEGETARIAN_KG_PER_DAY,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            DietCategory::HighMeat => "High Meat (Beef / Lamb)",
            DietCategory::Mixed => "Mixed (Poultry / Fish)",
            DietCategory::Vegetarian => "Vegetarian / Vegan (Plant-based)",
        }
    }

    /// Exact form label lookup
    pub fn from_label(label: &str) -> Option<DietCategory> {
        DietCategory::ALL.into_iter().find(|c| c.label() == label)
    }
}

impl std::fmt::Display for DietCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Emission category, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Transport,
    Electricity,
    Diet,
}

impl Category {
    /// Canonical order. Also the dominant-category tie-break order.
    pub const ALL: [Category; 3] = [Category::Transport, Category::Electricity, Category::Diet];

    pub const fn label(self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Electricity => "Electricity",
            Category::Diet => "Diet",
        }
    }

    /// Personalised advice when this category dominates the footprint
    pub const fn tip(self) -> &'static str {
        match self {
            Category::Transport => {
                "Your biggest footprint driver is Transport. Switching just 2 days/week to \
                 public transit or cycling can cut your transport emissions by up to 40%."
            }
            Category::Electricity => {
                "Your biggest driver is Energy Use. Raising your AC thermostat by 2 °C and \
                 switching to LED bulbs could reduce your electricity emissions significantly."
            }
            Category::Diet => {
                "Your biggest driver is Diet. One meat-free day per week saves roughly \
                 0.5 tonnes CO₂e/year, equivalent to planting 9 trees."
            }
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Three-band classification of the daily total
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Low,
    Moderate,
    High,
}

impl Grade {
    /// Classify a daily total.
    ///
    /// Both thresholds belong to the Moderate band: exactly
    /// [`factors::GRADE_LOW`] and exactly [`factors::GRADE_HIGH`] are Moderate.
    pub fn from_total(total_kg: f64) -> Grade {
        if total_kg < factors::GRADE_LOW {
            Grade::Low
        } else if total_kg <= factors::GRADE_HIGH {
            Grade::Moderate
        } else {
            Grade::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Grade::Low => "Low",
            Grade::Moderate => "Moderate",
            Grade::High => "High",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Hours each appliance was used today
///
/// Built from a partial map on purpose: completeness is checked by
/// [`crate::estimator::electricity_emissions`], not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplianceUsage {
    hours: BTreeMap<Appliance, f64>,
}

impl ApplianceUsage {
    /// Usage with every appliance set
    pub fn new(ac: f64, tv: f64, laptop: f64, lights: f64) -> Self {
        Self::default()
            .with(Appliance::Ac, ac)
            .with(Appliance::Tv, tv)
            .with(Appliance::Laptop, laptop)
            .with(Appliance::Lights, lights)
    }

    pub fn with(mut self, appliance: Appliance, hours: f64) -> Self {
        self.hours.insert(appliance, hours);
        self
    }

    pub fn set(&mut self, appliance: Appliance, hours: f64) {
        self.hours.insert(appliance, hours);
    }

    /// Drop one appliance, leaving the usage incomplete
    pub fn remove(&mut self, appliance: Appliance) -> Option<f64> {
        self.hours.remove(&appliance)
    }

    pub fn get(&self, appliance: Appliance) -> Option<f64> {
        self.hours.get(&appliance).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Appliance, f64)> + '_ {
        self.hours.iter().map(|(a, h)| (*a, *h))
    }
}

/// Everything the estimator needs for one recomputation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub fuel_kind: FuelKind,
    pub fuel_litres: f64,
    pub appliance_usage: ApplianceUsage,
    /// `None` only when an unknown diet was accepted under zero fallback
    pub diet: Option<DietCategory>,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            fuel_kind: FuelKind::Petrol,
            fuel_litres: 3.0,
            appliance_usage: ApplianceUsage::new(2.0, 2.0, 4.0, 3.0),
            diet: Some(DietCategory::Mixed),
        }
    }
}

/// Electricity consumed today and what it emitted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElectricityUse {
    pub kwh: f64,
    pub kg_co2e: f64,
}

/// Daily footprint derived from the three category values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub transport_kg: f64,
    pub electricity_kg: f64,
    pub diet_kg: f64,
    pub total_kg: f64,
    pub monthly_kg: f64,
    pub grade: Grade,
    pub dominant_category: Category,
    pub trees_equivalent: f64,
    pub phones_equivalent: f64,
    pub km_equivalent: f64,
}

impl FootprintResult {
    /// kg CO2e for one category
    pub fn category_kg(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport_kg,
            Category::Electricity => self.electricity_kg,
            Category::Diet => self.diet_kg,
        }
    }

    /// Share of the daily total in percent, 0 when the total is not positive
    pub fn share_percent(&self, category: Category) -> f64 {
        if self.total_kg > 0.0 {
            self.category_kg(category) / self.total_kg * 100.0
        } else {
            0.0
        }
    }

    /// Advice for the dominant category
    pub fn tip(&self) -> &'static str {
        self.dominant_category.tip()
    }
}

/// A snapshot together with everything computed from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub input: InputSnapshot,
    pub electricity_kwh: f64,
    pub result: FootprintResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_bands() {
        assert_eq!(Grade::from_total(0.0), Grade::Low);
        assert_eq!(Grade::from_total(11.999999), Grade::Low);
        assert_eq!(Grade::from_total(12.0), Grade::Moderate);
        assert_eq!(Grade::from_total(50.0), Grade::Moderate);
        assert_eq!(Grade::from_total(50.000001), Grade::High);
    }

    #[test]
    fn test_grade_thresholds_are_named() {
        assert_eq!(Grade::from_total(factors::GRADE_LOW), Grade::Moderate);
        assert_eq!(Grade::from_total(factors::GRADE_HIGH), Grade::Moderate);
        assert!(factors::GRADE_LOW < factors::GRADE_HIGH);
    }

    #[test]
    fn test_canonical_category_order() {
        assert_eq!(
            Category::ALL,
            [Category::Transport, Category::Electricity, Category::Diet]
        );
    }

    #[test]
    fn test_tips_are_distinct() {
        let tips: Vec<&str> = Category::ALL.iter().map(|c| c.tip()).collect();
        assert!(tips[0].contains("Transport"));
        assert!(tips[1].contains("Energy Use"));
        assert!(tips[2].contains("Diet"));
        assert_ne!(tips[0], tips[1]);
        assert_ne!(tips[1], tips[2]);
    }

    #[test]
    fn test_appliance_usage_partial() {
        let mut usage = ApplianceUsage::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(usage.get(Appliance::Laptop), Some(3.0));
        assert_eq!(usage.remove(Appliance::Tv), Some(2.0));
        assert_eq!(usage.get(Appliance::Tv), None);
        assert_eq!(usage.iter().count(), 3);
    }

    #[test]
    fn test_default_snapshot_matches_form_defaults() {
        let snap = InputSnapshot::default();
        assert_eq!(snap.fuel_kind, FuelKind::Petrol);
        assert_eq!(snap.fuel_litres, 3.0);
        assert_eq!(snap.appliance_usage.get(Appliance::Ac), Some(2.0));
        assert_eq!(snap.appliance_usage.get(Appliance::Lights), Some(3.0));
        assert_eq!(snap.diet, Some(DietCategory::Mixed));
    }

    #[test]
    fn test_share_percent_zero_total() {
        let result = FootprintResult {
            transport_kg: 0.0,
            electricity_kg: 0.0,
            diet_kg: 0.0,
            total_kg: 0.0,
            monthly_kg: 0.0,
            grade: Grade::Low,
            dominant_category: Category::Transport,
            trees_equivalent: 0.0,
            phones_equivalent: 0.0,
            km_equivalent: 0.0,
        };
        for category in Category::ALL {
            assert_eq!(result.share_percent(category), 0.0);
        }
    }
}
