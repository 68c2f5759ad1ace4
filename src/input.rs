//! Input collector
//!
//! Turns raw form values (labels and numbers from flags, config or the
//! interactive session) into an immutable [`InputSnapshot`]. This is the only
//! place that clamps ranges and resolves category labels; the estimator
//! trusts what it receives.

use crate::error::{EstimateError, EstimateResult};
use crate::factors::MAX_FUEL_LITRES;
use crate::models::{Appliance, ApplianceUsage, DietCategory, FuelKind, InputSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

/// What to do with an unrecognised fuel or diet label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryPolicy {
    /// Reject with [`EstimateError::InvalidCategory`]
    #[default]
    Strict,
    /// Treat the label as contributing 0 kg CO2e and log a warning
    ZeroFallback,
}

impl FromStr for CategoryPolicy {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "strict" => Ok(CategoryPolicy::Strict),
            "zero-fallback" | "zero" | "fallback" => Ok(CategoryPolicy::ZeroFallback),
            _ => Err(invalid("category policy", s, "strict, zero-fallback")),
        }
    }
}

impl std::fmt::Display for CategoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryPolicy::Strict => write!(f, "strict"),
            CategoryPolicy::ZeroFallback => write!(f, "zero-fallback"),
        }
    }
}

fn invalid(kind: &'static str, value: &str, expected: &str) -> EstimateError {
    EstimateError::InvalidCategory {
        kind,
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// Lowercase and keep only alphanumerics, so "High Meat (Beef / Lamb)",
/// "high-meat" and "HIGH_MEAT" compare equal
fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for FuelKind {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "petrol" | "gasoline" => Ok(FuelKind::Petrol),
            "diesel" => Ok(FuelKind::Diesel),
            "none" | "noneevwalkcycle" | "ev" | "walk" | "cycle" => Ok(FuelKind::None),
            _ => Err(invalid("fuel kind", s, "petrol, diesel, none")),
        }
    }
}

impl FromStr for DietCategory {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "highmeat" | "highmeatbeeflamb" | "meat" => Ok(DietCategory::HighMeat),
            "mixed" | "mixedpoultryfish" => Ok(DietCategory::Mixed),
            "vegetarian" | "vegan" | "veg" | "plantbased" | "vegetarianveganplantbased" => {
                Ok(DietCategory::Vegetarian)
            }
            _ => Err(invalid("diet category", s, "high-meat, mixed, vegetarian")),
        }
    }
}

impl FromStr for Appliance {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "ac" | "ac15ton" | "aircon" => Ok(Appliance::Ac),
            "tv" | "tvled" => Ok(Appliance::Tv),
            "laptop" => Ok(Appliance::Laptop),
            "lights" | "light" | "lightsled" => Ok(Appliance::Lights),
            _ => Err(invalid("appliance", s, "ac, tv, laptop, lights")),
        }
    }
}

/// Resolve a fuel label under `policy`.
///
/// Under [`CategoryPolicy::ZeroFallback`] an unrecognised label is matched
/// leniently with [`FuelKind::from_label_containing`], so "Petrol (Unleaded)"
/// still burns petrol and anything without a fuel name counts as 0.
pub fn resolve_fuel(label: &str, policy: CategoryPolicy) -> EstimateResult<FuelKind> {
    match (label.parse::<FuelKind>(), policy) {
        (Ok(kind), _) => Ok(kind),
        (Err(e), CategoryPolicy::Strict) => Err(e),
        (Err(_), CategoryPolicy::ZeroFallback) => {
            let kind = FuelKind::from_label_containing(label);
            if kind.burns_fuel() {
                warn!("Unknown fuel kind '{}', matched as {}", label, kind);
            } else {
                warn!("Unknown fuel kind '{}', counting transport as 0 kg CO2e", label);
            }
            Ok(kind)
        }
    }
}

/// Resolve a diet label under `policy`. `Ok(None)` means "unknown, counts as 0".
///
/// Zero fallback only accepts exact form labels beyond what `FromStr` knows.
pub fn resolve_diet(label: &str, policy: CategoryPolicy) -> EstimateResult<Option<DietCategory>> {
    match (label.parse::<DietCategory>(), policy) {
        (Ok(diet), _) => Ok(Some(diet)),
        (Err(e), CategoryPolicy::Strict) => Err(e),
        (Err(_), CategoryPolicy::ZeroFallback) => {
            let diet = DietCategory::from_label(label);
            if diet.is_none() {
                warn!("Unknown diet category '{}', counting diet as 0 kg CO2e", label);
            }
            Ok(diet)
        }
    }
}

fn check_finite(field: &str, value: f64) -> EstimateResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EstimateError::InvalidNumber {
            field: field.to_string(),
            value,
        })
    }
}

/// Clamp a value into `0..=max`, warning when it moves
fn clamp_logged(field: &str, value: f64, max: f64) -> f64 {
    let clamped = value.clamp(0.0, max);
    if clamped != value {
        warn!("{} = {} is outside 0..={}, using {}", field, value, max, clamped);
    }
    clamped
}

/// Litres actually fed to the estimator. Choosing no fuel forces 0.
pub fn collect_litres(fuel: FuelKind, litres: f64) -> EstimateResult<f64> {
    let litres = check_finite("litres", litres)?;
    if !fuel.burns_fuel() {
        return Ok(0.0);
    }
    Ok(clamp_logged("litres", litres, MAX_FUEL_LITRES))
}

/// Hours actually fed to the estimator for one appliance
pub fn collect_hours(appliance: Appliance, hours: f64) -> EstimateResult<f64> {
    let field = format!("{} hours", appliance);
    let hours = check_finite(&field, hours)?;
    Ok(clamp_logged(&field, hours, appliance.max_hours()))
}

/// Raw, unvalidated form values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    pub fuel: String,
    pub litres: f64,
    /// Appliance label -> hours
    pub hours: BTreeMap<String, f64>,
    pub diet: String,
}

impl RawInput {
    /// Validate, clamp and resolve into a snapshot.
    ///
    /// Unknown appliance names are always rejected; only fuel and diet labels
    /// are subject to `policy`. Appliances left out of `hours` stay missing so
    /// the estimator can report the incomplete input.
    pub fn to_snapshot(&self, policy: CategoryPolicy) -> EstimateResult<InputSnapshot> {
        let fuel_kind = resolve_fuel(&self.fuel, policy)?;
        let fuel_litres = collect_litres(fuel_kind, self.litres)?;

        let mut appliance_usage = ApplianceUsage::default();
        for (name, hours) in &self.hours {
            let appliance: Appliance = name.parse()?;
            appliance_usage.set(appliance, collect_hours(appliance, *hours)?);
        }

        let diet = resolve_diet(&self.diet, policy)?;

        Ok(InputSnapshot {
            fuel_kind,
            fuel_litres,
            appliance_usage,
            diet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw() -> RawInput {
        RawInput {
            fuel: "Petrol".into(),
            litres: 3.0,
            hours: [("ac", 2.0), ("tv", 2.0), ("laptop", 4.0), ("lights", 3.0)]
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            diet: "Mixed (Poultry / Fish)".into(),
        }
    }

    #[test]
    fn test_parse_fuel_labels() {
        assert_eq!("petrol".parse::<FuelKind>().unwrap(), FuelKind::Petrol);
        assert_eq!("DIESEL".parse::<FuelKind>().unwrap(), FuelKind::Diesel);
        assert_eq!(
            "None (EV / Walk / Cycle)".parse::<FuelKind>().unwrap(),
            FuelKind::None
        );
        assert!("kerosene".parse::<FuelKind>().is_err());
    }

    #[test]
    fn test_parse_diet_labels() {
        for diet in DietCategory::ALL {
            assert_eq!(diet.label().parse::<DietCategory>().unwrap(), diet);
        }
        assert_eq!("high-meat".parse::<DietCategory>().unwrap(), DietCategory::HighMeat);
        assert_eq!("vegan".parse::<DietCategory>().unwrap(), DietCategory::Vegetarian);
        assert!("carnivore".parse::<DietCategory>().is_err());
    }

    #[test]
    fn test_parse_appliance_labels() {
        for appliance in Appliance::ALL {
            assert_eq!(appliance.label().parse::<Appliance>().unwrap(), appliance);
        }
        assert!("fridge".parse::<Appliance>().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<CategoryPolicy>().unwrap(), CategoryPolicy::Strict);
        assert_eq!(
            "zero_fallback".parse::<CategoryPolicy>().unwrap(),
            CategoryPolicy::ZeroFallback
        );
        assert!("lenient".parse::<CategoryPolicy>().is_err());
    }

    #[test]
    fn test_strict_policy_rejects_unknown_diet() {
        let mut input = raw();
        input.diet = "Carnivore".into();
        let err = input.to_snapshot(CategoryPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidCategory { kind: "diet category", .. }
        ));
    }

    #[test]
    fn test_zero_fallback_policy_accepts_unknown_labels() {
        let mut input = raw();
        input.fuel = "Hydrogen".into();
        input.diet = "Carnivore".into();
        let snap = input.to_snapshot(CategoryPolicy::ZeroFallback).unwrap();
        assert_eq!(snap.fuel_kind, FuelKind::None);
        assert_eq!(snap.fuel_litres, 0.0);
        assert_eq!(snap.diet, None);
    }

    #[test]
    fn test_zero_fallback_matches_fuel_by_name() {
        let mut input = raw();
        input.fuel = "Petrol (Unleaded)".into();
        let snap = input.to_snapshot(CategoryPolicy::ZeroFallback).unwrap();
        assert_eq!(snap.fuel_kind, FuelKind::Petrol);
        assert_eq!(snap.fuel_litres, 3.0);

        let transport = crate::estimator::estimate(&snap).unwrap().result.transport_kg;
        assert_eq!(
            transport,
            crate::estimator::transport_emissions_for_label("Petrol (Unleaded)", 3.0)
        );
        assert!((transport - 6.20748).abs() < 1e-9);

        input.fuel = "Diesel (Premium)".into();
        let snap = input.to_snapshot(CategoryPolicy::ZeroFallback).unwrap();
        assert_eq!(snap.fuel_kind, FuelKind::Diesel);

        // Still an error when strict
        input.fuel = "Petrol (Unleaded)".into();
        assert!(input.to_snapshot(CategoryPolicy::Strict).is_err());
    }

    #[test]
    fn test_zero_fallback_diet_agrees_with_label_lookup() {
        for label in ["Carnivore", "Mixed (Poultry / Fish)"] {
            let mut input = raw();
            input.diet = label.into();
            let snap = input.to_snapshot(CategoryPolicy::ZeroFallback).unwrap();
            let diet_kg = crate::estimator::estimate(&snap).unwrap().result.diet_kg;
            assert_eq!(diet_kg, crate::estimator::diet_emissions_for_label(label));
        }
    }

    #[test]
    fn test_unknown_appliance_rejected_under_any_policy() {
        let mut input = raw();
        input.hours.insert("fridge".into(), 1.0);
        assert!(input.to_snapshot(CategoryPolicy::ZeroFallback).is_err());
    }

    #[test]
    fn test_missing_appliance_stays_missing() {
        let mut input = raw();
        input.hours.remove("tv");
        let snap = input.to_snapshot(CategoryPolicy::Strict).unwrap();
        assert_eq!(snap.appliance_usage.get(Appliance::Tv), None);
    }

    #[test]
    fn test_clamping() {
        assert_eq!(collect_litres(FuelKind::Petrol, 120.0).unwrap(), 80.0);
        assert_eq!(collect_litres(FuelKind::Diesel, -2.0).unwrap(), 0.0);
        assert_eq!(collect_litres(FuelKind::None, 25.0).unwrap(), 0.0);
        assert_eq!(collect_hours(Appliance::Ac, 30.0).unwrap(), 18.0);
        assert_eq!(collect_hours(Appliance::Lights, 30.0).unwrap(), 24.0);
        assert_eq!(collect_hours(Appliance::Tv, 1.5).unwrap(), 1.5);
    }

    #[test]
    fn test_non_finite_numbers_rejected() {
        assert!(matches!(
            collect_litres(FuelKind::Petrol, f64::NAN),
            Err(EstimateError::InvalidNumber { .. })
        ));
        assert!(collect_hours(Appliance::Laptop, f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_form_values_build_default_snapshot() {
        let snap = raw().to_snapshot(CategoryPolicy::Strict).unwrap();
        assert_eq!(snap, InputSnapshot::default());
    }
}
