//! Footprint estimator
//!
//! Three leaf conversions (transport, electricity, diet) feed [`aggregate`],
//! which derives totals, the grade, the dominant category and the context
//! equivalents. Every function is pure; [`estimate`] composes them for one
//! [`InputSnapshot`].

use crate::error::{EstimateError, EstimateResult};
use crate::factors;
use crate::models::{
    Appliance, ApplianceUsage, Category, DietCategory, ElectricityUse, Estimate, FootprintResult,
    FuelKind, Grade, InputSnapshot,
};
use tracing::debug;

/// kg CO2e from burning `litres` of fuel.
///
/// Out-of-range litres are not rejected; clamping is the input collector's job.
pub fn transport_emissions(kind: FuelKind, litres: f64) -> f64 {
    litres * kind.kg_per_litre()
}

/// Label-based transport conversion with the legacy zero fallback.
///
/// A label mentioning "Petrol" or "Diesel" selects that factor; any other
/// label contributes nothing.
pub fn transport_emissions_for_label(label: &str, litres: f64) -> f64 {
    transport_emissions(FuelKind::from_label_containing(label), litres)
}

/// kWh and kg CO2e for a day of appliance use.
///
/// Every appliance must be present. A missing entry fails instead of being
/// counted as zero hours.
pub fn electricity_emissions(usage: &ApplianceUsage) -> EstimateResult<ElectricityUse> {
    let mut kwh = 0.0;
    for appliance in Appliance::ALL {
        let hours = usage
            .get(appliance)
            .ok_or(EstimateError::MissingAppliance(appliance))?;
        kwh += hours * appliance.kwh_per_hour();
    }
    Ok(ElectricityUse {
        kwh,
        kg_co2e: kwh * factors::GRID_FACTOR,
    })
}

/// kg CO2e per day for a diet
pub fn diet_emissions(category: DietCategory) -> f64 {
    category.kg_per_day()
}

/// Label-based diet lookup; unknown labels contribute 0
pub fn diet_emissions_for_label(label: &str) -> f64 {
    DietCategory::from_label(label)
        .map(diet_emissions)
        .unwrap_or(0.0)
}

/// `total / per_unit`, or 0 when there is nothing to convert
pub fn context_equivalent(total_kg: f64, per_unit: f64) -> f64 {
    if total_kg > 0.0 {
        total_kg / per_unit
    } else {
        0.0
    }
}

/// Category with the strictly largest value.
///
/// Ties keep the earliest category in canonical order
/// (Transport, Electricity, Diet).
pub fn dominant_category(transport: f64, electricity: f64, diet: f64) -> Category {
    let values = [
        (Category::Transport, transport),
        (Category::Electricity, electricity),
        (Category::Diet, diet),
    ];
    let mut best = values[0];
    for candidate in &values[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    best.0
}

/// Combine the three category values into a full result
pub fn aggregate(transport: f64, electricity: f64, diet: f64) -> FootprintResult {
    let total = transport + electricity + diet;

    FootprintResult {
        transport_kg: transport,
        electricity_kg: electricity,
        diet_kg: diet,
        total_kg: total,
        monthly_kg: total * factors::DAYS_PER_MONTH,
        grade: Grade::from_total(total),
        dominant_category: dominant_category(transport, electricity, diet),
        trees_equivalent: context_equivalent(total, factors::TREE_DAILY_ABSORPTION_KG),
        phones_equivalent: context_equivalent(total, factors::PHONE_CHARGE_KG),
        km_equivalent: context_equivalent(total, factors::CAR_KG_PER_KM),
    }
}

/// Run the whole pipeline for one snapshot
pub fn estimate(input: &InputSnapshot) -> EstimateResult<Estimate> {
    let transport = transport_emissions(input.fuel_kind, input.fuel_litres);
    let electricity = electricity_emissions(&input.appliance_usage)?;
    let diet = input.diet.map(diet_emissions).unwrap_or(0.0);

    let result = aggregate(transport, electricity.kg_co2e, diet);
    debug!(
        "Estimate: transport={:.3} electricity={:.3} ({:.2} kWh) diet={:.3} total={:.3} grade={} dominant={}",
        transport,
        electricity.kg_co2e,
        electricity.kwh,
        diet,
        result.total_kg,
        result.grade,
        result.dominant_category
    );

    Ok(Estimate {
        input: input.clone(),
        electricity_kwh: electricity.kwh,
        result,
    })
}
