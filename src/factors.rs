//! Emission factor table
//!
//! Read-only constants for the lifetime of the process. Control logic never
//! inlines these literals; it goes through the enum methods in
//! [`crate::models`] or the named constants below.
//!
//! # Sources
//!
//! - Fuel and grid: UK DESNZ 2025 greenhouse gas conversion factors
//! - Diet: Ritchie, Rosado & Roser (2022), "Environmental Impacts of Food
//!   Production", OurWorldinData.org, dietary averages per food-system category
//!
//! # Formulas
//!
//! ```text
//! transport   = litres × fuel_factor
//! electricity = Σ hours[a] × draw[a] × GRID_FACTOR
//! diet        = diet_factor
//! total       = transport + electricity + diet
//! monthly     = total × DAYS_PER_MONTH
//! ```

// Transport (kg CO2e per litre)
pub const PETROL_FACTOR: f64 = 2.06916;
pub const DIESEL_FACTOR: f64 = 2.57082;

// Electricity
pub const GRID_FACTOR: f64 = 0.43; // kg CO2e per kWh

// Appliance draw (kWh per hour of use)
pub const AC_KWH_PER_HOUR: f64 = 1.50;
pub const TV_KWH_PER_HOUR: f64 = 0.10;
pub const LAPTOP_KWH_PER_HOUR: f64 = 0.05;
pub const LIGHTS_KWH_PER_HOUR: f64 = 0.01;

// Diet (kg CO2e per day)
pub const HIGH_MEAT_KG_PER_DAY: f64 = 8.0;
pub const MIXED_KG_PER_DAY: f64 = 4.0;
pub const VEGETARIAN_KG_PER_DAY: f64 = 1.5;

// Context conversions
pub const TREE_DAILY_ABSORPTION_KG: f64 = 0.057; // one mature tree, per day
pub const PHONE_CHARGE_KG: f64 = 0.008; // one full smartphone charge
pub const CAR_KG_PER_KM: f64 = 0.170; // average petrol car

/// Daily totals below this are graded Low
pub const GRADE_LOW: f64 = 12.0;
/// Daily totals above this are graded High
pub const GRADE_HIGH: f64 = 50.0;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// Upper bound of the litres slider
pub const MAX_FUEL_LITRES: f64 = 80.0;

/// One row of the printable factor table
#[derive(Debug, Clone, Copy)]
pub struct FactorRow {
    pub group: &'static str,
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Every factor in display order, for `ecostep factors`
pub const TABLE: &[FactorRow] = &[
    FactorRow { group: "Transport", name: "Petrol", value: PETROL_FACTOR, unit: "kg CO2e/L" },
    FactorRow { group: "Transport", name: "Diesel", value: DIESEL_FACTOR, unit: "kg CO2e/L" },
    FactorRow { group: "Electricity", name: "UK grid", value: GRID_FACTOR, unit: "kg CO2e/kWh" },
    FactorRow { group: "Electricity", name: "AC (1.5 Ton)", value: AC_KWH_PER_HOUR, unit: "kWh/h" },
    FactorRow { group: "Electricity", name: "TV (LED)", value: TV_KWH_PER_HOUR, unit: "kWh/h" },
    FactorRow { group: "Electricity", name: "Laptop", value: LAPTOP_KWH_PER_HOUR, unit: "kWh/h" },
    FactorRow { group: "Electricity", name: "Lights (LED)", value: LIGHTS_KWH_PER_HOUR, unit: "kWh/h" },
    FactorRow { group: "Diet", name: "High Meat", value: HIGH_MEAT_KG_PER_DAY, unit: "kg CO2e/day" },
    FactorRow { group: "Diet", name: "Mixed", value: MIXED_KG_PER_DAY, unit: "kg CO2e/day" },
    FactorRow { group: "Diet", name: "Vegetarian / Vegan", value: VEGETARIAN_KG_PER_DAY, unit: "kg CO2e/day" },
    FactorRow { group: "Context", name: "Tree absorption", value: TREE_DAILY_ABSORPTION_KG, unit: "kg CO2e/day" },
    FactorRow { group: "Context", name: "Phone charge", value: PHONE_CHARGE_KG, unit: "kg CO2e" },
    FactorRow { group: "Context", name: "Petrol car", value: CAR_KG_PER_KM, unit: "kg CO2e/km" },
    FactorRow { group: "Grade", name: "Low below", value: GRADE_LOW, unit: "kg CO2e/day" },
    FactorRow { group: "Grade", name: "High above", value: GRADE_HIGH, unit: "kg CO2e/day" },
];

pub const SOURCES: &[&str] = &[
    "UK DESNZ 2025 (Dept. for Energy Security & Net Zero): fuel and grid factors",
    "Hannah Ritchie, Pablo Rosado, and Max Roser (2022), \"Environmental Impacts of Food \
     Production\", OurWorldinData.org: dietary greenhouse gas averages",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_factors() {
        assert_eq!(TABLE.len(), 15);
        assert!(TABLE.iter().any(|r| r.value == GRID_FACTOR));
        assert!(TABLE.iter().all(|r| r.value > 0.0));
    }
}
