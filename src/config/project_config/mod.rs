//! Project-level configuration support
//!
//! Loads configuration from `ecostep.toml` in the working directory, falling
//! back to the user config file and then to built-in defaults.
//!
//! # Configuration Format
//!
//! ```toml
//! # ecostep.toml
//!
//! [defaults]
//! fuel = "Petrol"
//! litres = 3.0
//! ac_hours = 2.0
//! tv_hours = 2.0
//! laptop_hours = 4.0
//! lights_hours = 3.0
//! diet = "Mixed (Poultry / Fish)"
//!
//! [input]
//! category_policy = "strict"  # or "zero-fallback"
//!
//! [output]
//! format = "text"
//! no_color = false
//! ```

use crate::input::{CategoryPolicy, RawInput};
use crate::models::Appliance;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const CONFIG_FILENAME: &str = "ecostep.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Initial form values
    #[serde(default)]
    pub defaults: FormDefaults,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Values the form starts with before the user changes anything
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormDefaults {
    #[serde(default = "default_fuel")]
    pub fuel: String,

    #[serde(default = "default_litres")]
    pub litres: f64,

    #[serde(default = "default_ac_hours")]
    pub ac_hours: f64,

    #[serde(default = "default_tv_hours")]
    pub tv_hours: f64,

    #[serde(default = "default_laptop_hours")]
    pub laptop_hours: f64,

    #[serde(default = "default_lights_hours")]
    pub lights_hours: f64,

    #[serde(default = "default_diet")]
    pub diet: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            fuel: default_fuel(),
            litres: default_litres(),
            ac_hours: default_ac_hours(),
            tv_hours: default_tv_hours(),
            laptop_hours: default_laptop_hours(),
            lights_hours: default_lights_hours(),
            diet: default_diet(),
        }
    }
}

fn default_fuel() -> String {
    "Petrol".to_string()
}
fn default_litres() -> f64 {
    3.0
}
fn default_ac_hours() -> f64 {
    2.0
}
fn default_tv_hours() -> f64 {
    2.0
}
fn default_laptop_hours() -> f64 {
    4.0
}
fn default_lights_hours() -> f64 {
    3.0
}
fn default_diet() -> String {
    "Mixed (Poultry / Fish)".to_string()
}

impl FormDefaults {
    /// Hours configured for one appliance
    pub fn hours(&self, appliance: Appliance) -> f64 {
        match appliance {
            Appliance::Ac => self.ac_hours,
            Appliance::Tv => self.tv_hours,
            Appliance::Laptop => self.laptop_hours,
            Appliance::Lights => self.lights_hours,
        }
    }

    /// The defaults as an unvalidated form, keyed by appliance label
    pub fn raw_input(&self) -> RawInput {
        RawInput {
            fuel: self.fuel.clone(),
            litres: self.litres,
            hours: Appliance::ALL
                .into_iter()
                .map(|a| (a.label().to_string(), self.hours(a)))
                .collect(),
            diet: self.diet.clone(),
        }
    }
}

/// Input boundary settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InputConfig {
    /// How unknown fuel/diet labels are handled (default: strict)
    #[serde(default)]
    pub category_policy: CategoryPolicy,
}

/// Default CLI output settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output format (text, json, markdown, csv, html)
    #[serde(default = "default_format")]
    pub format: String,

    /// Disable ANSI colors in text output
    #[serde(default)]
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            no_color: false,
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}

/// User-level config file location
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("ecostep").join("config.toml"))
}

/// Load configuration.
///
/// Searches in this order:
/// 1. `<dir>/ecostep.toml`
/// 2. the user config file
///
/// A file that fails to parse is skipped with a warning. Returns defaults if
/// nothing usable is found.
pub fn load_config(dir: &Path) -> ProjectConfig {
    let candidates = std::iter::once(dir.join(CONFIG_FILENAME)).chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_toml_config(&path) {
            Ok(config) => {
                debug!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                warn!("Failed to load {}: {:#}", path.display(), e);
            }
        }
    }

    debug!("No config found, using defaults");
    ProjectConfig::default()
}

/// Load configuration from a TOML file
fn load_toml_config(path: &Path) -> anyhow::Result<ProjectConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: ProjectConfig = toml::from_str(&content)?;
    Ok(config)
}

pub const EXAMPLE_CONFIG: &str = r#"# EcoStep Configuration

[defaults]
# Starting values for the calculator form
# fuel: Petrol, Diesel, None (EV / Walk / Cycle)
fuel = "Petrol"
litres = 3.0          # 0 - 80

ac_hours = 2.0        # 0 - 18
tv_hours = 2.0        # 0 - 16
laptop_hours = 4.0    # 0 - 16
lights_hours = 3.0    # 0 - 24

# diet: High Meat (Beef / Lamb), Mixed (Poultry / Fish), Vegetarian / Vegan (Plant-based)
diet = "Mixed (Poultry / Fish)"

[input]
# "strict" rejects unknown fuel/diet names
# "zero-fallback" counts them as 0 kg CO2e
category_policy = "strict"

[output]
# Default output format (text, json, markdown, csv, html)
format = "text"
no_color = false
"#;

/// Write an example `ecostep.toml` into `dir`. Existing files are left alone.
///
/// Returns the path and whether a new file was written.
pub fn init_config(dir: &Path) -> anyhow::Result<(PathBuf, bool)> {
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        return Ok((path, false));
    }
    std::fs::write(&path, EXAMPLE_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok((path, true))
}

#[cfg(test)]
mod tests;
