//! Configuration module for EcoStep
//!
//! This module handles:
//! - Project-level configuration (ecostep.toml)
//! - User-level configuration (~/.config/ecostep/config.toml)
//! - Initial form values
//! - Category policy and CLI output defaults

mod project_config;

pub use project_config::{
    init_config, load_config, user_config_path, FormDefaults, InputConfig, OutputConfig,
    ProjectConfig, CONFIG_FILENAME, EXAMPLE_CONFIG,
};
