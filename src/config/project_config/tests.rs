use super::*;
use crate::models::{DietCategory, FuelKind, InputSnapshot};

#[test]
fn test_default_config() {
    let config = ProjectConfig::default();
    assert_eq!(config.defaults.fuel, "Petrol");
    assert_eq!(config.defaults.litres, 3.0);
    assert_eq!(config.defaults.hours(Appliance::Laptop), 4.0);
    assert_eq!(config.input.category_policy, CategoryPolicy::Strict);
    assert_eq!(config.output.format, "text");
    assert!(!config.output.no_color);
}

#[test]
fn test_default_form_builds_default_snapshot() {
    let raw = FormDefaults::default().raw_input();
    let snap = raw.to_snapshot(CategoryPolicy::Strict).unwrap();
    assert_eq!(snap, InputSnapshot::default());
}

#[test]
fn test_parse_toml_config() {
    let toml_str = r#"
[defaults]
fuel = "Diesel"
litres = 12.5
ac_hours = 0.0
diet = "vegan"

[input]
category_policy = "zero-fallback"

[output]
format = "json"
no_color = true
"#;
    let config: ProjectConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.defaults.fuel, "Diesel");
    assert_eq!(config.defaults.litres, 12.5);
    assert_eq!(config.defaults.ac_hours, 0.0);
    // Unset fields keep their defaults
    assert_eq!(config.defaults.tv_hours, 2.0);
    assert_eq!(config.input.category_policy, CategoryPolicy::ZeroFallback);
    assert_eq!(config.output.format, "json");
    assert!(config.output.no_color);

    let snap = config
        .defaults
        .raw_input()
        .to_snapshot(config.input.category_policy)
        .unwrap();
    assert_eq!(snap.fuel_kind, FuelKind::Diesel);
    assert_eq!(snap.diet, Some(DietCategory::Vegetarian));
}

#[test]
fn test_parse_minimal_toml() {
    let config: ProjectConfig = toml::from_str("").unwrap();
    assert_eq!(config.defaults.diet, "Mixed (Poultry / Fish)");
}

#[test]
fn test_example_config_parses() {
    let config: ProjectConfig = toml::from_str(EXAMPLE_CONFIG).unwrap();
    assert_eq!(config.defaults.lights_hours, 3.0);
    assert_eq!(config.input.category_policy, CategoryPolicy::Strict);
}

#[test]
fn test_invalid_policy_rejected() {
    let result = toml::from_str::<ProjectConfig>("[input]\ncategory_policy = \"lenient\"\n");
    assert!(result.is_err());
}

#[test]
fn test_load_config_from_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILENAME),
        "[defaults]\nfuel = \"Diesel\"\n",
    )
    .unwrap();
    let config = load_config(dir.path());
    assert_eq!(config.defaults.fuel, "Diesel");
}

#[test]
fn test_load_config_skips_broken_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(CONFIG_FILENAME), "this is [[ not valid toml").unwrap();
    // Must not panic; falls through to user config or defaults
    let config = load_config(dir.path());
    assert!(!config.output.format.is_empty());
}

#[test]
fn test_init_config_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let (path, created) = init_config(dir.path()).unwrap();
    assert!(created);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);

    std::fs::write(&path, "# mine\n").unwrap();
    let (_, created_again) = init_config(dir.path()).unwrap();
    assert!(!created_again);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");
}

#[test]
fn test_user_config_path_shape() {
    if let Some(p) = user_config_path() {
        assert!(p.ends_with("ecostep/config.toml"));
    }
}
