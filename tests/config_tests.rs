// Config loading and validation tests

use release_stats::config::{AppConfig, OutputFormat, TimeZoneMode};

const VALID_CONFIG: &str = r#"
[input]
path = "data/events.json"
skip_invalid = true

[output]
format = "json"
timezone = "local"
"#;

#[test]
fn test_config_loads_from_str() {
    let config = AppConfig::load_from_str(VALID_CONFIG).expect("load_from_str");
    assert_eq!(config.input.path, "data/events.json");
    assert!(config.input.skip_invalid);
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.output.timezone, TimeZoneMode::Local);
}

#[test]
fn test_config_defaults_when_omitted() {
    let config = AppConfig::load_from_str("").expect("empty config");
    assert_eq!(config.input.path, "events.json");
    assert!(!config.input.skip_invalid);
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.output.timezone, TimeZoneMode::Utc);

    let config = AppConfig::load_from_str("[output]\nformat = \"json\"\n").expect("partial");
    assert_eq!(config.input.path, "events.json");
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_config_validation_rejects_empty_input_path() {
    let bad = VALID_CONFIG.replace("path = \"data/events.json\"", "path = \"  \"");
    let err = AppConfig::load_from_str(&bad).unwrap_err();
    assert!(err.to_string().contains("input.path"));
}

#[test]
fn test_config_rejects_unknown_format() {
    let bad = VALID_CONFIG.replace("format = \"json\"", "format = \"xml\"");
    assert!(AppConfig::load_from_str(&bad).is_err());
}

#[test]
fn test_config_validation_rejects_invalid_toml() {
    let err = AppConfig::load_from_str("not valid toml [[[").unwrap_err();
    assert!(!err.to_string().is_empty());
}

// Both cases share one test: CONFIG_FILE is process-wide.
#[test]
fn test_config_load_via_env() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, VALID_CONFIG).unwrap();

    unsafe { std::env::set_var("CONFIG_FILE", path.to_str().unwrap()) };
    let from_file = AppConfig::load();
    unsafe { std::env::set_var("CONFIG_FILE", dir.path().join("missing.toml").to_str().unwrap()) };
    let missing = AppConfig::load();
    unsafe { std::env::remove_var("CONFIG_FILE") };

    let config = from_file.expect("load from CONFIG_FILE");
    assert_eq!(config.input.path, "data/events.json");
    let config = missing.expect("missing file falls back to defaults");
    assert_eq!(config.input.path, "events.json");
}
