//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{
    dictionary::DictionaryConfig, index::IndexConfig, AppConfig, ConfigLoader, LogConfig, Validate,
};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use std::path::PathBuf;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = AppConfig::default();

    config.index.max_nodes = Some(0);
    assert!(config.validate().is_err());

    config.index.max_nodes = Some(10_000);
    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.dictionary.paths.push(PathBuf::new());
    assert!(config.validate().is_err());
}

#[test_case("trace", true ; "trace level")]
#[test_case("error", true ; "error level")]
#[test_case("INFO", false ; "levels are lowercase")]
#[test_case("", false ; "empty level")]
fn test_log_level_validation(level: &str, valid: bool) {
    let config = LogConfig {
        level: level.to_string(),
        ..LogConfig::default()
    };
    assert_eq!(config.validate().is_ok(), valid);
}

/// Loading without a file yields the defaults.
#[test]
fn test_load_defaults_without_file() {
    let loader = ConfigLoader::new(None::<PathBuf>, "TEST_DEFAULTS");
    let config = loader.load().unwrap();
    assert_eq!(config, AppConfig::default());
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_file_test.toml",
            r#"
            [index]
            initial_capacity = 16
            max_nodes = 4096

            [dictionary]
            paths = ["words.txt", "extra.txt"]
            skip_blank_lines = false

            [log]
            level = "warn"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let config = loader.load().unwrap();

    assert_eq!(config.index.initial_capacity, 16);
    assert_eq!(config.index.max_nodes, Some(4096));
    assert_eq!(
        config.dictionary.paths,
        vec![PathBuf::from("words.txt"), PathBuf::from("extra.txt")]
    );
    assert!(!config.dictionary.skip_blank_lines);
    assert_eq!(config.log.level, "warn");

    // Other values should be defaults
    assert!(config.dictionary.trim);
    assert!(!config.log.json);
}

/// Test loading a JSON configuration file.
#[test]
fn test_load_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("config.json", r#"{ "log": { "json": true } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON")
        .load()
        .unwrap();
    assert!(config.log.json);
    assert_eq!(config.index, IndexConfig::default());
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "config_env_test.toml",
            r#"
            [index]
            initial_capacity = 16
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__INDEX__INITIAL_CAPACITY", "32");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(config.index.initial_capacity, 32);
    assert_eq!(config.log.level, "debug");
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("absent.toml");

    let err = ConfigLoader::new(Some(&config_path), "TEST_MISSING")
        .load()
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(path) if path == config_path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file("invalid.toml", "[index\ninitial_capacity = ")
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_INVALID");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that an unsupported extension is rejected.
#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.write_file("config.ini", "").unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that a file passing parsing still has to pass validation.
#[test]
fn test_loaded_config_is_validated() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .write_file(
            "invalid_values.toml",
            r#"
            [index]
            initial_capacity = 100
            max_nodes = 10
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_VALIDATE");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// The generated TOML must load back into the same configuration.
#[test]
fn test_default_config_toml_loads() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
    let config_path = fixture.write_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_GENERATED")
        .load()
        .unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.dictionary, DictionaryConfig::default());
}
