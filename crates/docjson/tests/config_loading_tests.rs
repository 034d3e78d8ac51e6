//! Configuration loading integration tests.
//!
//! Tests the config loading APIs:
//! - from_file() with TOML/YAML/JSON
//! - discover_from() for searching parent directories
//! - Error handling for invalid configs

use docjson::core::config::CONFIG_FILE_NAME;
use docjson::{ConfigOverrides, ConversionConfig, DocjsonError, OcrEngineKind};
use std::fs;
use tempfile::TempDir;

/// Test loading config from TOML file.
#[test]
fn test_from_file_toml_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let toml_content = r#"
binary_property_name = "attachment"
include_row_numbers = true
separate_sheets = true

[ocr]
language = "deu"
engine = "tesseract-native"
"#;
    fs::write(&config_path, toml_content).unwrap();

    let config = ConversionConfig::from_file(&config_path).expect("Should load TOML config");

    assert_eq!(config.binary_property_name, "attachment");
    assert!(config.include_row_numbers);
    assert!(config.separate_sheets);
    assert!(config.include_file_name, "unset fields keep their defaults");
    assert_eq!(config.ocr.language, "deu");
    assert_eq!(config.ocr.engine, OcrEngineKind::TesseractNative);
}

/// Test loading config from YAML file.
#[test]
fn test_from_file_yaml_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.yaml");

    let yaml_content = r#"
include_file_name: false
continue_on_failure: true
ocr:
  language: fra
"#;
    fs::write(&config_path, yaml_content).unwrap();

    let config = ConversionConfig::from_file(&config_path).expect("Should load YAML config");

    assert!(!config.include_file_name);
    assert!(config.continue_on_failure);
    assert_eq!(config.ocr.language, "fra");
    assert_eq!(config.ocr.engine, OcrEngineKind::TesseractCli);
}

/// Test loading config from JSON file.
#[test]
fn test_from_file_json_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");

    fs::write(&config_path, r#"{"include_sheet_name": false}"#).unwrap();

    let config = ConversionConfig::from_file(&config_path).expect("Should load JSON config");

    assert!(!config.include_sheet_name);
    assert_eq!(config.binary_property_name, "data");
}

/// Test that unknown extensions are rejected.
#[test]
fn test_from_file_unsupported_extension_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.ini");
    fs::write(&config_path, "include_file_name=false").unwrap();

    let err = ConversionConfig::from_file(&config_path).unwrap_err();

    assert!(matches!(err, DocjsonError::Validation { .. }));
    assert!(err.to_string().contains("Unsupported config format"));
}

/// Test error reporting for malformed TOML.
#[test]
fn test_from_file_invalid_toml_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "include_file_name = [not valid").unwrap();

    let err = ConversionConfig::from_file(&config_path).unwrap_err();

    assert!(matches!(err, DocjsonError::Validation { .. }));
    assert!(err.to_string().contains("Invalid TOML"));
}

/// Test that a wrongly typed value is an error, not a silent default.
#[test]
fn test_from_file_wrong_type_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"separate_sheets": "yes"}"#).unwrap();

    assert!(ConversionConfig::from_file(&config_path).is_err());
}

/// Test reading a file that does not exist.
#[test]
fn test_from_file_missing_fails() {
    let temp_dir = TempDir::new().unwrap();

    let err = ConversionConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();

    assert!(err.to_string().contains("Failed to read config file"));
}

/// Test discovery in a parent directory.
#[test]
fn test_discover_from_parent_directory() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "include_row_numbers = true\n").unwrap();

    let nested = temp_dir.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    let config = ConversionConfig::discover_from(&nested)
        .unwrap()
        .expect("Should find config in an ancestor");

    assert!(config.include_row_numbers);
}

/// Test that the nearest config file wins.
#[test]
fn test_discover_prefers_nearest_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "separate_sheets = false\n").unwrap();

    let child = temp_dir.path().join("project");
    fs::create_dir_all(&child).unwrap();
    fs::write(child.join(CONFIG_FILE_NAME), "separate_sheets = true\n").unwrap();

    let config = ConversionConfig::discover_from(&child).unwrap().unwrap();

    assert!(config.separate_sheets);
}

/// Test that per-item overrides only replace the fields they set.
#[test]
fn test_overrides_layer_on_loaded_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "include_row_numbers = true\ncontinue_on_failure = true\n").unwrap();
    let base = ConversionConfig::from_file(&config_path).unwrap();

    let resolved = base.with_overrides(&ConfigOverrides {
        include_row_numbers: Some(false),
        ocr_language: Some("spa".to_string()),
        ..Default::default()
    });

    assert!(!resolved.include_row_numbers);
    assert!(resolved.continue_on_failure);
    assert_eq!(resolved.ocr.language, "spa");
    assert!(base.include_row_numbers, "base config is untouched");
}

/// Test validation of a loaded config.
#[test]
fn test_loaded_config_with_empty_property_fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "binary_property_name = \"\"\n").unwrap();

    let config = ConversionConfig::from_file(&config_path).unwrap();

    assert!(matches!(config.validate(), Err(DocjsonError::Validation { .. })));
}
