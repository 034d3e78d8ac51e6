//! Configuration loading and management.
//!
//! [`ConversionConfig`] holds the options that shape a conversion. It can be
//! built programmatically, loaded from TOML, YAML or JSON files, or discovered
//! as `docjson.toml` in the working directory hierarchy. Individual items may
//! carry [`ConfigOverrides`] that are applied on top of the batch configuration
//! each time an item is processed.

use crate::types::InputItem;
use crate::{DocjsonError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name searched for by [`ConversionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "docjson.toml";

/// Main conversion configuration.
///
/// # Example
///
/// ```rust
/// use docjson::ConversionConfig;
///
/// let config = ConversionConfig::default();
/// assert_eq!(config.binary_property_name, "data");
/// assert!(config.include_file_name);
/// assert!(!config.separate_sheets);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Name of the attachment to read from each item
    #[serde(default = "default_binary_property")]
    pub binary_property_name: String,

    /// Add the source file name to every output record
    #[serde(default = "default_true")]
    pub include_file_name: bool,

    /// Label sheet-derived records with their sheet name (spreadsheets only)
    #[serde(default = "default_true")]
    pub include_sheet_name: bool,

    /// Annotate spreadsheet and CSV rows with their row number
    #[serde(default)]
    pub include_row_numbers: bool,

    /// Emit one output record per worksheet (spreadsheets only)
    #[serde(default)]
    pub separate_sheets: bool,

    /// Record failures as `{error}` items instead of aborting the batch
    #[serde(default)]
    pub continue_on_failure: bool,

    /// OCR settings for image inputs
    #[serde(default)]
    pub ocr: OcrConfig,
}

/// OCR configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language code
    #[serde(default = "default_eng")]
    pub language: String,

    /// Which engine performs recognition
    #[serde(default)]
    pub engine: OcrEngineKind,

    /// Explicit path to the `tesseract` executable (CLI engine only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesseract_path: Option<PathBuf>,
}

/// Available OCR engines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OcrEngineKind {
    /// Spawn the `tesseract` executable for each image
    #[default]
    TesseractCli,
    /// Call libtesseract in-process (requires the `ocr-native` feature)
    TesseractNative,
}

/// Per-item parameter values.
///
/// `None` fields fall back to the batch configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_file_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_sheet_name: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_row_numbers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separate_sheets: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continue_on_failure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr_language: Option<String>,
}

fn default_true() -> bool {
    true
}
fn default_binary_property() -> String {
    "data".to_string()
}
fn default_eng() -> String {
    "eng".to_string()
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            binary_property_name: default_binary_property(),
            include_file_name: true,
            include_sheet_name: true,
            include_row_numbers: false,
            separate_sheets: false,
            continue_on_failure: false,
            ocr: OcrConfig::default(),
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_eng(),
            engine: OcrEngineKind::default(),
            tesseract_path: None,
        }
    }
}

impl ConversionConfig {
    /// Configuration in effect for one item: this config with the item's
    /// overrides applied.
    pub fn resolve_for(&self, item: &InputItem) -> ConversionConfig {
        match &item.parameters {
            Some(overrides) => self.with_overrides(overrides),
            None => self.clone(),
        }
    }

    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> ConversionConfig {
        let mut resolved = self.clone();
        if let Some(name) = &overrides.binary_property_name {
            resolved.binary_property_name = name.clone();
        }
        if let Some(value) = overrides.include_file_name {
            resolved.include_file_name = value;
        }
        if let Some(value) = overrides.include_sheet_name {
            resolved.include_sheet_name = value;
        }
        if let Some(value) = overrides.include_row_numbers {
            resolved.include_row_numbers = value;
        }
        if let Some(value) = overrides.separate_sheets {
            resolved.separate_sheets = value;
        }
        if let Some(value) = overrides.continue_on_failure {
            resolved.continue_on_failure = value;
        }
        if let Some(language) = &overrides.ocr_language {
            resolved.ocr.language = language.clone();
        }
        resolved
    }

    /// Reject configurations that cannot work for any item.
    pub fn validate(&self) -> Result<()> {
        if self.binary_property_name.trim().is_empty() {
            return Err(DocjsonError::validation("binary_property_name cannot be empty"));
        }
        if self.ocr.language.trim().is_empty() {
            return Err(DocjsonError::validation(
                "ocr.language cannot be empty. Please specify a Tesseract language code (e.g., 'eng')",
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DocjsonError::Validation` if the file can't be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        toml::from_str(&content)
            .map_err(|e| DocjsonError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| DocjsonError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;
        serde_json::from_str(&content)
            .map_err(|e| DocjsonError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, picking the parser from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "toml" => Self::from_toml_file(path),
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            other => Err(DocjsonError::validation(format!(
                "Unsupported config format '{}' for {}. Use .toml, .yaml, .yml or .json",
                other,
                path.display()
            ))),
        }
    }

    /// Discover `docjson.toml` in the current directory or its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let current = std::env::current_dir().map_err(DocjsonError::Io)?;
        Self::discover_from(&current)
    }

    /// Like [`discover`](Self::discover), starting at `start`.
    pub fn discover_from(start: &Path) -> Result<Option<Self>> {
        let mut current = Some(start);

        while let Some(dir) = current {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "Using discovered config file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }
            current = dir.parent();
        }

        Ok(None)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| DocjsonError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}
