//! Configuration for rocket-core
//!
//! One explicit object carries every tunable of a run: cleaning rules,
//! feature policies, the buy threshold and display settings. It is built
//! once at startup and passed down; nothing reads ambient state.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "HOUSE_ROCKET_CONFIG";

/// Run-wide configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstateConfig {
    /// Cleaning rules
    pub cleaning: CleaningConfig,
    /// Feature transform policies
    pub features: FeatureConfig,
    /// Buy decision thresholds
    pub decision: DecisionConfig,
    /// Output formatting for the rendering side
    pub display: DisplayConfig,
}

/// Cleaning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// chrono format string for the `date` column
    pub date_format: String,
    /// Decimal places kept for `floors`
    pub floors_precision: u32,
    /// Known data-entry errors in `bedrooms`
    pub bedroom_corrections: Vec<BedroomCorrection>,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            floors_precision: 1,
            bedroom_corrections: vec![BedroomCorrection { from: 33, to: 3 }],
        }
    }
}

/// Replace a bedroom count known to be a typo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedroomCorrection {
    pub from: u32,
    pub to: u32,
}

/// What to do with a record whose price per area is undefined
///
/// Covers a non-positive living area and a non-positive price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroAreaPolicy {
    /// Remove the record and log it
    #[default]
    Drop,
    /// Abort the run
    Fail,
}

/// Feature transform configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    pub zero_area: ZeroAreaPolicy,
}

/// Buy decision configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// Minimum `expected_price / price` (exclusive) for a purchase
    pub margin_ratio: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self { margin_ratio: 1.6 }
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for rendered floats
    pub float_precision: u32,
    /// Rows shown in previews of the recommendation table
    pub preview_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            float_precision: 2,
            preview_rows: 50,
        }
    }
}

impl EstateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load and validate a TOML or JSON file (by extension)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text)?,
            _ => Self::from_toml(&text)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Default location: `<config_dir>/house-rocket/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("house-rocket").join("config.toml"))
    }

    /// Resolve the configuration for a run
    ///
    /// Order: `$HOUSE_ROCKET_CONFIG`, then the default path if it exists,
    /// then built-in defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            tracing::debug!(%path, "loading config from {}", CONFIG_ENV);
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(path)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.decision.margin_ratio.is_finite() && self.decision.margin_ratio > 0.0) {
            return Err(ConfigError::OutOfRange(
                "decision.margin_ratio must be a positive number".to_string(),
            ));
        }

        if self.cleaning.date_format.trim().is_empty() {
            return Err(ConfigError::OutOfRange(
                "cleaning.date_format must not be empty".to_string(),
            ));
        }

        if self.cleaning.floors_precision > 6 || self.display.float_precision > 6 {
            return Err(ConfigError::OutOfRange(
                "precision settings must be between 0 and 6".to_string(),
            ));
        }

        for (i, a) in self.cleaning.bedroom_corrections.iter().enumerate() {
            if self.cleaning.bedroom_corrections[..i]
                .iter()
                .any(|b| b.from == a.from)
            {
                return Err(ConfigError::OutOfRange(format!(
                    "bedroom correction for {} is listed twice",
                    a.from
                )));
            }
        }

        Ok(())
    }
}
