//! Error types for rocket-core
//!
//! Provides error handling for:
//! - Loading (re-exported from rocket-io)
//! - Cleaning
//! - Feature derivation and buy decisions
//! - Pipeline ordering
//! - Configuration

use crate::record::Column;
use rocket_io::IoError;
use thiserror::Error;

/// Main error type for pipeline runs
#[derive(Error, Debug)]
pub enum EstateError {
    /// Input could not be read or decoded
    #[error("Failed to load dataset: {0}")]
    Load(#[from] IoError),

    /// Cleaning failed
    #[error("Cleaning failed: {0}")]
    Clean(#[from] CleanError),

    /// A feature transform failed
    #[error("Feature failed: {0}")]
    Feature(#[from] FeatureError),

    /// Transforms could not be ordered
    #[error("Invalid pipeline: {0}")]
    Pipeline(#[from] PipelineError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl EstateError {
    /// True for malformed input (bad schema, field or date)
    pub fn is_parse_error(&self) -> bool {
        match self {
            EstateError::Load(e) => e.is_parse_error(),
            EstateError::Clean(_) => true,
            _ => false,
        }
    }
}

/// Errors raised while cleaning raw sales
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CleanError {
    #[error("Unparseable date '{value}' for sale {id} (expected format {format})")]
    InvalidDate {
        id: i64,
        value: String,
        format: String,
    },
}

/// Errors raised by feature transforms and the buy decision
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    /// Zero or negative divisor for a ratio column
    #[error("Division by zero {field} for property {id}")]
    Division { id: i64, field: &'static str },

    /// A transform ran before the column it needs was derived
    #[error("{stage} requires column '{column}' which is not present")]
    MissingColumn { stage: &'static str, column: Column },

    /// A record lacks a value for a column the table claims to have
    #[error("Property {id} has no value for '{column}'")]
    MissingValue { id: i64, column: Column },
}

/// Result type for feature transforms
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Errors raised while ordering transforms by their declared columns
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("{stage} requires '{column}' but no stage provides it")]
    Unsatisfied { stage: &'static str, column: Column },

    #[error("Dependency cycle between stages: {}", .0.join(", "))]
    Cycle(Vec<&'static str>),
}

/// Configuration loading and validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Cannot read config {path}: {message}")]
    Read { path: String, message: String },

    #[error("Cannot parse config: {0}")]
    Parse(String),

    #[error("Value out of range: {0}")]
    OutOfRange(String),
}

/// Result type for pipeline operations
pub type EstateResult<T> = Result<T, EstateError>;
