//! Configuration module for numeralbank
//!
//! This module handles:
//! - Project-level configuration (numeralbank.toml)
//! - Classification thresholds and gold gating
//! - Canonical label overrides
//! - CLI defaults
//!
//! Configuration problems are fatal and reported before any language is
//! processed.

mod project_config;

pub use project_config::{
    load_project_config, CliDefaults, DetectionConfig, GateSubset, GatingConfig, LabelOverrides,
    ProjectConfig, ReportConfig, Thresholds, CONFIG_FILENAME, EXAMPLE_CONFIG, MAX_WORKERS,
};

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration data
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed {what}: {source}")]
    Json {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("Malformed config file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("System '{0}' has no canonical base label")]
    UnmappedSystem(String),

    #[error("Threshold {name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
