//! Project-level configuration support
//!
//! Loads configuration from `numeralbank.toml` in the working directory or
//! from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # numeralbank.toml
//!
//! [thresholds]
//! best_system_min = 0.05
//! mixed_system_min = 0.05
//! gold_min_coverage = 0.8
//!
//! [detection]
//! mode = "substring"        # or "alignment"
//! min_shared_stem = 3
//!
//! [gating]
//! subset = "one-to-thirty"
//! comparable_bases = ["quinary", "binary", "decimal", "vigesimal"]
//!
//! [labels.systems]
//! Twelver = "duodecimal"
//!
//! [report]
//! evidence_systems = ["Fiver", "Twoer", "Tener", "Twentier"]
//!
//! [defaults]
//! workers = 8
//! format = "text"
//! ```

use super::{ConfigError, ConfigResult};
use crate::concepts::ConceptList;
use crate::detectors::{ColexificationOptions, MatchMode};
use crate::labels::CanonicalLabelMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILENAME: &str = "numeralbank.toml";

/// Example configuration written by `numeralbank init`
pub const EXAMPLE_CONFIG: &str = r#"# numeralbank configuration

[thresholds]
# Best system falls back to "Unknown" below this score
best_system_min = 0.05
# Systems above this score are listed as mixed systems
mixed_system_min = 0.05
# Minimum coverage of the gating subset for gold comparison
gold_min_coverage = 0.8

[detection]
# How forms are compared: "substring" (form of A inside form of B)
# or "alignment" (shared stem of at least min_shared_stem characters)
mode = "substring"
min_shared_stem = 3

[gating]
# Concept subset used for the coverage gate: "one-to-thirty" or "one-to-forty"
subset = "one-to-thirty"
# Gold labels that take part in accuracy accounting
comparable_bases = ["quinary", "binary", "decimal", "vigesimal"]

[labels.systems]
# Twelver = "duodecimal"

[labels.annotations]
# "dozenal" = "duodecimal"

[report]
# Systems shown as columns in the error report
evidence_systems = ["Fiver", "Twoer", "Tener", "Twentier"]

[defaults]
# workers = 8
# format = "text"
"#;

/// Project configuration loaded from numeralbank.toml
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub thresholds: Thresholds,

    #[serde(default)]
    pub detection: DetectionConfig,

    #[serde(default)]
    pub gating: GatingConfig,

    /// Canonical label overrides
    #[serde(default)]
    pub labels: LabelOverrides,

    #[serde(default)]
    pub report: ReportConfig,

    /// Default CLI flags
    #[serde(default)]
    pub defaults: CliDefaults,
}

/// Score cut-offs used by the scorer and the classifier
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Thresholds {
    /// Best system is replaced by "Unknown" below this score (default: 0.05)
    #[serde(default = "default_system_min")]
    pub best_system_min: f64,

    /// Mixed systems must score strictly above this (default: 0.05)
    #[serde(default = "default_system_min")]
    pub mixed_system_min: f64,

    /// Gold comparison needs at least this gating-subset coverage (default: 0.8)
    #[serde(default = "default_gold_min_coverage")]
    pub gold_min_coverage: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            best_system_min: default_system_min(),
            mixed_system_min: default_system_min(),
            gold_min_coverage: default_gold_min_coverage(),
        }
    }
}

fn default_system_min() -> f64 {
    0.05
}

fn default_gold_min_coverage() -> f64 {
    0.8
}

impl Thresholds {
    fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("best_system_min", self.best_system_min),
            ("mixed_system_min", self.mixed_system_min),
            ("gold_min_coverage", self.gold_min_coverage),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }
}

/// Form matching used by the colexification detector
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DetectionConfig {
    #[serde(default)]
    pub mode: MatchMode,

    /// Shared stem length needed in alignment mode (default: 3)
    #[serde(default = "default_min_shared_stem")]
    pub min_shared_stem: usize,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            mode: MatchMode::default(),
            min_shared_stem: default_min_shared_stem(),
        }
    }
}

fn default_min_shared_stem() -> usize {
    3
}

impl DetectionConfig {
    pub fn options(&self) -> ColexificationOptions {
        ColexificationOptions {
            mode: self.mode,
            min_shared_stem: self.min_shared_stem,
        }
    }
}

/// Which concept subset gates gold comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GateSubset {
    /// Concepts flagged with test "1"
    #[default]
    OneToThirty,
    /// Concepts flagged with test "1" or "2"
    OneToForty,
}

impl GateSubset {
    pub fn glosses<'a>(&self, concepts: &'a ConceptList) -> Vec<&'a str> {
        match self {
            GateSubset::OneToThirty => concepts.one_to_thirty(),
            GateSubset::OneToForty => concepts.one_to_forty(),
        }
    }
}

/// Gold comparison gating
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct GatingConfig {
    #[serde(default)]
    pub subset: GateSubset,

    /// Canonical gold labels eligible for accuracy accounting
    #[serde(default = "default_comparable_bases")]
    pub comparable_bases: Vec<String>,
}

impl Default for GatingConfig {
    fn default() -> Self {
        Self {
            subset: GateSubset::default(),
            comparable_bases: default_comparable_bases(),
        }
    }
}

fn default_comparable_bases() -> Vec<String> {
    ["quinary", "binary", "decimal", "vigesimal"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Entries merged over the built-in canonical label tables
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct LabelOverrides {
    #[serde(default)]
    pub systems: BTreeMap<String, String>,
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}

impl LabelOverrides {
    pub fn label_map(&self) -> CanonicalLabelMap {
        CanonicalLabelMap::default().with_overrides(&self.systems, &self.annotations)
    }
}

/// Error report settings
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct ReportConfig {
    /// Systems shown as evidence columns
    #[serde(default = "default_evidence_systems")]
    pub evidence_systems: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            evidence_systems: default_evidence_systems(),
        }
    }
}

fn default_evidence_systems() -> Vec<String> {
    ["Fiver", "Twoer", "Tener", "Twentier"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Upper bound on worker threads, shared with `--workers`
pub const MAX_WORKERS: usize = 64;

/// Default CLI flags from the config file
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
pub struct CliDefaults {
    #[serde(default)]
    pub workers: Option<usize>,

    #[serde(default)]
    pub format: Option<String>,
}

impl ProjectConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str, path: &Path) -> ConfigResult<Self> {
        let config: ProjectConfig = toml::from_str(content).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        self.thresholds.validate()?;
        if self.detection.min_shared_stem == 0 {
            return Err(ConfigError::Invalid(
                "detection.min_shared_stem must be at least 1".to_string(),
            ));
        }
        if self.gating.comparable_bases.is_empty() {
            return Err(ConfigError::Invalid(
                "gating.comparable_bases must not be empty".to_string(),
            ));
        }
        if let Some(workers) = self.defaults.workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(ConfigError::Invalid(format!(
                    "defaults.workers must be between 1 and {}, got {}",
                    MAX_WORKERS, workers
                )));
            }
        }
        Ok(())
    }
}

/// Load project configuration.
///
/// An explicit path must exist. Otherwise `numeralbank.toml` in `dir` is
/// used when present, and defaults when not. A file that exists but does
/// not parse is an error.
pub fn load_project_config(explicit: Option<&Path>, dir: &Path) -> ConfigResult<ProjectConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = dir.join(CONFIG_FILENAME);
            if !candidate.exists() {
                debug!("No project config found, using defaults");
                return Ok(ProjectConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: path.clone(),
        source: e,
    })?;
    let config = ProjectConfig::from_toml(&content, &path)?;
    debug!("Loaded project config from {}", path.display());
    Ok(config)
}
