//! Canonical base labels
//!
//! Two lookup tables map onto one shared vocabulary of base names:
//! internal system names ("Tener", "Fiver", ...) and the free-text base
//! annotations found in source datasets ("Decimal", "quinary AND decimal",
//! ...). Anything the annotation table does not know becomes "unknown".

use crate::config::{ConfigError, ConfigResult};
use crate::relations::RelationTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel system chosen when no system scores high enough
pub const UNKNOWN_SYSTEM: &str = "Unknown";
/// Canonical label of the sentinel and of unmapped annotations
pub const UNKNOWN_BASE: &str = "unknown";

const SYSTEM_LABELS: &[(&str, &str)] = &[
    ("Tener", "decimal"),
    ("Twoer", "binary"),
    ("Twentier", "vigesimal"),
    ("Fiver", "quinary"),
    (UNKNOWN_SYSTEM, UNKNOWN_BASE),
];

const ANNOTATION_LABELS: &[(&str, &str)] = &[
    ("Decimal", "decimal"),
    ("decimal", "decimal"),
    ("Decimal-Vigesimal", "decimal/vigesimal"),
    ("Vigesimal", "vigesimal"),
    ("Restricted", "restricted"),
    ("vigesimal", "vigesimal"),
    ("quinary", "quinary"),
    ("quinary AND decimal", "quinary/decimal"),
    ("quinary AND vigesimal", "quinary/vigesimal"),
    ("binary", "binary"),
    ("decimal AND vigesimal", "decimal/vigesimal"),
    ("duodecimal", "duodecimal"),
    ("octal", "octal"),
    ("quinary OR decimal", "quinary/decimal"),
    ("quinary AND vigesimal OR decimal", "quinary/vigesimal"),
    ("quinary AND double decimal", "quinary/decimal"),
    ("octal AND decimal", "octal"),
    (
        "octal AND duodecimal AND hexadecimal AND vigesimal AND tetravigesimal",
        "octal",
    ),
];

/// Immutable system/annotation → canonical label tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalLabelMap {
    systems: BTreeMap<String, String>,
    annotations: BTreeMap<String, String>,
}

impl Default for CanonicalLabelMap {
    fn default() -> Self {
        let collect = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self {
            systems: collect(SYSTEM_LABELS),
            annotations: collect(ANNOTATION_LABELS),
        }
    }
}

impl CanonicalLabelMap {
    /// Merge override entries over the current tables
    pub fn with_overrides(
        mut self,
        systems: &BTreeMap<String, String>,
        annotations: &BTreeMap<String, String>,
    ) -> Self {
        self.systems
            .extend(systems.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.annotations
            .extend(annotations.iter().map(|(k, v)| (k.clone(), v.clone())));
        // the sentinel always means unknown
        self.systems
            .insert(UNKNOWN_SYSTEM.to_string(), UNKNOWN_BASE.to_string());
        self
    }

    /// Canonical label of an internal system name
    pub fn system(&self, name: &str) -> Option<&str> {
        self.systems.get(name).map(String::as_str)
    }

    /// Canonical label of a system, "unknown" when unmapped
    pub fn system_or_unknown(&self, name: &str) -> &str {
        self.system(name).unwrap_or(UNKNOWN_BASE)
    }

    /// Canonical label of a free-text source annotation
    pub fn annotation(&self, raw: Option<&str>) -> &str {
        raw.map(str::trim)
            .and_then(|r| self.annotations.get(r))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_BASE)
    }

    /// Every system of the relation table must have a canonical label.
    pub fn validate(&self, relations: &RelationTable) -> ConfigResult<()> {
        for system in relations.system_names() {
            if !self.systems.contains_key(system) {
                return Err(ConfigError::UnmappedSystem(system.to_string()));
            }
        }
        Ok(())
    }
}
