//! Detection result types
//!
//! - `ScoreResult` captures what one base system scored for one language
//! - `SystemScores` maps every system of the relation table to its result
//! - `MatchMode` selects how two normalized forms are compared

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of scoring one base system against one language
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// hits / coverage, or 0 when nothing was evaluable
    pub score: f64,
    /// Evaluable triples that matched
    pub hits: usize,
    /// Evaluable triples (both concepts present in the language)
    pub coverage: usize,
    /// conceptA → conceptB for triples that matched, first match wins
    pub colexis: BTreeMap<String, String>,
}

impl ScoreResult {
    /// Record one evaluable triple
    pub fn add(&mut self, concept_a: &str, concept_b: &str, hit: bool) {
        self.coverage += 1;
        if hit {
            self.hits += 1;
            self.colexis
                .entry(concept_a.to_string())
                .or_insert_with(|| concept_b.to_string());
        }
        self.score = self.hits as f64 / self.coverage as f64;
    }
}

/// Per-system scores for one language, ordered by system name
pub type SystemScores = BTreeMap<String, ScoreResult>;

/// How a form of concept A is matched against a form of concept B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// A occurs as a contiguous substring of B
    #[default]
    Substring,
    /// A and B share a stem of at least `min_shared_stem` characters,
    /// measured by local alignment
    Alignment,
}
