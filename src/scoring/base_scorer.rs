//! Base system scorer
//!
//! Turns the per-system scores of one language into a best system, its
//! canonical base label and the list of mixed systems.

use crate::config::Thresholds;
use crate::detectors::SystemScores;
use crate::labels::{CanonicalLabelMap, UNKNOWN_SYSTEM};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What the scorer decided for one language
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorerOutput {
    /// Winning system name, or "Unknown"
    pub best_system: String,
    /// Canonical label of `best_system`
    pub canonical_base: String,
    /// Canonical labels of all systems above the mixed threshold,
    /// highest score first
    pub mixed_systems: Vec<String>,
    /// "System:score" pairs in system name order
    pub summary: String,
}

/// Stateless scorer over one language's `SystemScores`
pub struct BaseSystemScorer<'a> {
    labels: &'a CanonicalLabelMap,
    thresholds: &'a Thresholds,
}

impl<'a> BaseSystemScorer<'a> {
    pub fn new(labels: &'a CanonicalLabelMap, thresholds: &'a Thresholds) -> Self {
        Self { labels, thresholds }
    }

    pub fn score(&self, scores: &SystemScores) -> ScorerOutput {
        let ranked = rank_systems(scores);

        let best_system = match ranked.first() {
            Some((name, score)) if *score >= self.thresholds.best_system_min => name.to_string(),
            _ => UNKNOWN_SYSTEM.to_string(),
        };

        let mixed_systems = ranked
            .iter()
            .filter(|(_, score)| *score > self.thresholds.mixed_system_min)
            .map(|(name, _)| self.labels.system_or_unknown(name).to_string())
            .collect();

        ScorerOutput {
            canonical_base: self.labels.system_or_unknown(&best_system).to_string(),
            best_system,
            mixed_systems,
            summary: score_summary(scores),
        }
    }
}

/// Systems by descending score. Equal scores are ordered by system name,
/// so ties always resolve to the lexicographically smallest name.
pub fn rank_systems(scores: &SystemScores) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores
        .iter()
        .map(|(name, result)| (name.as_str(), result.score))
        .collect();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });
    ranked
}

/// "Fiver:1.00 Tener:0.25 ..." in system name order
pub fn score_summary(scores: &SystemScores) -> String {
    scores
        .iter()
        .map(|(name, result)| format!("{}:{:.2}", name, result.score))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::ScoreResult;

    fn scores(values: &[(&str, f64)]) -> SystemScores {
        values
            .iter()
            .map(|(name, score)| {
                (
                    name.to_string(),
                    ScoreResult {
                        score: *score,
                        coverage: 1,
                        ..Default::default()
                    },
                )
            })
            .collect()
    }

    fn run(values: &[(&str, f64)]) -> ScorerOutput {
        let labels = CanonicalLabelMap::default();
        let thresholds = Thresholds::default();
        BaseSystemScorer::new(&labels, &thresholds).score(&scores(values))
    }

    #[test]
    fn test_best_system() {
        let out = run(&[("Fiver", 1.0), ("Tener", 0.0), ("Twentier", 0.0), ("Twoer", 0.0)]);
        assert_eq!(out.best_system, "Fiver");
        assert_eq!(out.canonical_base, "quinary");
        assert_eq!(out.mixed_systems, vec!["quinary"]);
        assert_eq!(out.summary, "Fiver:1.00 Tener:0.00 Twentier:0.00 Twoer:0.00");
    }

    #[test]
    fn test_low_best_score_becomes_unknown() {
        let out = run(&[("Fiver", 0.04), ("Tener", 0.01)]);
        assert_eq!(out.best_system, UNKNOWN_SYSTEM);
        assert_eq!(out.canonical_base, "unknown");
        assert!(out.mixed_systems.is_empty());
    }

    #[test]
    fn test_threshold_boundaries() {
        // best needs >= 0.05, mixed needs > 0.05
        let out = run(&[("Tener", 0.05)]);
        assert_eq!(out.best_system, "Tener");
        assert!(out.mixed_systems.is_empty());
    }

    #[test]
    fn test_empty_scores() {
        let out = run(&[]);
        assert_eq!(out.best_system, UNKNOWN_SYSTEM);
        assert_eq!(out.canonical_base, "unknown");
        assert!(out.mixed_systems.is_empty());
        assert_eq!(out.summary, "");
    }

    #[test]
    fn test_mixed_systems_descending() {
        let out = run(&[("Fiver", 0.3), ("Tener", 0.9), ("Twentier", 0.5), ("Twoer", 0.02)]);
        assert_eq!(out.best_system, "Tener");
        assert_eq!(out.mixed_systems, vec!["decimal", "vigesimal", "quinary"]);
    }

    #[test]
    fn test_ties_break_by_name() {
        let out = run(&[("Twentier", 0.5), ("Tener", 0.5), ("Fiver", 0.2)]);
        assert_eq!(out.best_system, "Tener");
        assert_eq!(out.mixed_systems, vec!["decimal", "vigesimal", "quinary"]);

        let tied = scores(&[("Twoer", 0.0), ("Fiver", 0.0)]);
        let ranked: Vec<&str> = rank_systems(&tied)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(ranked, vec!["Fiver", "Twoer"]);
    }

    #[test]
    fn test_custom_thresholds() {
        let labels = CanonicalLabelMap::default();
        let thresholds = Thresholds {
            best_system_min: 0.5,
            mixed_system_min: 0.2,
            gold_min_coverage: 0.8,
        };
        let scorer = BaseSystemScorer::new(&labels, &thresholds);
        let out = scorer.score(&scores(&[("Fiver", 0.4), ("Tener", 0.3)]));
        assert_eq!(out.best_system, UNKNOWN_SYSTEM);
        assert_eq!(out.mixed_systems, vec!["quinary", "decimal"]);
    }
}
