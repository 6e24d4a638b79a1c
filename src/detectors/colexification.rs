//! Colexification detector
//!
//! For every base system in the relation table, counts how many of its
//! `partial` triples (A, B) show a form of A inside a form of B. Triples
//! whose concepts are missing from the language are skipped: a missing
//! concept is not a miss and does not count towards coverage.

use crate::alignment::common_substring;
use crate::detectors::base::{MatchMode, ScoreResult, SystemScores};
use crate::models::Language;
use crate::normalize::simple_chars;
use crate::relations::{Relation, RelationTable};
use std::collections::HashMap;
use tracing::trace;

/// Thresholds for colexification matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColexificationOptions {
    pub mode: MatchMode,
    /// Minimum shared stem length in alignment mode
    pub min_shared_stem: usize,
}

impl Default for ColexificationOptions {
    fn default() -> Self {
        Self {
            mode: MatchMode::Substring,
            min_shared_stem: 3,
        }
    }
}

/// Scores every base system of a relation table against one language
#[derive(Debug, Clone, Default)]
pub struct ColexificationDetector {
    options: ColexificationOptions,
}

/// Normalized forms per concept gloss. Concepts without usable forms are
/// present with an empty list.
type NormalizedForms<'a> = HashMap<&'a str, Vec<String>>;

impl ColexificationDetector {
    /// Substring matching
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ColexificationOptions) -> Self {
        Self { options }
    }

    /// Score all systems of `relations` for `language`
    pub fn detect(&self, language: &Language, relations: &RelationTable) -> SystemScores {
        let forms = normalized_forms(language);
        relations
            .iter()
            .map(|(system, triples)| {
                let result = self.score_system(&forms, triples);
                trace!(
                    "{}: {} {}/{} -> {:.2}",
                    language.id,
                    system,
                    result.hits,
                    result.coverage,
                    result.score
                );
                (system.to_string(), result)
            })
            .collect()
    }

    fn score_system(&self, forms: &NormalizedForms<'_>, triples: &[Relation]) -> ScoreResult {
        let mut result = ScoreResult::default();
        for triple in triples.iter().filter(|t| t.is_partial()) {
            let (Some(forms_a), Some(forms_b)) = (
                forms.get(triple.concept_a.as_str()),
                forms.get(triple.concept_b.as_str()),
            ) else {
                continue;
            };
            let hit = forms_a
                .iter()
                .any(|a| forms_b.iter().any(|b| self.matches(a, b)));
            result.add(&triple.concept_a, &triple.concept_b, hit);
        }
        result
    }

    /// Direction matters: A is looked for inside B.
    fn matches(&self, form_a: &str, form_b: &str) -> bool {
        match self.options.mode {
            MatchMode::Substring => form_b.contains(form_a),
            MatchMode::Alignment => {
                common_substring(form_a, form_b) >= self.options.min_shared_stem.max(1)
            }
        }
    }
}

fn normalized_forms(language: &Language) -> NormalizedForms<'_> {
    let mut forms: NormalizedForms<'_> = HashMap::new();
    for concept in &language.concepts {
        let entry = forms.entry(concept.id.as_str()).or_default();
        // an empty string would be contained in every form
        entry.extend(
            concept
                .forms
                .iter()
                .map(|f| simple_chars(f.text()))
                .filter(|f| !f.is_empty()),
        );
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Concept;

    fn language(concepts: Vec<Concept>) -> Language {
        Language {
            id: "test".into(),
            concepts,
            ..Default::default()
        }
    }

    fn fiver(triples: &[(&str, &str)]) -> RelationTable {
        RelationTable::new().with_system(
            "Fiver",
            triples
                .iter()
                .map(|(a, b)| Relation::partial(*a, *b))
                .collect(),
        )
    }

    #[test]
    fn test_contained_form_is_a_hit() {
        let lang = language(vec![
            Concept::new("ONE", &["tak"]),
            Concept::new("FIVE", &["taklim"]),
        ]);
        let scores = ColexificationDetector::new().detect(&lang, &fiver(&[("ONE", "FIVE")]));
        let fiver = &scores["Fiver"];
        assert_eq!(fiver.score, 1.0);
        assert_eq!(fiver.coverage, 1);
        assert_eq!(fiver.colexis.get("ONE").map(String::as_str), Some("FIVE"));
    }

    #[test]
    fn test_direction_matters() {
        let lang = language(vec![
            Concept::new("ONE", &["tak"]),
            Concept::new("FIVE", &["taklim"]),
        ]);
        let scores = ColexificationDetector::new().detect(&lang, &fiver(&[("FIVE", "ONE")]));
        assert_eq!(scores["Fiver"].score, 0.0);
        assert_eq!(scores["Fiver"].coverage, 1);
        assert!(scores["Fiver"].colexis.is_empty());
    }

    #[test]
    fn test_missing_concept_is_skipped() {
        let lang = language(vec![
            Concept::new("ONE", &["tak"]),
            Concept::new("SIX", &["lim"]),
        ]);
        let table = fiver(&[("ONE", "SIX"), ("TWO", "SEVEN"), ("ONE", "ELEVEN")]);
        let scores = ColexificationDetector::new().detect(&lang, &table);
        assert_eq!(scores["Fiver"].coverage, 1);
        assert_eq!(scores["Fiver"].hits, 0);
        assert_eq!(scores["Fiver"].score, 0.0);
    }

    #[test]
    fn test_no_evaluable_triples() {
        let lang = language(vec![]);
        let table = fiver(&[("ONE", "SIX")]).with_system("Tener", vec![]);
        let scores = ColexificationDetector::new().detect(&lang, &table);
        assert_eq!(scores.len(), 2);
        for result in scores.values() {
            assert_eq!(result.score, 0.0);
            assert_eq!(result.coverage, 0);
        }
    }

    #[test]
    fn test_non_partial_triples_are_ignored() {
        let lang = language(vec![
            Concept::new("ONE", &["tak"]),
            Concept::new("SIX", &["limtak"]),
        ]);
        let table = RelationTable::from_json(
            r#"{"Fiver": [["full", "ONE", "SIX"], ["partial", "ONE", "SIX"]]}"#,
        )
        .expect("parse table");
        let scores = ColexificationDetector::new().detect(&lang, &table);
        assert_eq!(scores["Fiver"].coverage, 1);
        assert_eq!(scores["Fiver"].hits, 1);
        assert!(scores["Fiver"].coverage <= table.partial_count("Fiver"));
    }

    #[test]
    fn test_forms_are_normalized() {
        let lang = language(vec![
            Concept::new("ONE", &["Ták"]),
            Concept::new("SIX", &["lim-ták"]),
        ]);
        let scores = ColexificationDetector::new().detect(&lang, &fiver(&[("ONE", "SIX")]));
        assert_eq!(scores["Fiver"].hits, 1);
    }

    #[test]
    fn test_any_form_pair_counts_once() {
        let lang = language(vec![
            Concept::new("ONE", &["tak", "po"]),
            Concept::new("SIX", &["limpo", "taklim"]),
        ]);
        let scores = ColexificationDetector::new().detect(&lang, &fiver(&[("ONE", "SIX")]));
        assert_eq!(scores["Fiver"].hits, 1);
        assert_eq!(scores["Fiver"].score, 1.0);
    }

    #[test]
    fn test_empty_normalized_form_never_matches() {
        let lang = language(vec![
            Concept::new("ONE", &["+"]),
            Concept::new("SIX", &["lim"]),
        ]);
        let scores = ColexificationDetector::new().detect(&lang, &fiver(&[("ONE", "SIX")]));
        assert_eq!(scores["Fiver"].coverage, 1);
        assert_eq!(scores["Fiver"].hits, 0);
    }

    #[test]
    fn test_alignment_mode_matches_shared_stem() {
        let lang = language(vec![
            Concept::new("TEN", &["kumi"]),
            Concept::new("ELEVEN", &["kumna"]),
        ]);
        let table = RelationTable::new()
            .with_system("Tener", vec![Relation::partial("TEN", "ELEVEN")]);

        let substring = ColexificationDetector::new().detect(&lang, &table);
        assert_eq!(substring["Tener"].hits, 0);

        let aligned = ColexificationDetector::with_options(ColexificationOptions {
            mode: MatchMode::Alignment,
            min_shared_stem: 3,
        })
        .detect(&lang, &table);
        assert_eq!(aligned["Tener"].hits, 1);
    }
}
