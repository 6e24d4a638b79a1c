//! Per-language classification against gold annotations
//!
//! Builds the output record of one language and, when its gold annotation is
//! comparable, the accuracy samples and error evidence for it. Nothing here
//! touches shared state; the `Accumulator` folds results together.

use crate::concepts::{coverage, ConceptList};
use crate::config::{GatingConfig, Thresholds};
use crate::detectors::SystemScores;
use crate::labels::{CanonicalLabelMap, UNKNOWN_BASE};
use crate::models::{FormRecord, Language, LanguageRecord};
use crate::normalize::{simple_chars, slug};
use crate::scoring::ScorerOutput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Coverage figures of one language
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoverageStats {
    /// Master concept list
    pub overall: f64,
    /// 1..30 subset
    pub one_to_thirty: f64,
    /// Subset used for gating gold comparison
    pub gate: f64,
}

impl CoverageStats {
    pub fn compute(language: &Language, concepts: &ConceptList, gating: &GatingConfig) -> Self {
        Self {
            overall: coverage(language, &concepts.glosses()),
            one_to_thirty: coverage(language, &concepts.one_to_thirty()),
            gate: coverage(language, &gating.subset.glosses(concepts)),
        }
    }
}

/// One row of colexification evidence in the error report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRow {
    pub concept: String,
    /// Normalized forms joined with " / "
    pub forms: String,
    /// Colexified target concept per evidence system, empty when none
    pub targets: Vec<String>,
}

/// A language whose predicted base differs from its gold base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// Canonical gold label
    pub gold: String,
    /// Predicted system name (may be "Unknown")
    pub predicted: String,
    pub language_id: String,
    pub language_name: String,
    /// Per-system score summary
    pub scores: String,
    /// system → (conceptA → conceptB)
    pub colexis: BTreeMap<String, BTreeMap<String, String>>,
    pub evidence: Vec<EvidenceRow>,
}

/// Accuracy samples of a language that passed the gold gate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub exact: bool,
    /// 1/|mixed| if gold is among the mixed systems, else 0
    pub mixed_credit: f64,
    pub error: Option<ErrorEntry>,
}

/// Everything classification produced for one language
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub record: LanguageRecord,
    pub forms: Vec<FormRecord>,
    pub comparison: Option<Comparison>,
}

/// Compares scorer output with gold annotations
pub struct BaseClassifier<'a> {
    labels: &'a CanonicalLabelMap,
    thresholds: &'a Thresholds,
    gating: &'a GatingConfig,
    concepts: &'a ConceptList,
    evidence_systems: &'a [String],
}

impl<'a> BaseClassifier<'a> {
    pub fn new(
        labels: &'a CanonicalLabelMap,
        thresholds: &'a Thresholds,
        gating: &'a GatingConfig,
        concepts: &'a ConceptList,
        evidence_systems: &'a [String],
    ) -> Self {
        Self {
            labels,
            thresholds,
            gating,
            concepts,
            evidence_systems,
        }
    }

    /// Gold label as mapped from the source annotation
    pub fn gold_in_source(&self, language: &Language) -> &'a str {
        self.labels.annotation(language.base.as_deref())
    }

    /// Gold takes part in accuracy accounting only for a comparable base
    /// and enough coverage of the gating subset.
    pub fn is_comparable(&self, gold: &str, coverage: &CoverageStats) -> bool {
        self.gating.comparable_bases.iter().any(|b| b == gold)
            && coverage.gate >= self.thresholds.gold_min_coverage
    }

    pub fn classify(
        &self,
        language: &Language,
        scores: &SystemScores,
        scored: &ScorerOutput,
        coverage: CoverageStats,
    ) -> Classification {
        let base_in_source = self.gold_in_source(language);
        let comparable = self.is_comparable(base_in_source, &coverage);
        let gold = if comparable { base_in_source } else { UNKNOWN_BASE };

        let comparison = comparable.then(|| {
            let exact = scored.canonical_base == gold;
            let mixed_credit = if scored.mixed_systems.iter().any(|m| m == gold) {
                1.0 / scored.mixed_systems.len() as f64
            } else {
                0.0
            };
            let error = (!exact).then(|| self.error_entry(language, scores, scored, gold));
            Comparison {
                exact,
                mixed_credit,
                error,
            }
        });

        let record = LanguageRecord {
            id: language.id.clone(),
            name: language.name.clone(),
            glottocode: language.glottocode.clone(),
            latitude: language.latitude,
            longitude: language.longitude,
            macroarea: language.macroarea.clone(),
            bases: scored.summary.clone(),
            best_base: scored.canonical_base.clone(),
            base: gold.to_string(),
            coverage: coverage.overall,
            one_to_thirty: coverage.one_to_thirty,
            base_in_source: base_in_source.to_string(),
        };

        Classification {
            record,
            forms: self.form_records(language),
            comparison,
        }
    }

    fn error_entry(
        &self,
        language: &Language,
        scores: &SystemScores,
        scored: &ScorerOutput,
        gold: &str,
    ) -> ErrorEntry {
        let colexis: BTreeMap<String, BTreeMap<String, String>> = scores
            .iter()
            .map(|(system, result)| (system.clone(), result.colexis.clone()))
            .collect();

        let evidence = language
            .concepts
            .iter()
            .filter(|c| self.concepts.contains(&c.id))
            .map(|concept| EvidenceRow {
                concept: concept.id.clone(),
                forms: concept
                    .forms
                    .iter()
                    .map(|f| simple_chars(f.text()))
                    .collect::<Vec<_>>()
                    .join(" / "),
                targets: self
                    .evidence_systems
                    .iter()
                    .map(|system| {
                        colexis
                            .get(system)
                            .and_then(|m| m.get(&concept.id))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect(),
            })
            .collect();

        ErrorEntry {
            gold: gold.to_string(),
            predicted: scored.best_system.clone(),
            language_id: language.id.clone(),
            language_name: language.name.clone(),
            scores: scored.summary.clone(),
            colexis,
            evidence,
        }
    }

    /// Output rows for every form of a concept in the master list
    fn form_records(&self, language: &Language) -> Vec<FormRecord> {
        language
            .concepts
            .iter()
            .filter(|c| self.concepts.contains(&c.id))
            .flat_map(|concept| {
                concept.forms.iter().map(move |form| FormRecord {
                    language_id: language.id.clone(),
                    parameter_id: slug(&concept.id),
                    value: form.value.clone(),
                    form: simple_chars(form.text()),
                    number_value: self.concepts.number_value(&concept.id),
                })
            })
            .collect()
    }
}
