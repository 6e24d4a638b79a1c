//! Serial fold of per-language classifications

use super::base_classifier::{Classification, ErrorEntry};
use crate::models::{FormRecord, LanguageRecord};
use serde::{Deserialize, Serialize};

/// Exact and mixed accuracy over all compared languages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracySummary {
    /// Languages that passed the gold gate
    pub compared: usize,
    pub exact_hits: usize,
    pub exact_fails: usize,
    /// None when no language was compared
    pub exact_rate: Option<f64>,
    /// Sum of partial mixed credits
    pub mixed_credit: f64,
    /// Languages whose gold was not among the mixed systems
    pub mixed_fails: usize,
    pub mixed_rate: Option<f64>,
}

/// Render a rate, or "no data" when nothing was compared
pub fn format_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) => format!("{:.2}", r),
        None => "no data".to_string(),
    }
}

/// Errors sharing one (gold, predicted) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorGroup {
    pub gold: String,
    pub predicted: String,
    pub entries: Vec<ErrorEntry>,
}

/// Final output of an analysis run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub languages: Vec<LanguageRecord>,
    pub forms: Vec<FormRecord>,
    pub accuracy: AccuracySummary,
    /// Grouped by (gold, predicted) in order of first occurrence
    pub errors: Vec<ErrorGroup>,
    /// Column order of evidence rows
    pub evidence_systems: Vec<String>,
}

impl AnalysisReport {
    pub fn error_count(&self) -> usize {
        self.errors.iter().map(|g| g.entries.len()).sum()
    }
}

/// Folds classifications in the order they are absorbed
#[derive(Debug, Default)]
pub struct Accumulator {
    languages: Vec<LanguageRecord>,
    forms: Vec<FormRecord>,
    compared: usize,
    exact_hits: usize,
    mixed_credit: f64,
    mixed_fails: usize,
    errors: Vec<ErrorGroup>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, classification: Classification) {
        let Classification {
            record,
            forms,
            comparison,
        } = classification;

        self.languages.push(record);
        self.forms.extend(forms);

        let Some(comparison) = comparison else {
            return;
        };
        self.compared += 1;
        if comparison.exact {
            self.exact_hits += 1;
        }
        self.mixed_credit += comparison.mixed_credit;
        if comparison.mixed_credit == 0.0 {
            self.mixed_fails += 1;
        }
        if let Some(error) = comparison.error {
            self.push_error(error);
        }
    }

    fn push_error(&mut self, error: ErrorEntry) {
        match self
            .errors
            .iter_mut()
            .find(|g| g.gold == error.gold && g.predicted == error.predicted)
        {
            Some(group) => group.entries.push(error),
            None => self.errors.push(ErrorGroup {
                gold: error.gold.clone(),
                predicted: error.predicted.clone(),
                entries: vec![error],
            }),
        }
    }

    pub fn summary(&self) -> AccuracySummary {
        let rate = |value: f64| (self.compared > 0).then(|| value / self.compared as f64);
        AccuracySummary {
            compared: self.compared,
            exact_hits: self.exact_hits,
            exact_fails: self.compared - self.exact_hits,
            exact_rate: rate(self.exact_hits as f64),
            mixed_credit: self.mixed_credit,
            mixed_fails: self.mixed_fails,
            mixed_rate: rate(self.mixed_credit),
        }
    }

    pub fn into_report(self, evidence_systems: Vec<String>) -> AnalysisReport {
        let accuracy = self.summary();
        AnalysisReport {
            languages: self.languages,
            forms: self.forms,
            accuracy,
            errors: self.errors,
            evidence_systems,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Comparison;
    use std::collections::BTreeMap;

    fn record(id: &str) -> LanguageRecord {
        LanguageRecord {
            id: id.into(),
            name: id.into(),
            glottocode: None,
            latitude: None,
            longitude: None,
            macroarea: None,
            bases: String::new(),
            best_base: "unknown".into(),
            base: "unknown".into(),
            coverage: 1.0,
            one_to_thirty: 1.0,
            base_in_source: "unknown".into(),
        }
    }

    fn error(id: &str, gold: &str, predicted: &str) -> ErrorEntry {
        ErrorEntry {
            gold: gold.into(),
            predicted: predicted.into(),
            language_id: id.into(),
            language_name: id.into(),
            scores: String::new(),
            colexis: BTreeMap::new(),
            evidence: Vec::new(),
        }
    }

    fn compared(id: &str, exact: bool, mixed_credit: f64, err: Option<(&str, &str)>) -> Classification {
        Classification {
            record: record(id),
            forms: Vec::new(),
            comparison: Some(Comparison {
                exact,
                mixed_credit,
                error: err.map(|(g, p)| error(id, g, p)),
            }),
        }
    }

    #[test]
    fn test_rates() {
        let mut acc = Accumulator::new();
        acc.absorb(compared("a", true, 1.0, None));
        acc.absorb(compared("b", false, 0.5, Some(("decimal", "Fiver"))));
        acc.absorb(compared("c", false, 0.0, Some(("decimal", "Unknown"))));
        acc.absorb(compared("d", true, 1.0, None));

        let summary = acc.summary();
        assert_eq!(summary.compared, 4);
        assert_eq!(summary.exact_hits, 2);
        assert_eq!(summary.exact_fails, 2);
        assert_eq!(summary.exact_rate, Some(0.5));
        assert_eq!(summary.mixed_credit, 2.5);
        assert_eq!(summary.mixed_fails, 1);
        assert_eq!(summary.mixed_rate, Some(0.625));
    }

    #[test]
    fn test_uncompared_languages_only_add_records() {
        let mut acc = Accumulator::new();
        acc.absorb(Classification {
            record: record("x"),
            forms: Vec::new(),
            comparison: None,
        });
        let report = acc.into_report(Vec::new());
        assert_eq!(report.languages.len(), 1);
        assert_eq!(report.accuracy.compared, 0);
        assert_eq!(report.accuracy.exact_rate, None);
        assert_eq!(report.accuracy.mixed_rate, None);
        assert_eq!(format_rate(report.accuracy.exact_rate), "no data");
    }

    #[test]
    fn test_error_groups_keep_first_seen_order() {
        let mut acc = Accumulator::new();
        acc.absorb(compared("a", false, 0.0, Some(("vigesimal", "Tener"))));
        acc.absorb(compared("b", false, 0.0, Some(("decimal", "Fiver"))));
        acc.absorb(compared("c", false, 0.0, Some(("vigesimal", "Tener"))));

        let report = acc.into_report(vec!["Fiver".into()]);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[0].gold, "vigesimal");
        assert_eq!(report.errors[0].entries.len(), 2);
        assert_eq!(report.errors[0].entries[1].language_id, "c");
        assert_eq!(report.errors[1].predicted, "Fiver");
        assert_eq!(report.error_count(), 3);
        assert_eq!(format_rate(report.accuracy.exact_rate), "0.00");
    }
}
