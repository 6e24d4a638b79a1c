//! Output reporters for numeralbank analysis results
//!
//! Supports multiple output formats:
//! - `text` - Terminal summary with colors
//! - `json` - The full report, machine-readable
//! - `markdown` - The error evidence report

mod json;
mod markdown;
mod text;

pub use markdown::render as render_error_report;

use crate::classifier::AnalysisReport;
use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(anyhow!(
                "Unknown format '{}'. Valid formats: text, json, markdown",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render an analysis report using an OutputFormat enum
pub fn report_with_format(report: &AnalysisReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => text::render(report),
        OutputFormat::Json => json::render(report),
        OutputFormat::Markdown => markdown::render(report),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::classifier::{AccuracySummary, ErrorEntry, ErrorGroup, EvidenceRow};
    use crate::models::{FormRecord, LanguageRecord};
    use std::collections::BTreeMap;

    /// A small report with one compared mismatch
    pub(crate) fn test_report() -> AnalysisReport {
        let language = LanguageRecord {
            id: "tak".into(),
            name: "Takia".into(),
            glottocode: Some("taki1248".into()),
            latitude: Some(-4.6),
            longitude: Some(145.9),
            macroarea: Some("Papunesia".into()),
            bases: "Fiver:1.00 Tener:0.00 Twentier:0.00 Twoer:0.00".into(),
            best_base: "quinary".into(),
            base: "decimal".into(),
            coverage: 0.9,
            one_to_thirty: 1.0,
            base_in_source: "decimal".into(),
        };
        let form = FormRecord {
            language_id: "tak".into(),
            parameter_id: "six".into(),
            value: "tak lim".into(),
            form: "taklim".into(),
            number_value: Some(6),
        };
        let error = ErrorEntry {
            gold: "decimal".into(),
            predicted: "Fiver".into(),
            language_id: "tak".into(),
            language_name: "Takia".into(),
            scores: language.bases.clone(),
            colexis: BTreeMap::from([(
                "Fiver".to_string(),
                BTreeMap::from([("ONE".to_string(), "SIX".to_string())]),
            )]),
            evidence: vec![
                EvidenceRow {
                    concept: "ONE".into(),
                    forms: "tak".into(),
                    targets: vec!["SIX".into(), String::new(), String::new(), String::new()],
                },
                EvidenceRow {
                    concept: "SIX".into(),
                    forms: "taklim / limtak".into(),
                    targets: vec![String::new(); 4],
                },
            ],
        };

        AnalysisReport {
            languages: vec![language],
            forms: vec![form],
            accuracy: AccuracySummary {
                compared: 1,
                exact_hits: 0,
                exact_fails: 1,
                exact_rate: Some(0.0),
                mixed_credit: 0.0,
                mixed_fails: 1,
                mixed_rate: Some(0.0),
            },
            errors: vec![ErrorGroup {
                gold: "decimal".into(),
                predicted: "Fiver".into(),
                entries: vec![error],
            }],
            evidence_systems: vec![
                "Fiver".into(),
                "Twoer".into(),
                "Tener".into(),
                "Twentier".into(),
            ],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        assert!(OutputFormat::from_str("sarif").is_err());
    }

    #[test]
    fn test_format_display_round_trips() {
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_report_with_format() {
        let out = report_with_format(&test_report(), OutputFormat::Json).expect("render");
        assert!(out.starts_with('{'));
    }
}
