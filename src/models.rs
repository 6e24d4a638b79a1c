//! Core data models for numeralbank
//!
//! These models represent the already-parsed wordlist records the
//! classifier consumes (languages, concepts, forms) and the per-language
//! rows it produces.

use serde::{Deserialize, Serialize};

/// A single written realization of a concept in one language
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Form {
    /// Raw value as given in the source
    pub value: String,
    /// Segmented / cleaned form. Falls back to `value` when absent.
    #[serde(default)]
    pub form: Option<String>,
}

impl Form {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            form: None,
        }
    }

    /// The literal string used for comparison
    pub fn text(&self) -> &str {
        self.form.as_deref().unwrap_or(&self.value)
    }
}

/// A concept (gloss) together with the forms realizing it
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Concept {
    /// Gloss identifier, e.g. "FIVE"
    pub id: String,
    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Concept {
    pub fn new(id: impl Into<String>, forms: &[&str]) -> Self {
        Self {
            id: id.into(),
            forms: forms.iter().map(|f| Form::new(*f)).collect(),
        }
    }
}

/// A language with its numeral vocabulary
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Language {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Cross-dataset identity key
    #[serde(default)]
    pub glottocode: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub macroarea: Option<String>,
    /// Name of the dataset this record was read from
    #[serde(default)]
    pub dataset: String,
    /// Free-text base annotation from the source (gold)
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

/// Per-language output row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct LanguageRecord {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub glottocode: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub macroarea: Option<String>,
    /// Per-system score summary, e.g. "Fiver:1.00 Tener:0.25"
    pub bases: String,
    /// Canonical label of the predicted base
    pub best_base: String,
    /// Gold label, downgraded to "unknown" when not comparable
    pub base: String,
    /// Coverage of the master concept list
    pub coverage: f64,
    /// Coverage of the 1..30 subset
    pub one_to_thirty: f64,
    /// Gold label as mapped from the source, before downgrading
    pub base_in_source: String,
}

/// Per-form output row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormRecord {
    #[serde(rename = "Language_ID")]
    pub language_id: String,
    #[serde(rename = "Parameter_ID")]
    pub parameter_id: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "Form")]
    pub form: String,
    #[serde(rename = "NumberValue")]
    pub number_value: Option<i64>,
}
