//! Master concept list and coverage
//!
//! Each concept carries a test flag: "1" marks the 1..30 subset, "1" or "2"
//! the 1..40 subset. Coverage is the share of a list's glosses a language
//! realizes.

use crate::models::Language;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One entry of the master concept list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConceptInfo {
    /// Concepticon-style gloss, e.g. "FIVE"
    pub gloss: String,
    /// Numeric value of the numeral concept
    #[serde(default)]
    pub number_value: Option<i64>,
    /// Test subset flag
    #[serde(default)]
    pub test: Option<String>,
}

impl ConceptInfo {
    pub fn new(gloss: impl Into<String>, number_value: i64, test: &str) -> Self {
        Self {
            gloss: gloss.into(),
            number_value: Some(number_value),
            test: Some(test.to_string()),
        }
    }

    fn in_test(&self, flags: &[&str]) -> bool {
        self.test
            .as_deref()
            .map(|t| flags.contains(&t.trim()))
            .unwrap_or(false)
    }
}

/// Ordered master concept list
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<ConceptInfo>", into = "Vec<ConceptInfo>")]
pub struct ConceptList {
    concepts: Vec<ConceptInfo>,
    index: HashMap<String, usize>,
}

impl From<Vec<ConceptInfo>> for ConceptList {
    fn from(concepts: Vec<ConceptInfo>) -> Self {
        let index = concepts
            .iter()
            .enumerate()
            .map(|(i, c)| (c.gloss.clone(), i))
            .collect();
        Self { concepts, index }
    }
}

impl From<ConceptList> for Vec<ConceptInfo> {
    fn from(list: ConceptList) -> Self {
        list.concepts
    }
}

impl ConceptList {
    pub fn glosses(&self) -> Vec<&str> {
        self.concepts.iter().map(|c| c.gloss.as_str()).collect()
    }

    pub fn contains(&self, gloss: &str) -> bool {
        self.index.contains_key(gloss)
    }

    pub fn number_value(&self, gloss: &str) -> Option<i64> {
        self.index
            .get(gloss)
            .and_then(|&i| self.concepts[i].number_value)
    }

    /// Glosses of the 1..30 subset
    pub fn one_to_thirty(&self) -> Vec<&str> {
        self.subset(&["1"])
    }

    /// Glosses of the 1..40 subset
    pub fn one_to_forty(&self) -> Vec<&str> {
        self.subset(&["1", "2"])
    }

    fn subset(&self, flags: &[&str]) -> Vec<&str> {
        self.concepts
            .iter()
            .filter(|c| c.in_test(flags))
            .map(|c| c.gloss.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }
}

/// Fraction of `glosses` realized by the language. 0 for an empty list.
pub fn coverage(language: &Language, glosses: &[&str]) -> f64 {
    if glosses.is_empty() {
        return 0.0;
    }
    let present: HashSet<&str> = language.concepts.iter().map(|c| c.id.as_str()).collect();
    let wanted: HashSet<&str> = glosses.iter().copied().collect();
    let hits = wanted.iter().filter(|g| present.contains(*g)).count();
    hits as f64 / wanted.len() as f64
}
