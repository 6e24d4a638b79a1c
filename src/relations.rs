//! Relation table: which concept pairs are diagnostic for which base system
//!
//! ```json
//! { "Fiver": [["partial", "ONE", "SIX"], ["partial", "FIVE", "FIFTEEN"]],
//!   "Tener": [["partial", "TEN", "ELEVEN"]] }
//! ```
//!
//! Only `partial` triples are evaluated. Other relation types are kept so
//! they can be reported, but have no effect on scores.

use crate::config::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Relation type of a triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationKind {
    /// Form of concept A occurs inside a form of concept B
    Partial,
    /// Reserved relation types
    Other(String),
}

impl From<String> for RelationKind {
    fn from(s: String) -> Self {
        if s == "partial" {
            RelationKind::Partial
        } else {
            RelationKind::Other(s)
        }
    }
}

impl From<RelationKind> for String {
    fn from(kind: RelationKind) -> Self {
        match kind {
            RelationKind::Partial => "partial".to_string(),
            RelationKind::Other(s) => s,
        }
    }
}

/// One `(relationType, conceptA, conceptB)` triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRelation", into = "RawRelation")]
pub struct Relation {
    pub kind: RelationKind,
    pub concept_a: String,
    pub concept_b: String,
}

#[derive(Serialize, Deserialize)]
struct RawRelation(RelationKind, String, String);

impl From<RawRelation> for Relation {
    fn from(raw: RawRelation) -> Self {
        Self {
            kind: raw.0,
            concept_a: raw.1,
            concept_b: raw.2,
        }
    }
}

impl From<Relation> for RawRelation {
    fn from(rel: Relation) -> Self {
        RawRelation(rel.kind, rel.concept_a, rel.concept_b)
    }
}

impl Relation {
    pub fn partial(concept_a: impl Into<String>, concept_b: impl Into<String>) -> Self {
        Self {
            kind: RelationKind::Partial,
            concept_a: concept_a.into(),
            concept_b: concept_b.into(),
        }
    }

    pub fn is_partial(&self) -> bool {
        self.kind == RelationKind::Partial
    }
}

/// System name → ordered relation triples.
///
/// Systems iterate in lexicographic order of their names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationTable {
    systems: BTreeMap<String, Vec<Relation>>,
}

impl RelationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system (replaces an existing one with the same name)
    pub fn with_system(mut self, name: impl Into<String>, relations: Vec<Relation>) -> Self {
        self.systems.insert(name.into(), relations);
        self
    }

    pub fn from_json(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::Json {
            what: "relation table",
            source: e,
        })
    }

    /// Read and parse a relation table file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Relation])> {
        self.systems
            .iter()
            .map(|(name, rels)| (name.as_str(), rels.as_slice()))
    }

    pub fn system_names(&self) -> impl Iterator<Item = &str> {
        self.systems.keys().map(String::as_str)
    }

    pub fn get(&self, system: &str) -> Option<&[Relation]> {
        self.systems.get(system).map(Vec::as_slice)
    }

    /// Number of `partial` triples defined for a system
    pub fn partial_count(&self, system: &str) -> usize {
        self.get(system)
            .map(|rels| rels.iter().filter(|r| r.is_partial()).count())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relation_table() {
        let table = RelationTable::from_json(
            r#"{"Fiver": [["partial", "ONE", "SIX"], ["full", "FIVE", "HAND"]],
                "Tener": [["partial", "TEN", "ELEVEN"]]}"#,
        )
        .expect("parse table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.partial_count("Fiver"), 1);
        assert_eq!(table.partial_count("Tener"), 1);
        assert_eq!(table.partial_count("Twoer"), 0);

        let fiver = table.get("Fiver").expect("Fiver present");
        assert_eq!(fiver[0], Relation::partial("ONE", "SIX"));
        assert_eq!(fiver[1].kind, RelationKind::Other("full".into()));
    }

    #[test]
    fn test_systems_iterate_sorted() {
        let table = RelationTable::new()
            .with_system("Twoer", vec![])
            .with_system("Fiver", vec![])
            .with_system("Tener", vec![]);
        let names: Vec<&str> = table.system_names().collect();
        assert_eq!(names, vec!["Fiver", "Tener", "Twoer"]);
    }

    #[test]
    fn test_malformed_triple_is_rejected() {
        let err = RelationTable::from_json(r#"{"Fiver": [["partial", "ONE"]]}"#);
        assert!(matches!(err, Err(ConfigError::Json { .. })));

        let err = RelationTable::from_json(r#"["partial", "ONE", "SIX"]"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_roundtrip_keeps_shape() {
        let table = RelationTable::new().with_system("Fiver", vec![Relation::partial("ONE", "SIX")]);
        let json = serde_json::to_string(&table).expect("serialize");
        assert_eq!(json, r#"{"Fiver":[["partial","ONE","SIX"]]}"#);
    }
}
