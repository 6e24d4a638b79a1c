//! Wordlist inputs
//!
//! The classifier consumes already-parsed language records. Fetching
//! upstream datasets and reading their native formats happens elsewhere;
//! anything that can hand over `Language` records implements
//! `WordlistSource`. The bundled source reads a JSON document:
//!
//! ```json
//! { "languages": [
//!     { "id": "abc", "name": "Abc", "glottocode": "abcd1234",
//!       "dataset": "numerals", "base": "decimal",
//!       "concepts": [ { "id": "ONE", "forms": [ { "value": "tak" } ] } ] } ] }
//! ```

use crate::concepts::ConceptList;
use crate::models::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading wordlist inputs
#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Concept list {} is empty", path.display())]
    EmptyConceptList { path: PathBuf },
}

pub type WordlistResult<T> = Result<T, WordlistError>;

/// Anything that can provide parsed language records
pub trait WordlistSource {
    /// Human-readable name for logs
    fn name(&self) -> String;

    /// All candidate languages, possibly several per glottocode
    fn languages(&self) -> WordlistResult<Vec<Language>>;
}

/// Serialized wordlist document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wordlist {
    #[serde(default)]
    pub languages: Vec<Language>,
}

/// Wordlist read from a JSON file
pub struct JsonWordlist {
    path: PathBuf,
}

impl JsonWordlist {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordlistSource for JsonWordlist {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn languages(&self) -> WordlistResult<Vec<Language>> {
        let wordlist: Wordlist = read_json(&self.path)?;
        Ok(wordlist.languages)
    }
}

/// Read the master concept list
pub fn load_concept_list(path: &Path) -> WordlistResult<ConceptList> {
    let list: ConceptList = read_json(path)?;
    if list.is_empty() {
        return Err(WordlistError::EmptyConceptList {
            path: path.to_path_buf(),
        });
    }
    Ok(list)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> WordlistResult<T> {
    let content = std::fs::read_to_string(path).map_err(|e| WordlistError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| WordlistError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
