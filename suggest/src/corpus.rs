//! Category-keyed phrase corpus.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::{fmt, fs, io};

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_WORDS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/words.json"));

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("failed to read corpus {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse corpus {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where a corpus comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorpusSource {
    /// Word list compiled into the binary.
    #[default]
    Builtin,
    /// JSON file shaped like `{"category": ["phrase", ...]}`.
    File(PathBuf),
}

impl fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusSource::Builtin => f.write_str("builtin"),
            CorpusSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Candidate phrases grouped by category.
///
/// Categories iterate in name order so pools built from the same corpus are
/// identical from run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    categories: BTreeMap<String, Vec<String>>,
}

impl Corpus {
    pub fn load(source: &CorpusSource) -> Result<Self, SuggestError> {
        match source {
            CorpusSource::Builtin => Self::builtin(),
            CorpusSource::File(path) => {
                let raw = fs::read_to_string(path).map_err(|source| SuggestError::Read {
                    path: path.clone(),
                    source,
                })?;
                Self::from_json(&raw, &path.display().to_string())
            }
        }
    }

    pub fn builtin() -> Result<Self, SuggestError> {
        Self::from_json(BUILTIN_WORDS, "builtin")
    }

    /// Parse a corpus; `origin` names the input in error messages.
    pub fn from_json(raw: &str, origin: &str) -> Result<Self, SuggestError> {
        serde_json::from_str(raw).map_err(|source| SuggestError::Parse {
            origin: origin.to_string(),
            source,
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[String]> {
        self.categories.get(name).map(Vec::as_slice)
    }

    /// Every phrase, category by category.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.categories.values().flatten().map(String::as_str)
    }

    /// Drop every category not named in `keep`. Unknown names are ignored.
    pub fn retain_categories(&mut self, keep: &[String]) {
        self.categories.retain(|name, _| keep.contains(name));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }
}
