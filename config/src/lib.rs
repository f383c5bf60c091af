//! Configuration for phrasewheel.
//!
//! Settings live in `~/.phrasewheel/config.toml`; every key is optional:
//!
//! ```toml
//! [card]
//! capacity = 72
//!
//! [suggestions]
//! count = 144
//! max_phrase_chars = 20
//! corpus = "${HOME}/words.json"
//! ```
//!
//! A missing file is not an error. Command-line flags override the file, and the
//! file overrides the built-in defaults.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use thiserror::Error;
use toml::de::Error as TomlError;

use phrasewheel_types::{Capacity, DEFAULT_SUGGESTION_COUNT, MAX_PHRASE_CHARS};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhraseWheelConfig {
    pub card: Option<CardConfig>,
    pub suggestions: Option<SuggestionsConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: TomlError,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Card geometry.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CardConfig {
    /// Slots per card face. Must be positive.
    pub capacity: Option<Capacity>,
}

/// Suggestion sampler settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuggestionsConfig {
    /// Suggestions per request. Default: 144.
    pub count: Option<usize>,
    /// Longest phrase kept from the corpus. Default: 20.
    pub max_phrase_chars: Option<usize>,
    /// Path to a JSON corpus replacing the built-in word list. `${VAR}` is expanded.
    pub corpus: Option<String>,
}

/// Replace every `${VAR}` with the variable's value; unset variables expand to "".
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start + 2..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &rest[start + 2..start + 2 + len];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &rest[start + 2 + len + 1..];
    }

    out.push_str(rest);
    out
}

impl PhraseWheelConfig {
    /// Load the user config. `Ok(None)` when there is no home dir or no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        Self::parse(&content).map_err(|err| {
            tracing::warn!("Failed to parse config at {:?}: {}", path, err);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source: err,
            }
        })
    }

    pub fn parse(content: &str) -> Result<Self, TomlError> {
        toml::from_str(content)
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.card
            .as_ref()
            .and_then(|card| card.capacity)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn suggestion_count(&self) -> usize {
        self.suggestions
            .as_ref()
            .and_then(|s| s.count)
            .unwrap_or(DEFAULT_SUGGESTION_COUNT)
    }

    #[must_use]
    pub fn max_phrase_chars(&self) -> usize {
        self.suggestions
            .as_ref()
            .and_then(|s| s.max_phrase_chars)
            .unwrap_or(MAX_PHRASE_CHARS)
    }

    /// Configured corpus file with environment variables expanded.
    #[must_use]
    pub fn corpus_path(&self) -> Option<PathBuf> {
        let raw = self.suggestions.as_ref()?.corpus.as_deref()?;
        let expanded = expand_env_vars(raw.trim());
        if expanded.is_empty() {
            tracing::warn!("Configured corpus path {raw:?} expands to nothing; using builtin");
            return None;
        }
        Some(PathBuf::from(expanded))
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".phrasewheel").join("config.toml"))
}
