//! Word sources for the password generator.
//!
//! A [`WordSource`] is an explicit dependency handed to the generator rather
//! than process-global state. It can be loaded from a column of a delimited
//! `.csv` table or from a `.json` array of strings; any other extension is
//! refused. Loading happens once at startup and the vocabulary is read-only
//! afterwards.

use std::fs;
use std::path::Path;

use crate::error::WordSourceError;

/// Fallback vocabulary used when no word file is configured, so a fresh
/// install can still generate passwords.
const BUILTIN_WORDS: &[&str] = &[
    "anchor", "autumn", "basket", "breeze", "candle", "canyon", "cascade", "cedar", "circuit",
    "clover", "comet", "coral", "crystal", "drift", "ember", "falcon", "fern", "flint", "garnet",
    "glacier", "harbor", "hazel", "horizon", "island", "juniper", "lantern", "lagoon", "maple",
    "meadow", "meteor", "nectar", "north", "orchard", "osprey", "pebble", "pine", "prairie",
    "quartz", "raven", "ridge", "river", "saffron", "summit", "thistle", "timber", "tundra",
    "velvet", "willow",
];

/// Read-only vocabulary backing password generation.
#[derive(Debug, Clone)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Wraps an in-memory word list.
    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    /// The built-in fallback vocabulary.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Loads a vocabulary from `path`.
    ///
    /// `.csv` files are read as delimited tables with the word taken from
    /// `column` on each line; `.json` files must contain an array of
    /// strings. `column` is ignored for JSON sources.
    pub fn load(path: &Path, column: usize) -> Result<Self, WordSourceError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("csv") => Self::load_csv(path, column),
            Some("json") => Self::load_json(path),
            _ => Err(WordSourceError::UnsupportedFormat(
                path.display().to_string(),
            )),
        }
    }

    fn load_csv(path: &Path, column: usize) -> Result<Self, WordSourceError> {
        let content = fs::read_to_string(path)?;
        let mut words = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let field = line
                .split(',')
                .nth(column)
                .ok_or(WordSourceError::MissingColumn {
                    line: idx + 1,
                    column,
                })?;
            let word = field.trim();
            if !word.is_empty() {
                words.push(word.to_string());
            }
        }

        log::debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    fn load_json(path: &Path) -> Result<Self, WordSourceError> {
        let content = fs::read_to_string(path)?;
        let words: Vec<String> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
