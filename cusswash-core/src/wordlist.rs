// cusswash-core/src/wordlist.rs
//! The profanity dictionary: loading, validation, and lookup.
//!
//! A word list is an ordered sequence of lowercase words, deserialized from
//! a JSON array of strings. It is loaded once at startup and treated as
//! read-only afterwards. A list that fails to load degrades to an empty
//! list with a logged warning, so sanitize calls become identity transforms
//! rather than aborting (see [`WordList::load_from_file_or_empty`]).
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::CusswashError;

/// Maximum allowed length for a dictionary entry. Spaced-variant generation
/// counts variants in a u64, one bit per gap between letters, so entries
/// must stay under 65 characters.
pub const MAX_WORD_LENGTH: usize = 64;

/// Shape every dictionary entry must have: lowercase ASCII letters only.
static WORD_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-z]+$").unwrap());

/// An ordered, read-only sequence of lowercase profane words.
///
/// Order matters for lookup (first exact match wins); uniqueness is not
/// enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Builds a list from in-memory words. Empty entries are dropped.
    pub fn from_words(words: Vec<String>) -> Self {
        let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
        debug!("Word list built with {} entries.", words.len());
        Self { words }
    }

    /// Loads the built-in dictionary embedded at compile time.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default word list from embedded string...");
        let words: Vec<String> = serde_json::from_str(include_str!("../config/default_words.json"))
            .context("Failed to parse embedded default word list")?;
        Ok(Self::from_words(words))
    }

    /// Loads a dictionary from a JSON file containing an array of strings.
    ///
    /// Entries are validated against the lowercase-word shape; all offending
    /// entries are reported in a single aggregated error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CusswashError> {
        let path = path.as_ref();
        info!("Loading word list from: {}", path.display());
        let text = std::fs::read_to_string(path)?;
        let words: Vec<String> = serde_json::from_str(&text)?;
        validate_words(&words)?;
        let list = Self::from_words(words);
        info!("Loaded {} words from {}.", list.len(), path.display());
        Ok(list)
    }

    /// Loads a dictionary from a file, degrading to an empty list on any
    /// failure. The failure is logged as a warning; with an empty list every
    /// sanitize call leaves its input unchanged.
    pub fn load_from_file_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(list) => list,
            Err(e) => {
                warn!(
                    "Failed to load word list from {}: {}. Continuing with an empty list; nothing will be masked.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Returns the first entry exactly equal to `token`, in list order.
    pub fn find(&self, token: &str) -> Option<&str> {
        self.words.iter().find(|w| *w == token).map(String::as_str)
    }

    /// The entries, in order.
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

/// Validates dictionary entries, aggregating every problem into one report.
fn validate_words(words: &[String]) -> Result<(), CusswashError> {
    let mut errors = Vec::new();
    for word in words {
        if word.is_empty() {
            errors.push("An entry in the word list is empty.".to_string());
        } else if word.len() > MAX_WORD_LENGTH {
            errors.push(format!(
                "Entry '{}' exceeds the maximum length of {} characters.",
                word, MAX_WORD_LENGTH
            ));
        } else if !WORD_SHAPE.is_match(word) {
            errors.push(format!("Entry '{}' is not a lowercase word.", word));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CusswashError::InvalidWordList(errors.join("\n")))
    }
}
