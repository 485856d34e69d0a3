//! Text normalization applied before vectorization
//!
//! Raw news text goes through four order-sensitive steps:
//! 1. Lowercasing
//! 2. URL stripping (any non-whitespace run starting with `http`)
//! 3. Removal of everything that is not an ASCII lowercase letter or whitespace
//! 4. Stop-word removal, re-joining survivors with single spaces
//!
//! Accented and non-Latin letters are stripped in step 3, so non-English
//! text degrades to near-empty output.
//!
//! Whitespace everywhere here means Unicode whitespace plus the ASCII
//! information separators U+001C..U+001F.

use crate::stopwords::StopWords;
use fakescope_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Whether a character separates tokens
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Whether text holds nothing but separators
pub fn is_blank(text: &str) -> bool {
    text.chars().all(is_separator)
}

/// Canonical token-cleaned text, produced only by [`Normalizer::normalize`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whitespace-separated tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split(' ').filter(|t| !t.is_empty())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic raw-text normalizer
#[derive(Debug, Clone)]
pub struct Normalizer {
    url_regex: Regex,
    non_letter_regex: Regex,
    stopwords: Arc<StopWords>,
}

impl Normalizer {
    /// Create a normalizer over an injected stop-word set
    pub fn new(stopwords: Arc<StopWords>) -> Result<Self> {
        Ok(Self {
            url_regex: Regex::new(r"http[^\s\x1C-\x1F]+")
                .map_err(|e| Error::config(format!("Failed to compile URL regex: {}", e)))?,
            non_letter_regex: Regex::new(r"[^a-z\s\x1C-\x1F]")
                .map_err(|e| Error::config(format!("Failed to compile letter regex: {}", e)))?,
            stopwords,
        })
    }

    /// Normalizer using the built-in English stop words
    pub fn english() -> Result<Self> {
        Self::new(StopWords::english())
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    /// Normalize raw text. Total over all inputs; may return empty text.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let lowered = text.to_lowercase();
        let without_urls = self.url_regex.replace_all(&lowered, "");
        let letters_only = self.non_letter_regex.replace_all(&without_urls, "");

        let kept: Vec<&str> = letters_only
            .split(is_separator)
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .collect();

        NormalizedText(kept.join(" "))
    }
}
