//! Stop-word sets used by the text normalizer

use fakescope_core::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// English stop words (the NLTK `english` corpus list)
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH_SET: OnceLock<Arc<StopWords>> = OnceLock::new();

/// Immutable set of tokens dropped during normalization
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a stop-word set from any list of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Empty set; normalization then only strips URLs and non-letters
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared built-in English list.
    ///
    /// Built on first use and cached for the process lifetime; every call
    /// returns the same instance.
    pub fn english() -> Arc<StopWords> {
        Arc::clone(ENGLISH_SET.get_or_init(|| Arc::new(Self::from_words(ENGLISH.iter().copied()))))
    }

    /// Parse a newline-separated list. Blank lines and `#` comments are skipped.
    pub fn parse(content: &str) -> Self {
        Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_lowercase),
        )
    }

    /// Load a newline-separated list from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read stop-word list {}: {}",
                path.display(),
                e
            ))
        })?;

        let words = Self::parse(&content);
        tracing::debug!("Loaded {} stop words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_list() {
        let words = StopWords::english();
        assert_eq!(words.len(), 179);
        assert!(words.contains("the"));
        assert!(words.contains("wouldn't"));
        assert!(!words.contains("aliens"));
    }

    #[test]
    fn test_english_is_cached() {
        let first = StopWords::english();
        let second = StopWords::english();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let words = StopWords::parse("# custom list\nfoo\n\n  Bar  \n#baz\n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("foo"));
        assert!(words.contains("bar"));
        assert!(!words.contains("baz"));
    }

    #[test]
    fn test_from_file_missing() {
        let err = StopWords::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
