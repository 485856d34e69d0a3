//! Text vectorizers: normalized text to fixed-length feature vectors

use crate::features::{FeatureVector, ModelError};
use crate::normalizer::NormalizedText;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Capability: turn normalized text into a feature vector
pub trait Vectorizer: std::fmt::Debug + Send + Sync {
    /// Transform text; empty text must yield a valid (all-zero) vector
    fn transform(&self, text: &NormalizedText) -> Result<FeatureVector, ModelError>;

    /// Length of every produced vector
    fn dimension(&self) -> usize;

    /// Short identifier of the vectorizer type
    fn kind(&self) -> &str;
}

/// Row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

/// TF-IDF vectorizer over word n-grams.
///
/// Tokens are runs of two or more word characters. Each n-gram present in
/// the vocabulary is counted, optionally binarized or log-scaled, multiplied
/// by its inverse document frequency and the row is then normalized.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    binary: bool,
    norm: Norm,
    token_regex: Regex,
}

impl TfidfVectorizer {
    /// Create a vectorizer over a fitted vocabulary (unigrams, L2 norm, no IDF)
    pub fn new(vocabulary: HashMap<String, usize>) -> Result<Self, ModelError> {
        let vectorizer = Self {
            vocabulary,
            idf: None,
            ngram_range: (1, 1),
            sublinear_tf: false,
            binary: false,
            norm: Norm::L2,
            token_regex: Regex::new(r"\b\w\w+\b")
                .map_err(|e| ModelError::InvalidParameters(format!("token pattern: {}", e)))?,
        };
        vectorizer.validate_vocabulary()?;
        Ok(vectorizer)
    }

    /// Set inverse document frequencies, one per vocabulary column
    pub fn with_idf(mut self, idf: Vec<f64>) -> Result<Self, ModelError> {
        if idf.len() != self.vocabulary.len() {
            return Err(ModelError::InvalidParameters(format!(
                "idf has {} weights but vocabulary has {} terms",
                idf.len(),
                self.vocabulary.len()
            )));
        }
        if idf.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::NonFinite("idf weights".to_string()));
        }
        self.idf = Some(idf);
        Ok(self)
    }

    /// Set the inclusive word n-gram range
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Result<Self, ModelError> {
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::InvalidParameters(format!(
                "invalid ngram range ({}, {})",
                min_n, max_n
            )));
        }
        self.ngram_range = (min_n, max_n);
        Ok(self)
    }

    /// Use `1 + ln(tf)` instead of raw counts
    pub fn with_sublinear_tf(mut self, enable: bool) -> Self {
        self.sublinear_tf = enable;
        self
    }

    /// Clip counts to 1
    pub fn with_binary(mut self, enable: bool) -> Self {
        self.binary = enable;
        self
    }

    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    fn validate_vocabulary(&self) -> Result<(), ModelError> {
        let dimension = self.vocabulary.len();
        let mut seen = HashSet::with_capacity(dimension);

        for (term, &index) in &self.vocabulary {
            if index >= dimension {
                return Err(ModelError::InvalidParameters(format!(
                    "term '{}' maps to column {} outside vocabulary of {}",
                    term, index, dimension
                )));
            }
            if !seen.insert(index) {
                return Err(ModelError::InvalidParameters(format!(
                    "column {} assigned to more than one term",
                    index
                )));
            }
        }
        Ok(())
    }

    /// Word n-grams of the text, in the vectorizer's range
    fn analyze<'a>(&self, text: &'a str) -> Vec<String> {
        let tokens: Vec<&'a str> = self.token_regex.find_iter(text).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            for window in tokens.windows(n) {
                grams.push(window.join(" "));
            }
        }
        grams
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &NormalizedText) -> Result<FeatureVector, ModelError> {
        let dimension = self.vocabulary.len();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        for gram in self.analyze(text.as_str()) {
            if let Some(&index) = self.vocabulary.get(&gram) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        if counts.is_empty() {
            return Ok(FeatureVector::zeros(dimension));
        }

        let mut features = FeatureVector::from_entries(dimension, counts.into_iter().collect())?;

        if self.binary {
            features.values_mut().for_each(|v| *v = 1.0);
        } else if self.sublinear_tf {
            features.values_mut().for_each(|v| *v = 1.0 + v.ln());
        }

        if let Some(idf) = &self.idf {
            let weighted: Vec<(usize, f64)> = features
                .entries()
                .iter()
                .map(|&(index, value)| (index, value * idf[index]))
                .collect();
            features = FeatureVector::from_entries(dimension, weighted)?;
        }

        let length = match self.norm {
            Norm::L2 => features.values().map(|v| v * v).sum::<f64>().sqrt(),
            Norm::L1 => features.values().map(f64::abs).sum::<f64>(),
            Norm::None => 1.0,
        };
        if length > 0.0 && length != 1.0 {
            features.scale(1.0 / length);
        }

        Ok(features)
    }

    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn kind(&self) -> &str {
        "tfidf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::Normalizer;
    use crate::stopwords::StopWords;
    use std::sync::Arc;

    fn vocab(terms: &[&str]) -> HashMap<String, usize> {
        terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect()
    }

    fn text(raw: &str) -> NormalizedText {
        Normalizer::new(Arc::new(StopWords::empty())).unwrap().normalize(raw)
    }

    #[test]
    fn test_counts_without_idf_or_norm() {
        let v = TfidfVectorizer::new(vocab(&["aliens", "land", "york"]))
            .unwrap()
            .with_norm(Norm::None);

        let features = v.transform(&text("aliens land aliens")).unwrap();
        assert_eq!(features.to_dense(), vec![2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_l2_normalized_tfidf() {
        let v = TfidfVectorizer::new(vocab(&["aliens", "land"]))
            .unwrap()
            .with_idf(vec![2.0, 1.0])
            .unwrap();

        let features = v.transform(&text("aliens land")).unwrap();
        let dense = features.to_dense();
        let norm = (4.0f64 + 1.0).sqrt();
        assert!((dense[0] - 2.0 / norm).abs() < 1e-12);
        assert!((dense[1] - 1.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_bigrams() {
        let v = TfidfVectorizer::new(vocab(&["new", "york", "new york"]))
            .unwrap()
            .with_ngram_range(1, 2)
            .unwrap()
            .with_norm(Norm::None);

        let features = v.transform(&text("new york new")).unwrap();
        assert_eq!(features.to_dense(), vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_bigrams_only() {
        let v = TfidfVectorizer::new(vocab(&["new", "new york"]))
            .unwrap()
            .with_ngram_range(2, 2)
            .unwrap()
            .with_norm(Norm::None);

        let features = v.transform(&text("new york")).unwrap();
        assert_eq!(features.to_dense(), vec![0.0, 1.0]);
    }

    #[test]
    fn test_sublinear_and_binary() {
        let base = TfidfVectorizer::new(vocab(&["fake"])).unwrap().with_norm(Norm::None);

        let sublinear = base.clone().with_sublinear_tf(true);
        let dense = sublinear.transform(&text("fake fake fake")).unwrap().to_dense();
        assert!((dense[0] - (1.0 + 3.0f64.ln())).abs() < 1e-12);

        let binary = base.with_binary(true);
        assert_eq!(binary.transform(&text("fake fake")).unwrap().to_dense(), vec![1.0]);
    }

    #[test]
    fn test_l1_norm() {
        let v =TfidfVectorizer::new(vocab(&["aa", "bb"])).unwrap().with_norm(Norm::L1);
        let dense = v.transform(&text("aa bb bb bb")).unwrap().to_dense();
        assert_eq!(dense, vec![0.25, 0.75]);
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let v = TfidfVectorizer::new(vocab(&["aliens"])).unwrap();
        let features = v.transform(&text("")).unwrap();
        assert_eq!(features.dimension(), 1);
        assert_eq!(features.nnz(), 0);
    }

    #[test]
    fn test_single_letter_tokens_ignored() {
        let v = TfidfVectorizer::new(vocab(&["x", "ray"])).unwrap().with_norm(Norm::None);
        let dense = v.transform(&text("x ray")).unwrap().to_dense();
        assert_eq!(dense, vec![0.0, 1.0]);
    }

    #[test]
    fn test_invalid_vocabulary() {
        let mut bad = HashMap::new();
        bad.insert("a".to_string(), 0);
        bad.insert("b".to_string(), 0);
        assert!(TfidfVectorizer::new(bad).is_err());

        let mut out_of_range = HashMap::new();
        out_of_range.insert("a".to_string(), 5);
        assert!(TfidfVectorizer::new(out_of_range).is_err());
    }

    #[test]
    fn test_invalid_idf_and_ngrams() {
        let v = TfidfVectorizer::new(vocab(&["aa", "bb"])).unwrap();
        assert!(v.clone().with_idf(vec![1.0]).is_err());
        assert!(v.clone().with_idf(vec![1.0, f64::INFINITY]).is_err());
        assert!(v.clone().with_ngram_range(0, 1).is_err());
        assert!(v.with_ngram_range(3, 2).is_err());
    }
}
