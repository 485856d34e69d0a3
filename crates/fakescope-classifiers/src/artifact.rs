//! On-disk model artifacts
//!
//! Vectorizers and classifiers are persisted as JSON documents carrying a
//! `format_version` and a `kind` tag. The version is checked before the body
//! is parsed so an incompatible artifact fails with a clear message.

use crate::classifier::{LogisticRegression, MultinomialNb, ProbabilisticClassifier};
use crate::features::ModelError;
use crate::vectorizer::{Norm, TfidfVectorizer, Vectorizer};
use fakescope_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Artifact format understood by this build
pub const FORMAT_VERSION: u64 = 1;

/// Persisted vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VectorizerArtifact {
    Tfidf {
        vocabulary: HashMap<String, usize>,

        /// Absent means raw term counts
        #[serde(default)]
        idf: Option<Vec<f64>>,

        #[serde(default = "default_ngram_range")]
        ngram_range: (usize, usize),

        #[serde(default)]
        sublinear_tf: bool,

        #[serde(default)]
        norm: Norm,

        #[serde(default)]
        binary: bool,
    },
}

/// Persisted classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    LogisticRegression {
        classes: Vec<String>,
        coef: Vec<f64>,
        intercept: f64,
    },

    MultinomialNb {
        classes: Vec<String>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl VectorizerArtifact {
    /// Build the runtime vectorizer
    pub fn into_vectorizer(self) -> std::result::Result<Arc<dyn Vectorizer>, ModelError> {
        match self {
            Self::Tfidf {
                vocabulary,
                idf,
                ngram_range,
                sublinear_tf,
                norm,
                binary,
            } => {
                let mut vectorizer = TfidfVectorizer::new(vocabulary)?
                    .with_ngram_range(ngram_range.0, ngram_range.1)?
                    .with_sublinear_tf(sublinear_tf)
                    .with_binary(binary)
                    .with_norm(norm);
                if let Some(idf) = idf {
                    vectorizer = vectorizer.with_idf(idf)?;
                }
                Ok(Arc::new(vectorizer))
            }
        }
    }
}

impl ClassifierArtifact {
    /// Build the runtime classifier
    pub fn into_classifier(
        self,
    ) -> std::result::Result<Arc<dyn ProbabilisticClassifier>, ModelError> {
        match self {
            Self::LogisticRegression {
                classes,
                coef,
                intercept,
            } => Ok(Arc::new(LogisticRegression::new(classes, coef, intercept)?)),
            Self::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => Ok(Arc::new(MultinomialNb::new(
                classes,
                class_log_prior,
                feature_log_prob,
            )?)),
        }
    }
}

/// Read a JSON artifact, checking its format version first
fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::model_load(path, format!("failed to read artifact: {}", e)))?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| Error::model_load(path, format!("corrupt artifact: {}", e)))?;

    let version = value
        .get("format_version")
        .and_then(serde_json::Value::as_u64)
        .ok_or_else(|| Error::model_load(path, "missing format_version"))?;

    if version != FORMAT_VERSION {
        return Err(Error::model_load(
            path,
            format!(
                "unsupported format_version {} (this build reads version {})",
                version, FORMAT_VERSION
            ),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| Error::model_load(path, format!("invalid artifact: {}", e)))
}

/// Load a vectorizer artifact from disk
pub fn load_vectorizer(path: impl AsRef<Path>) -> Result<Arc<dyn Vectorizer>> {
    let path = path.as_ref();
    let artifact: VectorizerArtifact = read_artifact(path)?;
    let vectorizer = artifact
        .into_vectorizer()
        .map_err(|e| Error::model_load(path, e.to_string()))?;

    tracing::debug!(
        "Loaded {} vectorizer with {} features from {}",
        vectorizer.kind(),
        vectorizer.dimension(),
        path.display()
    );
    Ok(vectorizer)
}

/// Load a classifier artifact from disk
pub fn load_classifier(path: impl AsRef<Path>) -> Result<Arc<dyn ProbabilisticClassifier>> {
    let path = path.as_ref();
    let artifact: ClassifierArtifact = read_artifact(path)?;
    let classifier = artifact
        .into_classifier()
        .map_err(|e| Error::model_load(path, e.to_string()))?;

    tracing::debug!(
        "Loaded {} classifier over {} features from {}",
        classifier.kind(),
        classifier.n_features(),
        path.display()
    );
    Ok(classifier)
}
