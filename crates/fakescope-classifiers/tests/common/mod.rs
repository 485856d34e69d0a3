//! Shared fixtures for integration tests
//!
//! Provides configurable mock vectorizers and classifiers plus small
//! on-disk artifact sets for exercising the registry loader.

#![allow(dead_code)]

use fakescope_classifiers::features::{FeatureVector, ModelError};
use fakescope_classifiers::{
    DomainArtifacts, ModelPair, ModelRegistry, NormalizedText, ProbabilisticClassifier,
    RegistryConfig, Vectorizer,
};
use fakescope_core::Domain;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

/// Vectorizer that always yields a zero vector and counts its calls
#[derive(Debug)]
pub struct MockVectorizer {
    dimension: usize,
    call_count: AtomicU32,
}

impl MockVectorizer {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            call_count: AtomicU32::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

impl Vectorizer for MockVectorizer {
    fn transform(&self, _text: &NormalizedText) -> Result<FeatureVector, ModelError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(FeatureVector::zeros(self.dimension))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn kind(&self) -> &str {
        "mock"
    }
}

/// Classifier returning a fixed distribution regardless of input
#[derive(Debug)]
pub struct FixedClassifier {
    probabilities: Vec<f64>,
    classes: Vec<String>,
    n_features: usize,
}

impl FixedClassifier {
    pub fn new(probabilities: &[f64]) -> Self {
        Self {
            probabilities: probabilities.to_vec(),
            classes: vec!["fake".to_string(), "real".to_string()],
            n_features: 4,
        }
    }
}

impl ProbabilisticClassifier for FixedClassifier {
    fn predict_probabilities(&self, _features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        Ok(self.probabilities.clone())
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn kind(&self) -> &str {
        "fixed"
    }
}

/// A classifier that always fails - for testing error paths
#[derive(Debug)]
pub struct FailingClassifier {
    classes: Vec<String>,
    error_message: String,
}

impl FailingClassifier {
    pub fn new() -> Self {
        Self {
            classes: vec!["fake".to_string(), "real".to_string()],
            error_message: "Simulated classifier failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

impl ProbabilisticClassifier for FailingClassifier {
    fn predict_probabilities(&self, _features: &FeatureVector) -> Result<Vec<f64>, ModelError> {
        Err(ModelError::InvalidDistribution(self.error_message.clone()))
    }

    fn n_features(&self) -> usize {
        4
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }

    fn kind(&self) -> &str {
        "failing"
    }
}

/// Model pair over a mock vectorizer and a fixed distribution
pub fn fixed_pair(domain: Domain, probabilities: &[f64]) -> ModelPair {
    ModelPair::new(
        domain,
        Arc::new(MockVectorizer::new(4)),
        Arc::new(FixedClassifier::new(probabilities)),
    )
    .unwrap()
}

/// Model pair whose classifier always fails
pub fn failing_pair(domain: Domain) -> ModelPair {
    ModelPair::new(
        domain,
        Arc::new(MockVectorizer::new(4)),
        Arc::new(FailingClassifier::new()),
    )
    .unwrap()
}

/// Registry with fixed distributions for both domains
pub fn fixed_registry(liar: &[f64], fakenewsnet: &[f64]) -> ModelRegistry {
    ModelRegistry::new()
        .with_pair(fixed_pair(Domain::Liar, liar))
        .with_pair(fixed_pair(Domain::FakeNewsNet, fakenewsnet))
}

fn write_json(dir: &Path, name: &str, value: serde_json::Value) {
    std::fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

/// Write a small but real artifact set for both domains.
///
/// LIAR: logistic regression leaning hard on "aliens", "government", "confirms".
/// FakeNewsNet: multinomial NB where "aliens" and "new york" favour class 0 (fake).
pub fn write_artifacts(dir: &Path) {
    write_json(
        dir,
        "liar_vectorizer.json",
        json!({
            "format_version": 1,
            "kind": "tfidf",
            "vocabulary": { "aliens": 0, "government": 1, "confirms": 2, "senate": 3 },
            "norm": "l2"
        }),
    );
    write_json(
        dir,
        "liar_model.json",
        json!({
            "format_version": 1,
            "kind": "logistic_regression",
            "classes": ["false", "true"],
            "coef": [3.0, 1.0, 1.0, -2.0],
            "intercept": 0.0
        }),
    );
    write_json(
        dir,
        "fakenewsnet_vectorizer.json",
        json!({
            "format_version": 1,
            "kind": "tfidf",
            "vocabulary": { "aliens": 0, "official": 1, "new york": 2 },
            "idf": [1.0, 1.0, 1.0],
            "ngram_range": [1, 2],
            "sublinear_tf": true
        }),
    );
    write_json(
        dir,
        "fakenewsnet_model.json",
        json!({
            "format_version": 1,
            "kind": "multinomial_nb",
            "classes": ["fake", "real"],
            "class_log_prior": [0.5f64.ln(), 0.5f64.ln()],
            "feature_log_prob": [
                [0.7f64.ln(), 0.1f64.ln(), 0.2f64.ln()],
                [0.1f64.ln(), 0.7f64.ln(), 0.2f64.ln()]
            ]
        }),
    );
}

/// Temp directory holding both domains' artifacts and a config pointing at it
pub fn artifact_dir() -> (TempDir, RegistryConfig) {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path());
    let config = RegistryConfig::default().with_models_dir(dir.path());
    (dir, config)
}

/// Config whose LIAR classifier points at a custom file
pub fn with_liar_classifier(config: RegistryConfig, file: &str) -> RegistryConfig {
    config.with_domain(
        Domain::Liar,
        DomainArtifacts::new("liar_vectorizer.json", file),
    )
}

/// Install a test subscriber once; later calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fakescope=debug")
        .with_test_writer()
        .try_init();
}
