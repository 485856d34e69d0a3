//! FakeScope Classifiers
//!
//! Fake-news risk inference over pre-trained text classifiers.
//!
//! The pipeline runs in four steps:
//! - Normalization: lowercase, strip URLs and non-letters, drop stop words
//! - Vectorization: TF-IDF features from the domain's fitted vocabulary
//! - Classification: a two-class probability distribution per domain
//! - Aggregation: average of FAKE scores mapped to a LOW/MODERATE/HIGH tier
//!
//! Models are loaded once per process into a read-only [`ModelRegistry`]
//! and passed explicitly to every call.

pub mod aggregator;
pub mod analysis;
pub mod artifact;
pub mod classifier;
pub mod config;
pub mod features;
pub mod inference;
pub mod normalizer;
pub mod registry;
pub mod stopwords;
pub mod vectorizer;

pub use aggregator::aggregate;
pub use analysis::{analyze, AnalysisReport, Analyzer, DomainFailure, EMPTY_INPUT_MESSAGE};
pub use artifact::{ClassifierArtifact, VectorizerArtifact, FORMAT_VERSION};
pub use classifier::{LogisticRegression, MultinomialNb, ProbabilisticClassifier};
pub use config::{DomainArtifacts, RegistryConfig};
pub use features::{FeatureVector, ModelError};
pub use inference::{classify, FakeProbabilityRule, FAKE_THRESHOLD_PERCENT};
pub use normalizer::{is_blank, NormalizedText, Normalizer};
pub use registry::{load_registry, ModelPair, ModelRegistry, RegistryCell};
pub use stopwords::StopWords;
pub use vectorizer::{Norm, TfidfVectorizer, Vectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analysis::{analyze, AnalysisReport, Analyzer};
    pub use crate::config::RegistryConfig;
    pub use crate::normalizer::{NormalizedText, Normalizer};
    pub use crate::registry::{ModelRegistry, RegistryCell};
    pub use fakescope_core::prelude::*;
}
