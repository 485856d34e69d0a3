//! Configuration for the model registry

use crate::stopwords::StopWords;
use fakescope_core::{Domain, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Where each domain's artifacts live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Directory relative artifact paths resolve against
    #[serde(default = "default_models_dir")]
    pub models_dir: PathBuf,

    /// Newline-separated stop-word list; built-in English list when absent
    #[serde(default)]
    pub stopwords: Option<PathBuf>,

    /// Artifact files per domain
    #[serde(default = "default_domains")]
    pub domains: BTreeMap<Domain, DomainArtifacts>,
}

/// Vectorizer and classifier files for one domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainArtifacts {
    pub vectorizer: PathBuf,
    pub classifier: PathBuf,
}

impl DomainArtifacts {
    pub fn new(vectorizer: impl Into<PathBuf>, classifier: impl Into<PathBuf>) -> Self {
        Self {
            vectorizer: vectorizer.into(),
            classifier: classifier.into(),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            models_dir: default_models_dir(),
            stopwords: None,
            domains: default_domains(),
        }
    }
}

impl RegistryConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Override the models directory
    pub fn with_models_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.models_dir = dir.into();
        self
    }

    /// Override the stop-word list
    pub fn with_stopwords(mut self, path: impl Into<PathBuf>) -> Self {
        self.stopwords = Some(path.into());
        self
    }

    /// Replace one domain's artifacts
    pub fn with_domain(mut self, domain: Domain, artifacts: DomainArtifacts) -> Self {
        self.domains.insert(domain, artifacts);
        self
    }

    /// Every supported domain must be configured
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = Domain::ALL
            .iter()
            .filter(|d| !self.domains.contains_key(*d))
            .map(|d| d.as_str())
            .collect();

        if !missing.is_empty() {
            return Err(Error::config(format!(
                "No artifacts configured for domain(s): {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Resolve a configured path against `models_dir`
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.models_dir.join(path)
        }
    }

    /// Resolved `(vectorizer, classifier)` paths for a domain
    pub fn artifact_paths(&self, domain: Domain) -> Option<(PathBuf, PathBuf)> {
        self.domains
            .get(&domain)
            .map(|a| (self.resolve(&a.vectorizer), self.resolve(&a.classifier)))
    }

    /// Stop words named by the configuration
    pub fn load_stopwords(&self) -> Result<Arc<StopWords>> {
        match &self.stopwords {
            Some(path) => Ok(Arc::new(StopWords::from_file(path)?)),
            None => Ok(StopWords::english()),
        }
    }
}

fn default_models_dir() -> PathBuf {
    PathBuf::from("./models")
}

fn default_domains() -> BTreeMap<Domain, DomainArtifacts> {
    let mut domains = BTreeMap::new();
    domains.insert(
        Domain::Liar,
        DomainArtifacts::new("liar_vectorizer.json", "liar_model.json"),
    );
    domains.insert(
        Domain::FakeNewsNet,
        DomainArtifacts::new("fakenewsnet_vectorizer.json", "fakenewsnet_model.json"),
    );
    domains
}
