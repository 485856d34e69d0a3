//! Model registry: one immutable (vectorizer, classifier) pair per domain

use crate::artifact::{load_classifier, load_vectorizer};
use crate::classifier::ProbabilisticClassifier;
use crate::config::RegistryConfig;
use crate::features::ModelError;
use crate::vectorizer::Vectorizer;
use fakescope_core::{Domain, Error, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info};

/// Vectorizer and classifier trained together for one domain
#[derive(Clone)]
pub struct ModelPair {
    domain: Domain,
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn ProbabilisticClassifier>,
}

impl ModelPair {
    /// Pair a vectorizer with a classifier; their feature dimensions must agree
    pub fn new(
        domain: Domain,
        vectorizer: Arc<dyn Vectorizer>,
        classifier: Arc<dyn ProbabilisticClassifier>,
    ) -> std::result::Result<Self, ModelError> {
        if vectorizer.dimension() != classifier.n_features() {
            return Err(ModelError::DimensionMismatch {
                expected: classifier.n_features(),
                actual: vectorizer.dimension(),
            });
        }
        if classifier.classes().len() != 2 {
            return Err(ModelError::InvalidParameters(format!(
                "{} classifier has {} classes, expected 2",
                domain,
                classifier.classes().len()
            )));
        }

        Ok(Self {
            domain,
            vectorizer,
            classifier,
        })
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn vectorizer(&self) -> &Arc<dyn Vectorizer> {
        &self.vectorizer
    }

    pub fn classifier(&self) -> &Arc<dyn ProbabilisticClassifier> {
        &self.classifier
    }
}

impl std::fmt::Debug for ModelPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelPair")
            .field("domain", &self.domain)
            .field("vectorizer", &self.vectorizer.kind())
            .field("classifier", &self.classifier.kind())
            .field("features", &self.vectorizer.dimension())
            .finish()
    }
}

/// Read-only set of model pairs keyed by domain
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    pairs: HashMap<Domain, ModelPair>,
}

impl ModelRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model pair, replacing any pair for the same domain
    pub fn with_pair(mut self, pair: ModelPair) -> Self {
        self.pairs.insert(pair.domain(), pair);
        self
    }

    /// Get the pair for a domain
    pub fn get(&self, domain: Domain) -> Option<&ModelPair> {
        self.pairs.get(&domain)
    }

    /// Look up a pair by domain name
    pub fn lookup(&self, name: &str) -> Result<&ModelPair> {
        let domain: Domain = name.parse()?;
        self.get(domain).ok_or_else(|| Error::unknown_domain(name))
    }

    /// Check if a domain is registered
    pub fn has_domain(&self, domain: Domain) -> bool {
        self.pairs.contains_key(&domain)
    }

    /// Registered domains, in presentation order
    pub fn domains(&self) -> Vec<Domain> {
        let mut domains: Vec<Domain> = self.pairs.keys().copied().collect();
        domains.sort();
        domains
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Load every configured domain's artifacts.
///
/// All-or-nothing: the first missing, corrupt or incompatible artifact
/// aborts the load and no registry is returned.
pub fn load_registry(config: &RegistryConfig) -> Result<ModelRegistry> {
    config.validate()?;

    info!(
        "Loading model registry for {} domains from {}",
        Domain::ALL.len(),
        config.models_dir.display()
    );

    let mut registry = ModelRegistry::new();

    for domain in Domain::ALL {
        let (vectorizer_path, classifier_path) = config
            .artifact_paths(domain)
            .ok_or_else(|| Error::config(format!("No artifacts configured for {}", domain)))?;

        debug!("Loading {} vectorizer: {}", domain, vectorizer_path.display());
        let vectorizer = load_vectorizer(&vectorizer_path)?;

        debug!("Loading {} classifier: {}", domain, classifier_path.display());
        let classifier = load_classifier(&classifier_path)?;

        let pair = ModelPair::new(domain, vectorizer, classifier)
            .map_err(|e| Error::model_load(&classifier_path, e.to_string()))?;

        info!("✓ Loaded {} models ({:?})", domain, pair);
        registry = registry.with_pair(pair);
    }

    info!("Model registry initialized with {} domains", registry.len());
    Ok(registry)
}

/// Compute-once holder for the process-wide registry.
///
/// The first caller loads while holding the init lock; concurrent first
/// callers wait and then observe the same instance. Once set, reads are
/// lock-free. A failed load leaves the cell empty.
#[derive(Default)]
pub struct RegistryCell {
    registry: OnceLock<Arc<ModelRegistry>>,
    init_lock: Mutex<()>,
}

impl RegistryCell {
    /// Create an empty cell
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry, if it has been loaded
    pub fn get(&self) -> Option<Arc<ModelRegistry>> {
        self.registry.get().cloned()
    }

    /// Load from configuration on first call, return the cached instance after
    pub fn get_or_load(&self, config: &RegistryConfig) -> Result<Arc<ModelRegistry>> {
        self.get_or_try_init(|| load_registry(config))
    }

    /// Run `init` at most once successfully; later calls return the cached instance
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<ModelRegistry>>
    where
        F: FnOnce() -> Result<ModelRegistry>,
    {
        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        let _guard = self.init_lock.lock();

        // Another thread may have finished loading while we waited.
        if let Some(registry) = self.registry.get() {
            return Ok(Arc::clone(registry));
        }

        let registry = Arc::new(init()?);
        let _ = self.registry.set(Arc::clone(&registry));
        Ok(registry)
    }
}
