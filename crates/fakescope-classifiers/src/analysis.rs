//! Analysis entry point: raw text in, per-model results and overall risk out

use crate::aggregator::aggregate;
use crate::config::RegistryConfig;
use crate::inference::classify_with_pair;
use crate::normalizer::{is_blank, NormalizedText, Normalizer};
use crate::registry::{ModelRegistry, RegistryCell};
use fakescope_core::{
    ClassificationResult, Domain, DomainSelection, Error, Result, RiskAssessment,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

/// Message returned when the input is blank
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter news text.";

/// A domain whose inference failed during an analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainFailure {
    pub domain: Domain,
    pub message: String,
}

/// Outcome of analyzing one text
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Text as seen by the models
    pub normalized_text: NormalizedText,

    /// Results of the domains that succeeded, in selection order
    pub per_model_results: Vec<ClassificationResult>,

    /// Domains that failed; excluded from the overall risk
    pub failures: Vec<DomainFailure>,

    /// Risk aggregated over `per_model_results`
    pub overall_risk: RiskAssessment,
}

impl AnalysisReport {
    /// Whether every selected domain produced a result
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Analyze raw text against the selected domains.
///
/// Blank input is rejected before any model runs. A domain missing from the
/// registry aborts the call; an inference failure is recorded for that
/// domain and the remaining domains still run.
pub fn analyze(
    raw: &str,
    selection: DomainSelection,
    normalizer: &Normalizer,
    registry: &ModelRegistry,
) -> Result<AnalysisReport> {
    if is_blank(raw) {
        return Err(Error::validation(EMPTY_INPUT_MESSAGE));
    }

    let pairs = selection
        .domains()
        .iter()
        .map(|&domain| {
            registry
                .get(domain)
                .ok_or_else(|| Error::unknown_domain(domain.as_str()))
        })
        .collect::<Result<Vec<_>>>()?;

    let normalized_text = normalizer.normalize(raw);

    let mut per_model_results = Vec::with_capacity(pairs.len());
    let mut failures = Vec::new();

    for pair in pairs {
        match classify_with_pair(pair, &normalized_text) {
            Ok(result) => per_model_results.push(result),
            Err(e) => {
                warn!("✗ {} inference failed: {}", pair.domain(), e);
                failures.push(DomainFailure {
                    domain: pair.domain(),
                    message: e.to_string(),
                });
            }
        }
    }

    let overall_risk = aggregate(&per_model_results);

    info!(
        selection = ?selection,
        succeeded = per_model_results.len(),
        failed = failures.len(),
        tier = %overall_risk.tier,
        average_fake_risk = overall_risk.average_fake_risk,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        normalized_text,
        per_model_results,
        failures,
        overall_risk,
    })
}

/// Normalizer and registry bundled for repeated analyses
#[derive(Debug, Clone)]
pub struct Analyzer {
    normalizer: Normalizer,
    registry: Arc<ModelRegistry>,
}

impl Analyzer {
    pub fn new(normalizer: Normalizer, registry: Arc<ModelRegistry>) -> Self {
        Self {
            normalizer,
            registry,
        }
    }

    /// Build from configuration, loading models through the compute-once cell
    pub fn from_config(config: &RegistryConfig, cell: &RegistryCell) -> Result<Self> {
        let normalizer = Normalizer::new(config.load_stopwords()?)?;
        let registry = cell.get_or_load(config)?;
        Ok(Self::new(normalizer, registry))
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn registry(&self) -> &Arc<ModelRegistry> {
        &self.registry
    }

    pub fn analyze(&self, raw: &str, selection: DomainSelection) -> Result<AnalysisReport> {
        analyze(raw, selection, &self.normalizer, &self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_rejected_before_lookup() {
        // An empty registry would fail the lookup; validation must come first.
        let normalizer = Normalizer::english().unwrap();
        let registry = ModelRegistry::new();

        for raw in ["", "   ", "\n\t  \r\n", "\x1c", " \x1f\x1d "] {
            let err = analyze(raw, DomainSelection::Both, &normalizer, &registry).unwrap_err();
            assert!(matches!(err, Error::Validation(ref m) if m == EMPTY_INPUT_MESSAGE));
        }
    }

    #[test]
    fn test_unregistered_domain_aborts() {
        let normalizer = Normalizer::english().unwrap();
        let registry = ModelRegistry::new();

        let err = analyze("Some news", DomainSelection::Liar, &normalizer, &registry).unwrap_err();
        assert!(matches!(err, Error::UnknownDomain(ref d) if d == "LIAR"));
    }
}
