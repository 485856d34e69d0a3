//! Inference engine: normalized text to a per-domain verdict
//!
//! The mapping from class probabilities to a fake probability differs by
//! domain and is kept as trained:
//! - LIAR: the larger of the two class probabilities
//! - FakeNewsNet: the probability of class index 0, which that model's
//!   training convention defines as fake

use crate::features::ModelError;
use crate::normalizer::NormalizedText;
use crate::registry::{ModelPair, ModelRegistry};
use fakescope_core::{ClassificationResult, Domain, Error, Result, Verdict};
use tracing::debug;

/// A result is FAKE only when its fake probability is strictly above this
pub const FAKE_THRESHOLD_PERCENT: f64 = 70.0;

/// Tolerance on the sum of a predicted distribution
const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// How a domain turns a two-class distribution into a fake probability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeProbabilityRule {
    /// Probability of whichever class dominates
    DominantClass,

    /// Probability of a fixed class index
    ClassIndex(usize),
}

impl FakeProbabilityRule {
    pub fn for_domain(domain: Domain) -> Self {
        match domain {
            Domain::Liar => Self::DominantClass,
            Domain::FakeNewsNet => Self::ClassIndex(0),
        }
    }

    /// Fake probability in `[0, 1]`
    pub fn apply(&self, probabilities: &[f64]) -> std::result::Result<f64, ModelError> {
        match self {
            Self::DominantClass => probabilities
                .iter()
                .copied()
                .reduce(f64::max)
                .ok_or_else(|| ModelError::InvalidDistribution("empty distribution".to_string())),
            Self::ClassIndex(index) => probabilities.get(*index).copied().ok_or_else(|| {
                ModelError::InvalidDistribution(format!(
                    "class index {} out of range for {} classes",
                    index,
                    probabilities.len()
                ))
            }),
        }
    }
}

/// Verdict for a fake probability percentage
pub fn verdict_for(fake_probability_percent: f64) -> Verdict {
    if fake_probability_percent > FAKE_THRESHOLD_PERCENT {
        Verdict::Fake
    } else {
        Verdict::LikelyReal
    }
}

/// Round a percentage to two decimals for reporting.
///
/// Exact halves go to the even neighbour, so 70.125 reports as 70.12.
pub fn round_percent(percent: f64) -> f64 {
    let scaled = percent * 100.0;
    let mut rounded = scaled.round();
    if (rounded - scaled).abs() == 0.5 {
        rounded = 2.0 * (scaled / 2.0).round();
    }
    rounded / 100.0
}

fn validate_distribution(probabilities: &[f64]) -> std::result::Result<(), ModelError> {
    if probabilities.len() != 2 {
        return Err(ModelError::InvalidDistribution(format!(
            "expected 2 classes, got {}",
            probabilities.len()
        )));
    }
    if probabilities.iter().any(|p| !p.is_finite()) {
        return Err(ModelError::NonFinite("class probabilities".to_string()));
    }
    if probabilities
        .iter()
        .any(|p| *p < -DISTRIBUTION_TOLERANCE || *p > 1.0 + DISTRIBUTION_TOLERANCE)
    {
        return Err(ModelError::InvalidDistribution(format!(
            "probabilities outside [0, 1]: {:?}",
            probabilities
        )));
    }

    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() > DISTRIBUTION_TOLERANCE {
        return Err(ModelError::InvalidDistribution(format!(
            "probabilities sum to {}",
            total
        )));
    }
    Ok(())
}

/// Classify normalized text with the named domain's models
pub fn classify(
    domain: &str,
    text: &NormalizedText,
    registry: &ModelRegistry,
) -> Result<ClassificationResult> {
    let pair = registry.lookup(domain)?;
    classify_with_pair(pair, text)
}

/// Classify normalized text with an already resolved model pair
pub fn classify_with_pair(pair: &ModelPair, text: &NormalizedText) -> Result<ClassificationResult> {
    let domain = pair.domain();
    let fail = |stage: &str, e: ModelError| Error::inference(domain.as_str(), format!("{}: {}", stage, e));

    let features = pair
        .vectorizer()
        .transform(text)
        .map_err(|e| fail("vectorization failed", e))?;

    let probabilities = pair
        .classifier()
        .predict_probabilities(&features)
        .map_err(|e| fail("classification failed", e))?;

    validate_distribution(&probabilities).map_err(|e| fail("classifier output rejected", e))?;

    let fake_probability = FakeProbabilityRule::for_domain(domain)
        .apply(&probabilities)
        .map_err(|e| fail("classifier output rejected", e))?;

    let percent = (fake_probability * 100.0).clamp(0.0, 100.0);
    let verdict = verdict_for(percent);

    debug!(
        domain = %domain,
        features = features.nnz(),
        probabilities = ?probabilities,
        fake_percent = percent,
        "Classified text as {}",
        verdict
    );

    Ok(ClassificationResult::new(domain, verdict, round_percent(percent)))
}
