//! Risk aggregation across per-model results

use fakescope_core::{ClassificationResult, RiskAssessment, RiskTier};

/// Average fake risk strictly above this is HIGH
pub const HIGH_RISK_THRESHOLD: f64 = 80.0;

/// Average fake risk strictly above this (and not HIGH) is MODERATE
pub const MODERATE_RISK_THRESHOLD: f64 = 60.0;

/// Tier for an average fake risk
pub fn tier_for(average_fake_risk: f64) -> RiskTier {
    if average_fake_risk > HIGH_RISK_THRESHOLD {
        RiskTier::High
    } else if average_fake_risk > MODERATE_RISK_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Combine per-model results into one assessment.
///
/// Only FAKE results contribute; their fake percentages are averaged. With
/// no FAKE result the average is 0 and the tier LOW.
pub fn aggregate(results: &[ClassificationResult]) -> RiskAssessment {
    let fake_scores: Vec<f64> = results
        .iter()
        .filter(|r| r.is_fake())
        .map(|r| r.fake_probability_percent)
        .collect();

    let average_fake_risk = if fake_scores.is_empty() {
        0.0
    } else {
        fake_scores.iter().sum::<f64>() / fake_scores.len() as f64
    };

    RiskAssessment {
        tier: tier_for(average_fake_risk),
        average_fake_risk,
    }
}
