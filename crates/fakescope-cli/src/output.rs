//! Rendering of reports for the terminal

use fakescope_classifiers::AnalysisReport;
use fakescope_core::{Domain, RiskTier};
use serde::Serialize;
use std::path::PathBuf;

/// Caption printed under every text report
pub const DISCLAIMER: &str = "This tool estimates misinformation risk using learned patterns. \
                              It does not guarantee factual correctness.";

/// Load state of one domain's artifacts
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub domain: Domain,
    pub vectorizer: PathBuf,
    pub classifier: PathBuf,
    pub loaded: bool,
    pub detail: String,
}

fn tier_marker(tier: RiskTier) -> &'static str {
    match tier {
        RiskTier::High => "🚨",
        RiskTier::Moderate => "⚠️",
        RiskTier::Low => "✅",
    }
}

/// Human-readable analysis report
pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines = vec![
        format!("Processed text: {}", report.normalized_text),
        String::new(),
        "Model Predictions".to_string(),
    ];

    for result in &report.per_model_results {
        lines.push(String::new());
        lines.push(format!("  {}", result.domain.display_name()));
        lines.push(format!("    Prediction:       {}", result.verdict));
        lines.push(format!(
            "    Fake probability: {:.2}%",
            result.fake_probability_percent
        ));
    }

    for failure in &report.failures {
        lines.push(String::new());
        lines.push(format!("  {}", failure.domain.display_name()));
        lines.push(format!("    Unavailable: {}", failure.message));
    }

    let risk = &report.overall_risk;
    lines.push(String::new());
    lines.push("Final Risk Assessment".to_string());
    lines.push(format!("  {} {}", tier_marker(risk.tier), risk.tier.message()));
    lines.push(format!("  Average fake risk: {:.2}%", risk.average_fake_risk));
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}

/// Full report as pretty-printed JSON
pub fn render_report_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Table of configured domains and their artifact status
pub fn render_models(statuses: &[ModelStatus]) -> String {
    statuses
        .iter()
        .map(|status| {
            let mark = if status.loaded { "✓" } else { "✗" };
            format!(
                "{} {} [{}]\n    vectorizer: {}\n    classifier: {}\n    {}\n",
                mark,
                status.domain.display_name(),
                status.domain.category(),
                status.vectorizer.display(),
                status.classifier.display(),
                status.detail
            )
        })
        .collect()
}
