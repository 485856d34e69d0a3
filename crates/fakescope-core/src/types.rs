//! Core types for FakeScope

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dataset/domain a model pair was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Domain {
    /// Political and public-statement claims
    #[serde(rename = "LIAR", alias = "liar", alias = "Liar")]
    Liar,

    /// Social-media and viral news
    #[serde(rename = "FakeNewsNet", alias = "fakenewsnet", alias = "FAKENEWSNET")]
    FakeNewsNet,
}

impl Domain {
    /// All supported domains, in presentation order
    pub const ALL: [Domain; 2] = [Domain::Liar, Domain::FakeNewsNet];

    /// Canonical registry key
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Liar => "LIAR",
            Self::FakeNewsNet => "FakeNewsNet",
        }
    }

    /// Human-readable model name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Liar => "LIAR Dataset",
            Self::FakeNewsNet => "FakeNewsNet Dataset",
        }
    }

    /// News category the domain's model is meant for
    pub fn category(&self) -> &'static str {
        match self {
            Self::Liar => "Political / Public Statements",
            Self::FakeNewsNet => "Social Media / Viral News",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liar" => Ok(Self::Liar),
            "fakenewsnet" => Ok(Self::FakeNewsNet),
            _ => Err(crate::Error::unknown_domain(s)),
        }
    }
}

/// Which models an analysis should run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainSelection {
    Liar,
    FakeNewsNet,
    Both,
}

impl DomainSelection {
    /// Domains covered by this selection, LIAR first
    pub fn domains(&self) -> &'static [Domain] {
        match self {
            Self::Liar => &[Domain::Liar],
            Self::FakeNewsNet => &[Domain::FakeNewsNet],
            Self::Both => &Domain::ALL,
        }
    }

    /// Label shown to the user when choosing a selection
    pub fn label(&self) -> &'static str {
        match self {
            Self::Liar => "Political / Public Statements (LIAR)",
            Self::FakeNewsNet => "Social Media / Viral News (FakeNewsNet)",
            Self::Both => "Analyze with Both Models",
        }
    }
}

impl Default for DomainSelection {
    fn default() -> Self {
        Self::Liar
    }
}

impl FromStr for DomainSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "liar" => Ok(Self::Liar),
            "fakenewsnet" | "fnn" => Ok(Self::FakeNewsNet),
            "both" | "all" => Ok(Self::Both),
            other => Err(format!(
                "unknown dataset selection '{}', expected one of: liar, fakenewsnet, both",
                other
            )),
        }
    }
}

/// Per-model verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Fake,
    LikelyReal,
}

impl Verdict {
    pub fn is_fake(&self) -> bool {
        matches!(self, Self::Fake)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fake => f.write_str("FAKE"),
            Self::LikelyReal => f.write_str("LIKELY REAL"),
        }
    }
}

/// Result of running one domain's model pair over a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Domain whose models produced this result
    pub domain: Domain,

    /// Verdict derived from the fake probability
    pub verdict: Verdict,

    /// Fake probability as a percentage (0.0-100.0)
    pub fake_probability_percent: f64,
}

impl ClassificationResult {
    /// Create a new classification result
    pub fn new(domain: Domain, verdict: Verdict, fake_probability_percent: f64) -> Self {
        Self {
            domain,
            verdict,
            fake_probability_percent,
        }
    }

    pub fn is_fake(&self) -> bool {
        self.verdict.is_fake()
    }
}

/// Overall risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// Message shown for the final assessment
    pub fn message(&self) -> &'static str {
        match self {
            Self::High => "Very High Risk of Fake News",
            Self::Moderate => "Moderate Risk - Verification Recommended",
            Self::Low => "Low Risk - Likely Legitimate News",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("LOW"),
            Self::Moderate => f.write_str("MODERATE"),
            Self::High => f.write_str("HIGH"),
        }
    }
}

/// Risk derived from a set of per-model results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub tier: RiskTier,

    /// Mean fake probability over results flagged FAKE (0.0 when none were)
    pub average_fake_risk: f64,
}
