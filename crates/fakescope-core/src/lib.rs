//! FakeScope Core
//!
//! Core types and error handling shared across FakeScope components.
//!
//! This crate provides:
//! - Domain identifiers and dataset selection
//! - Per-model classification results and the aggregated risk assessment
//! - Error types and result handling

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    ClassificationResult, Domain, DomainSelection, RiskAssessment, RiskTier, Verdict,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        ClassificationResult, Domain, DomainSelection, RiskAssessment, RiskTier, Verdict,
    };
}
