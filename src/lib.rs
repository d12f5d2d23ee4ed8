//! `RiskMap` - Environmental health risk assessments for clicked map points
//!
//! This library provides the risk scoring core, the value objects it
//! produces, and a headless map session that wires clicks to assessments.

pub mod config;
pub mod error;
pub mod logging;
pub mod map;
pub mod models;
pub mod scoring;

// Re-export core types for public API
pub use self::config::RiskMapConfig;
pub use error::RiskMapError;
pub use map::{AssessmentListener, MapOptions, MapSession, Marker};
pub use models::{
    ActivityWindow, Advisory, Coordinate, HealthAssessment, Pollutant, assessments_to_json,
};
pub use scoring::{RiskSample, RiskScorer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, RiskMapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
