//! Data models for `RiskMap`
//!
//! This module contains the value objects produced and consumed by scoring:
//! - Coordinate: Geographic point a user clicked
//! - Assessment: The synthesized health metrics for that point
//! - Advisory: Fixed guidance tiers keyed by risk index
//! - Activity: Suggested two-hour outdoor window

pub mod activity;
pub mod advisory;
pub mod assessment;
pub mod coordinate;

// Re-export all public types for convenient access
pub use activity::ActivityWindow;
pub use advisory::Advisory;
pub use assessment::{HealthAssessment, Pollutant, assessments_to_json};
pub use coordinate::Coordinate;
