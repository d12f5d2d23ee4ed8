//! Risk scoring module
//!
//! Turns a clicked coordinate plus four random draws into a
//! [`HealthAssessment`](crate::models::HealthAssessment):
//! - Sampling of temperature, UV, pollutant and activity hour
//! - Composite risk index over the unrounded samples
//! - Advisory and activity window selection

pub mod sample;
pub mod scorer;

pub use sample::{RiskSample, risk_index, round_to};
pub use scorer::RiskScorer;
