//! Raw random draws and the composite risk formula

use rand::RngExt;
use std::ops::Range;

/// Sampled temperature range in degrees Celsius
pub const TEMPERATURE_RANGE: Range<f64> = 5.0..45.0;
/// Sampled UV index range
pub const UV_INDEX_RANGE: Range<f64> = 0.0..12.0;
/// Sampled PM2.5 range in µg/m³
pub const POLLUTANT_RANGE: Range<f64> = 0.0..150.0;
/// Sampled start hour of the activity window
pub const HOUR_RANGE: Range<u32> = 0..24;

/// Reference scale each reading is normalized against.
///
/// These are smaller than the sampled maxima for temperature and pollutant,
/// so the risk index can reach roughly 133.
const TEMPERATURE_REFERENCE: f64 = 30.0;
const UV_INDEX_REFERENCE: f64 = 12.0;
const POLLUTANT_REFERENCE: f64 = 100.0;

/// The four unrounded draws behind one assessment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSample {
    pub temperature: f64,
    pub uv_index: f64,
    pub pollutant_value: f64,
    pub start_hour: u32,
}

impl RiskSample {
    /// Draw temperature, UV, pollutant and hour, in that order
    pub fn draw<R: RngExt>(rng: &mut R) -> Self {
        Self {
            temperature: rng.random_range(TEMPERATURE_RANGE),
            uv_index: rng.random_range(UV_INDEX_RANGE),
            pollutant_value: rng.random_range(POLLUTANT_RANGE),
            start_hour: rng.random_range(HOUR_RANGE),
        }
    }

    #[must_use]
    pub fn risk_index(&self) -> u32 {
        risk_index(self.temperature, self.uv_index, self.pollutant_value)
    }
}

/// Mean of the normalized readings scaled to percent, rounded, unclamped.
///
/// Negative inputs only arise from hand-built samples and saturate to 0.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn risk_index(temperature: f64, uv_index: f64, pollutant_value: f64) -> u32 {
    let normalized = temperature / TEMPERATURE_REFERENCE
        + uv_index / UV_INDEX_REFERENCE
        + pollutant_value / POLLUTANT_REFERENCE;
    ((normalized / 3.0) * 100.0).round() as u32
}

/// Round half away from zero to the given number of decimal places
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let multiplier = 10_f64.powi(i32::try_from(decimals).unwrap_or(0));
    (value * multiplier).round() / multiplier
}
