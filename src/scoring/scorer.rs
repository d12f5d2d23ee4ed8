//! Risk scorer turning clicked coordinates into health assessments

use rand::{RngExt, SeedableRng, rngs::StdRng};

use super::sample::{RiskSample, round_to};
use crate::config::ScorerConfig;
use crate::models::{ActivityWindow, Advisory, Coordinate, HealthAssessment, Pollutant};

/// Produces [`HealthAssessment`]s from an injected random source.
///
/// Output depends only on the coordinate and the draws taken from `rng`;
/// two scorers seeded alike yield identical assessment sequences.
#[derive(Debug, Clone)]
pub struct RiskScorer<R = StdRng> {
    rng: R,
}

impl RiskScorer<StdRng> {
    /// Deterministic scorer for a fixed seed
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Scorer seeded from the thread-local generator
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::seeded(rand::rng().random())
    }

    #[must_use]
    pub fn from_config(config: &ScorerConfig) -> Self {
        match config.seed {
            Some(seed) => {
                tracing::debug!(seed, "Using seeded random source");
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: RngExt> RiskScorer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Take the next four draws from the random source
    pub fn draw(&mut self) -> RiskSample {
        RiskSample::draw(&mut self.rng)
    }

    /// Assess a clicked point. Coordinates are echoed, never validated.
    #[tracing::instrument(name = "assess", level = "debug", skip(self))]
    pub fn assess(&mut self, latitude: f64, longitude: f64) -> HealthAssessment {
        let sample = self.draw();
        let assessment = Self::score(Coordinate::new(latitude, longitude), &sample);
        tracing::debug!(
            risk_index = assessment.risk_index(),
            advisory = ?assessment.advisory(),
            "Assessment produced"
        );
        assessment
    }

    /// Derive every assessment field from one sample
    #[must_use]
    // pollutant draws are in [0, 150), so the rounded value always fits
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn score(coordinate: Coordinate, sample: &RiskSample) -> HealthAssessment {
        let risk_index = sample.risk_index();

        HealthAssessment::new(
            coordinate,
            round_to(sample.temperature, 1),
            round_to(sample.uv_index, 1),
            Pollutant::Pm25,
            sample.pollutant_value.round() as u32,
            risk_index,
            Advisory::for_risk_index(risk_index),
            ActivityWindow::starting_at(sample.start_hour),
        )
    }
}
