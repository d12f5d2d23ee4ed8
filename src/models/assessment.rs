//! Health assessment model and display methods

use serde::{Serialize, Serializer};
use std::fmt;

use super::{ActivityWindow, Advisory, Coordinate};

/// Pollutant measured in an assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Pollutant {
    #[serde(rename = "PM2.5")]
    Pm25,
}

impl Pollutant {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
        }
    }

    /// Concentration unit
    #[must_use]
    pub fn unit(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "µg/m³",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Synthesized health metrics for a single clicked point.
///
/// Only the scorer builds these. `risk_index` is derived from the unrounded
/// draws behind `temperature`, `uv_index` and `pollutant_value`, so it may
/// not match a recomputation from the rounded fields exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthAssessment {
    #[serde(flatten)]
    coordinate: Coordinate,
    temperature: f64,
    uv_index: f64,
    #[serde(rename = "pollutantKind")]
    pollutant: Pollutant,
    pollutant_value: u32,
    risk_index: u32,
    #[serde(serialize_with = "serialize_display")]
    advisory: Advisory,
    #[serde(serialize_with = "serialize_display")]
    activity_window: ActivityWindow,
}

fn serialize_display<T: fmt::Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl HealthAssessment {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        coordinate: Coordinate,
        temperature: f64,
        uv_index: f64,
        pollutant: Pollutant,
        pollutant_value: u32,
        risk_index: u32,
        advisory: Advisory,
        activity_window: ActivityWindow,
    ) -> Self {
        Self {
            coordinate,
            temperature,
            uv_index,
            pollutant,
            pollutant_value,
            risk_index,
            advisory,
            activity_window,
        }
    }

    /// The clicked point, echoed back unchanged
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Temperature in degrees Celsius, one decimal place
    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// UV index, one decimal place
    #[must_use]
    pub fn uv_index(&self) -> f64 {
        self.uv_index
    }

    #[must_use]
    pub fn pollutant(&self) -> Pollutant {
        self.pollutant
    }

    /// Pollutant concentration rounded to the nearest whole unit
    #[must_use]
    pub fn pollutant_value(&self) -> u32 {
        self.pollutant_value
    }

    /// Composite risk score, nominally 0-100 but unclamped
    #[must_use]
    pub fn risk_index(&self) -> u32 {
        self.risk_index
    }

    #[must_use]
    pub fn advisory(&self) -> Advisory {
        self.advisory
    }

    #[must_use]
    pub fn activity_window(&self) -> ActivityWindow {
        self.activity_window
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    #[must_use]
    pub fn format_uv_index(&self) -> String {
        format!("{:.1}", self.uv_index)
    }

    /// Format pollutant as "PM2.5: 74 µg/m³"
    #[must_use]
    pub fn format_pollutant(&self) -> String {
        format!(
            "{}: {} {}",
            self.pollutant.label(),
            self.pollutant_value,
            self.pollutant.unit()
        )
    }

    #[must_use]
    pub fn format_risk_index(&self) -> String {
        format!("{}/100", self.risk_index)
    }

    /// Encode as the JSON object handed to rendering layers
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Pretty JSON for a batch: a bare object for one assessment, an array otherwise
pub fn assessments_to_json(assessments: &[HealthAssessment]) -> crate::Result<String> {
    match assessments {
        [single] => single.to_json_pretty(),
        all => Ok(serde_json::to_string_pretty(all)?),
    }
}

impl fmt::Display for HealthAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Location:     {}", self.coordinate.format_coordinates())?;
        writeln!(f, "Temperature:  {}", self.format_temperature())?;
        writeln!(f, "UV Index:     {}", self.format_uv_index())?;
        writeln!(f, "Pollutant:    {}", self.format_pollutant())?;
        writeln!(f, "Risk Index:   {}", self.format_risk_index())?;
        writeln!(f, "Advisory:     {}", self.advisory)?;
        write!(f, "Best window:  {}", self.activity_window)
    }
}
