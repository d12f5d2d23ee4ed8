//! Marker popup markup

use crate::models::HealthAssessment;

/// Render the popup shown on the marker for an assessment.
///
/// Every interpolated value comes from fixed labels or numbers, so nothing
/// needs escaping.
#[must_use]
pub fn render_popup(assessment: &HealthAssessment) -> String {
    let coordinate = assessment.coordinate();
    let advisory = assessment.advisory();

    format!(
        concat!(
            "<div class=\"risk-popup\">",
            "<h3>Health Risk Assessment</h3>",
            "<p class=\"coordinates\">{coordinates}</p>",
            "<ul>",
            "<li>Temperature: {temperature}</li>",
            "<li>UV Index: {uv}</li>",
            "<li>{pollutant}</li>",
            "<li>Risk Index: {risk}</li>",
            "</ul>",
            "<p class=\"advisory advisory-{tier}\">{advisory}</p>",
            "<p class=\"activity-window\">Best time for outdoor activity: {window}</p>",
            "</div>"
        ),
        coordinates = coordinate.format_coordinates(),
        temperature = assessment.format_temperature(),
        uv = assessment.format_uv_index(),
        pollutant = assessment.format_pollutant(),
        risk = assessment.format_risk_index(),
        tier = format!("{advisory:?}").to_lowercase(),
        advisory = advisory.message(),
        window = assessment.activity_window().label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Coordinate;
    use crate::scoring::{RiskSample, RiskScorer};

    #[test]
    fn test_popup_contains_all_fields() {
        let sample = RiskSample {
            temperature: 21.37,
            uv_index: 5.26,
            pollutant_value: 73.6,
            start_hour: 23,
        };
        let assessment =
            RiskScorer::<rand::rngs::StdRng>::score(Coordinate::new(1.5, 2.25), &sample);
        let html = render_popup(&assessment);

        assert!(html.starts_with("<div class=\"risk-popup\">"));
        assert!(html.contains("1.5000, 2.2500"));
        assert!(html.contains("Temperature: 21.4°C"));
        assert!(html.contains("UV Index: 5.3"));
        assert!(html.contains("PM2.5: 74 µg/m³"));
        assert!(html.contains(&format!("Risk Index: {}/100", assessment.risk_index())));
        assert!(html.contains(assessment.advisory().message()));
        assert!(html.contains("23:00 - 1:00 (local time)"));
    }
}
