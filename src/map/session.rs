//! Click handling for a single map

use rand::{RngExt, rngs::StdRng};
use serde::Serialize;

use super::options::{MapOptions, MarkerIcon};
use super::popup::render_popup;
use crate::models::{Coordinate, HealthAssessment};
use crate::scoring::RiskScorer;

/// Receives every assessment a session produces
pub trait AssessmentListener {
    fn on_assessment(&mut self, assessment: &HealthAssessment);
}

impl<F> AssessmentListener for F
where
    F: FnMut(&HealthAssessment),
{
    fn on_assessment(&mut self, assessment: &HealthAssessment) {
        self(assessment)
    }
}

/// Marker placed at the last clicked point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinate,
    pub icon: MarkerIcon,
    pub popup: String,
}

/// One interactive map: options, a scorer, and the listener fed on each click.
///
/// Only the latest marker is held; earlier selections are dropped.
pub struct MapSession<L, R = StdRng> {
    options: MapOptions,
    scorer: RiskScorer<R>,
    listener: L,
    marker: Option<Marker>,
}

impl<L: AssessmentListener, R: RngExt> MapSession<L, R> {
    pub fn new(options: MapOptions, scorer: RiskScorer<R>, listener: L) -> Self {
        tracing::debug!(
            center = %options.center.format_coordinates(),
            zoom = options.zoom,
            "Map session created"
        );
        Self {
            options,
            scorer,
            listener,
            marker: None,
        }
    }

    /// Handle a click: assess the point, notify the listener, move the marker
    pub fn click(&mut self, latitude: f64, longitude: f64) -> &Marker {
        let assessment = self.scorer.assess(latitude, longitude);
        self.listener.on_assessment(&assessment);

        let marker = Marker {
            position: assessment.coordinate(),
            icon: self.options.marker_icon.clone(),
            popup: render_popup(&assessment),
        };
        self.marker.insert(marker)
    }

    #[must_use]
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    #[must_use]
    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Remove the current marker
    pub fn clear(&mut self) {
        self.marker = None;
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn into_listener(self) -> L {
        self.listener
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        seen: Vec<HealthAssessment>,
    }

    impl AssessmentListener for Recorder {
        fn on_assessment(&mut self, assessment: &HealthAssessment) {
            self.seen.push(assessment.clone());
        }
    }

    #[test]
    fn test_click_notifies_listener_and_places_marker() {
        let mut session = MapSession::new(
            MapOptions::default(),
            RiskScorer::seeded(11),
            Recorder::default(),
        );

        let marker = session.click(48.85, 2.35).clone();
        assert_eq!(marker.position, Coordinate::new(48.85, 2.35));
        assert_eq!(marker.icon, MapOptions::default().marker_icon);

        let recorder = session.listener();
        assert_eq!(recorder.seen.len(), 1);
        assert_eq!(marker.popup, render_popup(&recorder.seen[0]));
    }

    #[test]
    fn test_click_replaces_previous_marker() {
        let mut session = MapSession::new(
            MapOptions::default(),
            RiskScorer::seeded(3),
            Recorder::default(),
        );

        session.click(10.0, 10.0);
        session.click(-33.87, 151.21);

        let marker = session.marker().unwrap();
        assert_eq!(marker.position, Coordinate::new(-33.87, 151.21));
        assert_eq!(session.into_listener().seen.len(), 2);
    }

    #[test]
    fn test_closure_listener_and_clear() {
        let mut risk_indexes = Vec::new();
        {
            let mut session = MapSession::new(
                MapOptions::default(),
                RiskScorer::seeded(8),
                |assessment: &HealthAssessment| risk_indexes.push(assessment.risk_index()),
            );
            session.click(0.0, 0.0);
            session.clear();
            assert!(session.marker().is_none());
        }

        let expected = RiskScorer::seeded(8).assess(0.0, 0.0).risk_index();
        assert_eq!(risk_indexes, vec![expected]);
    }

    #[test]
    fn test_custom_icon_is_used() {
        let mut options = MapOptions::default();
        options.marker_icon.icon_url = "/assets/risk-pin.svg".to_string();

        let mut session =
            MapSession::new(options, RiskScorer::seeded(1), |_: &HealthAssessment| {});
        let marker = session.click(1.0, 1.0);
        assert_eq!(marker.icon.icon_url, "/assets/risk-pin.svg");
        assert_eq!(session.options().marker_icon.icon_url, "/assets/risk-pin.svg");
    }
}
