//! The commuter profile and its derived sustainability metrics.

use serde::{Deserialize, Serialize};

use crate::identifiers::ProfileIdentifier;
use crate::models::route::Route;
use crate::models::types::{CommuteMethod, EcoPreference};
use crate::models::window::CommuteWindow;

/// A single commuter's profile.
///
/// `total_green_kilometers` and `total_co2_saved_grams` are derived values:
/// they always equal the sums over the completed-route history. They are
/// updated incrementally on completion and recomputed wholesale on load, with
/// the history as the source of truth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: ProfileIdentifier,
    pub name: String,
    pub preferred_method: CommuteMethod,
    pub eco_preferences: Vec<EcoPreference>,
    pub total_green_kilometers: f64,
    pub total_co2_saved_grams: f64,
    pub preferred_window: Option<CommuteWindow>,
}

impl UserProfile {
    /// A fresh profile with zeroed metrics and no preferred window.
    pub fn new(
        name: impl Into<String>,
        preferred_method: CommuteMethod,
        eco_preferences: Vec<EcoPreference>,
    ) -> Self {
        Self {
            id: ProfileIdentifier::new(),
            name: name.into(),
            preferred_method,
            eco_preferences,
            total_green_kilometers: 0.0,
            total_co2_saved_grams: 0.0,
            preferred_window: None,
        }
    }

    /// Fold one newly completed route into the running totals.
    pub fn apply_completion(&mut self, route: &Route) {
        self.total_green_kilometers += route.distance_km;
        self.total_co2_saved_grams += route.co2_saved_grams;
    }

    /// Replace the running totals with the sums over the full history.
    pub fn recompute_from(&mut self, completed: &[Route]) {
        self.total_green_kilometers = completed.iter().map(|r| r.distance_km).sum();
        self.total_co2_saved_grams = completed.iter().map(|r| r.co2_saved_grams).sum();
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use chrono::Utc;
    use geo::Point;

    use super::*;
    use crate::identifiers::RouteIdentifier;
    use crate::models::types::{TrafficCondition, WeatherCondition};

    fn completed_route(distance_km: f64, co2_saved_grams: f64) -> Route {
        Route {
            id: RouteIdentifier::new(),
            start_location: Point::new(-122.4194, 37.7749),
            end_location: Point::new(-122.4167, 37.7833),
            start_location_name: "Home".into(),
            end_location_name: "Office".into(),
            commute_method: CommuteMethod::Walking,
            distance_km,
            duration_secs: 3600.0,
            weather: WeatherCondition::Sunny,
            traffic: TrafficCondition::Light,
            co2_saved_grams,
            is_completed: true,
            completed_at: Some(Utc::now()),
        }
    }

    #[test]
    fn test_new_profile_is_zeroed() {
        let profile = UserProfile::new("Alex", CommuteMethod::Cycling, vec![]);
        assert_eq!(profile.total_green_kilometers, 0.0);
        assert_eq!(profile.total_co2_saved_grams, 0.0);
        assert!(profile.preferred_window.is_none());
    }

    #[test]
    fn test_apply_completion_accumulates() {
        let mut profile = UserProfile::new("Alex", CommuteMethod::Cycling, vec![]);
        profile.apply_completion(&completed_route(4.8, 1500.0));
        profile.apply_completion(&completed_route(5.2, 1200.0));

        assert_relative_eq!(profile.total_green_kilometers, 10.0);
        assert_relative_eq!(profile.total_co2_saved_grams, 2700.0);
    }

    #[test]
    fn test_recompute_matches_history_sums() {
        let history = vec![
            completed_route(4.8, 1500.0),
            completed_route(6.0, 800.0),
            completed_route(5.5, 600.0),
        ];

        let mut profile = UserProfile::new("Alex", CommuteMethod::Walking, vec![]);
        profile.total_green_kilometers = 999.0; // stale cached totals
        profile.total_co2_saved_grams = 999.0;
        profile.recompute_from(&history);

        assert_relative_eq!(profile.total_green_kilometers, 16.3);
        assert_relative_eq!(profile.total_co2_saved_grams, 2900.0);
    }

    #[test]
    fn test_profile_serde_round_trip() {
        let mut profile = UserProfile::new(
            "Alex",
            CommuteMethod::PublicTransport,
            vec![EcoPreference::PreferPublicTransport],
        );
        profile.preferred_window = Some(CommuteWindow::new(
            crate::models::window::TimeOfDay::new(8, 0).unwrap(),
            crate::models::window::TimeOfDay::new(9, 0).unwrap(),
        ));

        let encoded = serde_json::to_vec(&profile).unwrap();
        let decoded: UserProfile = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(profile, decoded);
    }
}
