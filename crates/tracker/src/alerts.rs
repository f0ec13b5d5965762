//! Weather and traffic alerts for suggested routes.

use crate::models::route::Route;
use crate::models::types::{CommuteMethod, TrafficCondition, WeatherCondition};

/// A condition on a suggested route worth warning the user about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommuteAlert {
    /// Rain forecast on a cycling route.
    RainForCycling,
    /// Heavy traffic along the route.
    HeavyTraffic,
}

impl CommuteAlert {
    pub fn message(&self) -> &'static str {
        match self {
            Self::RainForCycling => "Rain expected during your cycling route",
            Self::HeavyTraffic => "Heavy traffic detected on your route",
        }
    }
}

/// Evaluate a route's conditions against the alert rules.
pub fn alerts_for(route: &Route) -> Vec<CommuteAlert> {
    let mut alerts = Vec::new();
    if route.weather == WeatherCondition::Rainy && route.commute_method == CommuteMethod::Cycling {
        alerts.push(CommuteAlert::RainForCycling);
    }
    if route.traffic == TrafficCondition::Heavy {
        alerts.push(CommuteAlert::HeavyTraffic);
    }
    alerts
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::identifiers::RouteIdentifier;

    fn route(
        method: CommuteMethod,
        weather: WeatherCondition,
        traffic: TrafficCondition,
    ) -> Route {
        Route {
            id: RouteIdentifier::new(),
            start_location: Point::new(-122.4194, 37.7749),
            end_location: Point::new(-122.4167, 37.7833),
            start_location_name: "Home".into(),
            end_location_name: "Office".into(),
            commute_method: method,
            distance_km: 5.2,
            duration_secs: 1800.0,
            weather,
            traffic,
            co2_saved_grams: 1200.0,
            is_completed: false,
            completed_at: None,
        }
    }

    #[test]
    fn test_rain_alert_only_for_cyclists() {
        let cycling = route(
            CommuteMethod::Cycling,
            WeatherCondition::Rainy,
            TrafficCondition::Light,
        );
        assert_eq!(alerts_for(&cycling), vec![CommuteAlert::RainForCycling]);

        let walking = route(
            CommuteMethod::Walking,
            WeatherCondition::Rainy,
            TrafficCondition::Light,
        );
        assert!(alerts_for(&walking).is_empty());
    }

    #[test]
    fn test_heavy_traffic_alert() {
        let jammed = route(
            CommuteMethod::Carpooling,
            WeatherCondition::Sunny,
            TrafficCondition::Heavy,
        );
        assert_eq!(alerts_for(&jammed), vec![CommuteAlert::HeavyTraffic]);
    }

    #[test]
    fn test_both_alerts_stack() {
        let grim = route(
            CommuteMethod::Cycling,
            WeatherCondition::Rainy,
            TrafficCondition::Heavy,
        );
        assert_eq!(
            alerts_for(&grim),
            vec![CommuteAlert::RainForCycling, CommuteAlert::HeavyTraffic]
        );
    }

    #[test]
    fn test_clear_conditions_raise_nothing() {
        let clear = route(
            CommuteMethod::Walking,
            WeatherCondition::Sunny,
            TrafficCondition::Light,
        );
        assert!(alerts_for(&clear).is_empty());
    }

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            CommuteAlert::RainForCycling.message(),
            "Rain expected during your cycling route"
        );
        assert_eq!(
            CommuteAlert::HeavyTraffic.message(),
            "Heavy traffic detected on your route"
        );
    }
}
