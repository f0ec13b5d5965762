//! Suggested and completed commute routes.

use chrono::{DateTime, Utc};
use geo::Point;
use serde::{Deserialize, Serialize};

use crate::identifiers::RouteIdentifier;
use crate::models::types::{
    CommuteMethod, Result, TrackerError, TrafficCondition, WeatherCondition,
};

/// Points follow the `geo` convention of x = longitude, y = latitude.
/// The persisted form spells both out as named floating-point fields.
mod latlng {
    use geo::Point;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct LatLng {
        latitude: f64,
        longitude: f64,
    }

    pub fn serialize<S: Serializer>(point: &Point<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        LatLng {
            latitude: point.y(),
            longitude: point.x(),
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point<f64>, D::Error> {
        let raw = LatLng::deserialize(deserializer)?;
        Ok(Point::new(raw.longitude, raw.latitude))
    }
}

/// A single route candidate.
///
/// Routes live in the transient suggested batch until they are either
/// completed (copied into the history, removed from the batch) or discarded
/// when a newer search replaces the batch. A completed route is immutable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteIdentifier,
    #[serde(with = "latlng")]
    pub start_location: Point<f64>,
    #[serde(with = "latlng")]
    pub end_location: Point<f64>,
    pub start_location_name: String,
    pub end_location_name: String,
    pub commute_method: CommuteMethod,
    /// Kilometers, always positive.
    pub distance_km: f64,
    /// Seconds, always positive.
    pub duration_secs: f64,
    pub weather: WeatherCondition,
    pub traffic: TrafficCondition,
    /// Grams of CO2 saved versus driving, as estimated by the provider.
    pub co2_saved_grams: f64,
    pub is_completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Route {
    /// Consume the suggested route and stamp it completed. Called exactly
    /// once per route, on the Suggested -> Completed transition.
    pub(crate) fn into_completed(self, at: DateTime<Utc>) -> Self {
        Self {
            is_completed: true,
            completed_at: Some(at),
            ..self
        }
    }
}

/// A route search request: where from, where to, and what to call the
/// endpoints. Empty display names fall back to generic labels.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub start: Point<f64>,
    pub end: Point<f64>,
    pub start_name: String,
    pub end_name: String,
}

impl RouteQuery {
    pub const DEFAULT_START_NAME: &'static str = "Current Location";
    pub const DEFAULT_END_NAME: &'static str = "Destination";

    pub fn new(
        start: Point<f64>,
        end: Point<f64>,
        start_name: impl Into<String>,
        end_name: impl Into<String>,
    ) -> Self {
        let start_name = non_empty_or(start_name.into(), Self::DEFAULT_START_NAME);
        let end_name = non_empty_or(end_name.into(), Self::DEFAULT_END_NAME);
        Self {
            start,
            end,
            start_name,
            end_name,
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_point(self.start, "start location")?;
        validate_point(self.end, "end location")
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn validate_point(point: Point<f64>, which: &str) -> Result<()> {
    let (lon, lat) = (point.x(), point.y());
    if !lon.is_finite() || !lat.is_finite() {
        return Err(TrackerError::Validation(format!(
            "{} coordinates must be finite",
            which
        )));
    }
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(TrackerError::Validation(format!(
            "{} coordinates out of range: lat {}, lon {}",
            which, lat, lon
        )));
    }
    Ok(())
}
