//! Core enums and the error taxonomy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::identifiers::RouteIdentifier;

// ============================================================================
// Enums
// ============================================================================

/// Mode of transport for a commute trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteMethod {
    Walking,
    Cycling,
    PublicTransport,
    Carpooling,
    Driving,
}

impl CommuteMethod {
    /// Display label (e.g., for a route detail row).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Cycling => "Cycling",
            Self::PublicTransport => "Public Transport",
            Self::Carpooling => "Carpooling",
            Self::Driving => "Driving",
        }
    }
}

impl fmt::Display for CommuteMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user-declared soft preference influencing route ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EcoPreference {
    PreferCarpooling,
    PrioritizeBiking,
    PreferPublicTransport,
}

impl EcoPreference {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PreferCarpooling => "I prefer carpooling",
            Self::PrioritizeBiking => "I prioritize biking",
            Self::PreferPublicTransport => "I prefer public transport",
        }
    }
}

impl fmt::Display for EcoPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Forecast condition attached to a suggested route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Cloudy,
    Windy,
}

/// Traffic level attached to a suggested route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficCondition {
    Light,
    Moderate,
    Heavy,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Bad user input. Never mutates state; surfaced synchronously.
    #[error("invalid input: {0}")]
    Validation(String),

    /// The route id is not in the current suggested batch.
    #[error("route not found in current suggestions: {0}")]
    RouteNotFound(RouteIdentifier),

    /// The route/weather/traffic provider failed. The previous suggested
    /// batch is left untouched.
    #[error("route provider failed: {0}")]
    Provider(String),

    /// Storage failed. Surfaced on save; degraded to defaults on load.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serde_encoding() {
        let encoded = serde_json::to_string(&CommuteMethod::PublicTransport).unwrap();
        assert_eq!(encoded, "\"public_transport\"");

        let decoded: CommuteMethod = serde_json::from_str("\"carpooling\"").unwrap();
        assert_eq!(decoded, CommuteMethod::Carpooling);
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(CommuteMethod::PublicTransport.label(), "Public Transport");
        assert_eq!(
            EcoPreference::PrioritizeBiking.to_string(),
            "I prioritize biking"
        );
    }

    #[test]
    fn test_error_display() {
        let err = TrackerError::Validation("profile name must not be empty".into());
        assert_eq!(
            err.to_string(),
            "invalid input: profile name must not be empty"
        );
    }
}
