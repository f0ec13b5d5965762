//! Fixed-data route provider.
//!
//! Stands in for the real routing/weather/traffic integration: every fetch
//! returns the same four eco-friendly candidates over the queried endpoints,
//! after a fixed delay. Route ids are minted fresh per batch.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::identifiers::RouteIdentifier;
use crate::models::route::{Route, RouteQuery};
use crate::models::types::{
    CommuteMethod, Result, TrafficCondition, WeatherCondition,
};
use crate::provider::RouteProvider;

/// (method, distance km, duration s, weather, traffic, co2 saved g)
const FIXED_ROUTES: [(
    CommuteMethod,
    f64,
    f64,
    WeatherCondition,
    TrafficCondition,
    f64,
); 4] = [
    (
        CommuteMethod::Cycling,
        5.2,
        1800.0,
        WeatherCondition::Sunny,
        TrafficCondition::Light,
        1200.0,
    ),
    (
        CommuteMethod::PublicTransport,
        6.0,
        2400.0,
        WeatherCondition::Sunny,
        TrafficCondition::Moderate,
        800.0,
    ),
    (
        CommuteMethod::Walking,
        4.8,
        3600.0,
        WeatherCondition::Sunny,
        TrafficCondition::Light,
        1500.0,
    ),
    (
        CommuteMethod::Carpooling,
        5.5,
        2100.0,
        WeatherCondition::Sunny,
        TrafficCondition::Moderate,
        600.0,
    ),
];

pub struct StaticRouteProvider {
    delay: Duration,
}

impl StaticRouteProvider {
    /// Provider with the production one-second response delay.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// No artificial delay; handy in tests.
    pub fn immediate() -> Self {
        Self::with_delay(Duration::ZERO)
    }

    fn build_batch(&self, query: &RouteQuery) -> Vec<Route> {
        FIXED_ROUTES
            .iter()
            .map(
                |&(method, distance_km, duration_secs, weather, traffic, co2_saved_grams)| Route {
                    id: RouteIdentifier::new(),
                    start_location: query.start,
                    end_location: query.end,
                    start_location_name: query.start_name.clone(),
                    end_location_name: query.end_name.clone(),
                    commute_method: method,
                    distance_km,
                    duration_secs,
                    weather,
                    traffic,
                    co2_saved_grams,
                    is_completed: false,
                    completed_at: None,
                },
            )
            .collect()
    }
}

impl Default for StaticRouteProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProvider for StaticRouteProvider {
    fn fetch_routes<'a>(
        &'a self,
        query: &'a RouteQuery,
        _preferred_method: CommuteMethod,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Route>>> + Send + 'a>> {
        Box::pin(async move {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            Ok(self.build_batch(query))
        })
    }
}
