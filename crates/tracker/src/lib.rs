//! # green-commute-tracker
//!
//! Commute and sustainability tracking with pluggable collaborators.
//!
//! ## Features
//!
//! - **Profile tracking**: one commuter profile with derived CO2 metrics
//! - **Route lifecycle**: suggested batches, completion, append-only history
//! - **Local-first**: state persists to any key-value store
//! - **Pluggable providers**: implement your own route/weather/traffic source
//! - **Observable**: one broadcast event per committed mutation
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use green_commute_tracker::prelude::*;
//!
//! let runtime = tokio::runtime::Runtime::new().unwrap();
//! runtime.block_on(async {
//!     let tracker = CommuteTracker::new(
//!         Arc::new(MemoryStore::new()),
//!         Arc::new(StaticRouteProvider::immediate()),
//!         Arc::new(NullScheduler),
//!     );
//!     tracker.load().await;
//!
//!     let profile = tracker
//!         .create_profile("Alex", CommuteMethod::Cycling, Vec::new())
//!         .await
//!         .unwrap();
//!     assert_eq!(profile.total_green_kilometers, 0.0);
//!
//!     let query = RouteQuery::new(
//!         geo::Point::new(-122.4194, 37.7749),
//!         geo::Point::new(-122.4167, 37.7833),
//!         "Current Location",
//!         "Destination",
//!     );
//!     let routes = tracker.request_route_suggestions(query).await.unwrap();
//!     assert_eq!(routes.len(), 4);
//!
//!     tracker.complete_route(routes[0].id).await.unwrap();
//!     assert_eq!(tracker.completed_routes().await.len(), 1);
//! });
//! ```

pub mod alerts;
pub mod emissions;
pub mod events;
pub mod identifiers;
pub mod models;
pub mod notify;
pub mod provider;
pub mod storage;
pub mod tracker;

// Re-exports for convenience
pub mod prelude {
    pub use crate::alerts::{alerts_for, CommuteAlert};
    pub use crate::events::TrackerEvent;
    pub use crate::identifiers::{ProfileIdentifier, RouteIdentifier};
    pub use crate::models::{
        CommuteMethod, CommuteWindow, EcoPreference, Result, Route, RouteQuery, TimeOfDay,
        TrackerError, TrafficCondition, UserProfile, WeatherCondition,
    };
    pub use crate::notify::{NullScheduler, ReminderMessage, ReminderScheduler};
    pub use crate::provider::{RouteProvider, StaticRouteProvider};
    pub use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
    pub use crate::tracker::CommuteTracker;
}

pub use prelude::*;
