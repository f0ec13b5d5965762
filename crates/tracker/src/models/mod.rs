//! Data model: profiles, routes, windows, and shared enums.

pub mod profile;
pub mod route;
pub mod types;
pub mod window;

pub use profile::UserProfile;
pub use route::{Route, RouteQuery};
pub use types::{
    CommuteMethod, EcoPreference, Result, TrackerError, TrafficCondition, WeatherCondition,
};
pub use window::{CommuteWindow, TimeOfDay};
