//! CO2 emission rates per commute method.
//!
//! Savings are measured against a solo car trip over the same distance. The
//! public-transport figure is the bus rate. The stub provider ships its own
//! fixed per-route savings; this table is the seam a real emissions model
//! would replace without touching the tracker's contract.

use crate::models::types::CommuteMethod;

/// Kilograms of CO2 emitted per kilometer, by method.
pub const DRIVING_KG_PER_KM: f64 = 0.404;
pub const CARPOOLING_KG_PER_KM: f64 = 0.202; // two people sharing
pub const PUBLIC_TRANSPORT_KG_PER_KM: f64 = 0.101;
pub const CYCLING_KG_PER_KM: f64 = 0.0;
pub const WALKING_KG_PER_KM: f64 = 0.0;

pub fn emission_rate_kg_per_km(method: CommuteMethod) -> f64 {
    match method {
        CommuteMethod::Walking => WALKING_KG_PER_KM,
        CommuteMethod::Cycling => CYCLING_KG_PER_KM,
        CommuteMethod::PublicTransport => PUBLIC_TRANSPORT_KG_PER_KM,
        CommuteMethod::Carpooling => CARPOOLING_KG_PER_KM,
        CommuteMethod::Driving => DRIVING_KG_PER_KM,
    }
}

/// Estimated grams of CO2 saved by taking `method` over `distance_km`
/// instead of driving. Never negative.
pub fn estimated_savings_grams(method: CommuteMethod, distance_km: f64) -> f64 {
    let saved_kg_per_km = (DRIVING_KG_PER_KM - emission_rate_kg_per_km(method)).max(0.0);
    saved_kg_per_km * distance_km * 1000.0
}
