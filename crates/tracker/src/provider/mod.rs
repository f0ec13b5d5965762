//! Route suggestion providers.
//!
//! External crates implement [`RouteProvider`] to plug in real routing,
//! weather, and traffic sources.

pub mod static_provider;

pub use static_provider::StaticRouteProvider;

use std::future::Future;
use std::pin::Pin;

use crate::models::route::{Route, RouteQuery};
use crate::models::types::{CommuteMethod, Result};

/// Fetch route suggestions for a search request.
///
/// An empty result is a successful fetch with no routes, not an error. A
/// networked implementation should abandon an in-flight request when a newer
/// one supersedes it; the tracker only ever commits the batch it awaited.
pub trait RouteProvider: Send + Sync {
    fn fetch_routes<'a>(
        &'a self,
        query: &'a RouteQuery,
        preferred_method: CommuteMethod,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<Route>>> + Send + 'a>>;
}
