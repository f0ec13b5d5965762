//! Key-value persistence for tracker state.
//!
//! Two independently keyed records: the serialized profile and the
//! completed-route history.

pub mod file;
pub mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use std::future::Future;
use std::pin::Pin;

use crate::models::types::Result;

/// Record key for the serialized [`UserProfile`](crate::models::UserProfile).
pub const SAVED_USER_KEY: &str = "savedUser";

/// Record key for the serialized completed-route history.
pub const COMPLETED_ROUTES_KEY: &str = "completedRoutes";

/// A local key-value store holding the persisted records.
///
/// `load` distinguishes "no record" (`Ok(None)`) from a store failure;
/// decoding is the caller's concern.
pub trait KeyValueStore: Send + Sync {
    fn load<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>>> + Send + 'a>>;

    fn save<'a>(
        &'a self,
        key: &'a str,
        data: &'a [u8],
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;
}
