//! Expiring key-value cache shared by the search and weather services.
//!
//! Entries are stored as `{"data": ..., "timestamp": <epoch millis>}`
//! envelopes. Reads past the caller's TTL behave as misses, and every I/O
//! failure is logged and swallowed so a broken cache never breaks a fetch.

pub mod cache;
pub mod error;
pub mod store;

pub use cache::{CacheEnvelope, ExpiringCache};
pub use error::CacheError;
pub use store::Store;

/// Builds a cache key from a fixed prefix and a free-text place name, with
/// each run of whitespace in the place replaced by `_`:
/// `("weather_cache", "North  Goa")` → `"weather_cache_North_Goa"`.
///
/// The mapping is not injective: `"North Goa"` and `"North_Goa"` share a key,
/// so callers must not rely on distinct places getting distinct entries.
#[must_use]
pub fn place_key(prefix: &str, place: &str) -> String {
    let segment: Vec<&str> = place.split_whitespace().collect();
    format!("{prefix}_{}", segment.join("_"))
}
