//! Hotel and restaurant listings from a SerpApi-style search provider.
//!
//! [`SearchService`] is the entry point: it consults the shared
//! [`tripfeed_cache::ExpiringCache`], calls the provider through
//! [`SearchClient`] on a miss, normalizes the raw results, and serves static
//! fallback listings whenever live data is unavailable.

pub mod client;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod service;
pub mod types;

pub use client::{Engine, HotelQuery, LocalQuery, SearchClient};
pub use error::SearchError;
pub use normalize::{normalize_hotels, normalize_restaurants};
pub use service::{stay_window, SearchService, SEARCH_CACHE_TTL};
