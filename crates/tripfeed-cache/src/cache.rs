use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;
use crate::store::Store;

type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The persisted form of a cache entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    pub data: T,
    /// Epoch milliseconds at which `data` was stored.
    pub timestamp: i64,
}

/// Best-effort, TTL-checked cache over a [`Store`].
///
/// Cloning is cheap and clones share the same store. Constructed once at
/// startup and handed to each service.
#[derive(Clone)]
pub struct ExpiringCache {
    store: Arc<Store>,
    clock: Clock,
}

impl std::fmt::Debug for ExpiringCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl ExpiringCache {
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self::with_clock(store, Utc::now)
    }

    /// Uses `clock` instead of the system time for timestamps and expiry.
    #[must_use]
    pub fn with_clock<F>(store: Store, clock: F) -> Self
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        Self {
            store: Arc::new(store),
            clock: Arc::new(clock),
        }
    }

    /// Returns the payload stored under `key` if it is younger than `ttl`.
    ///
    /// Missing, expired, unreadable and undecodable entries all come back as
    /// `None`; the latter two are logged.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, ttl: Duration) -> Option<T> {
        let raw = match self.store.read(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(key, error = %e, "cache read failed, treating as miss");
                return None;
            }
        };

        let envelope: CacheEnvelope<T> = match serde_json::from_str(&raw) {
            Ok(envelope) => envelope,
            Err(source) => {
                let e = CacheError::Json {
                    key: key.to_owned(),
                    source,
                };
                tracing::warn!(error = %e, "discarding undecodable cache entry");
                return None;
            }
        };

        let age_ms = self.now_millis().saturating_sub(envelope.timestamp);
        if age_ms >= ttl_millis(ttl) {
            tracing::debug!(key, age_ms, "cache entry expired");
            return None;
        }

        tracing::debug!(key, age_ms, "cache hit");
        Some(envelope.data)
    }

    /// Stores `payload` under `key` stamped with the current time.
    ///
    /// Overwrites unconditionally. Failures are logged, never returned.
    pub async fn set<T: Serialize>(&self, key: &str, payload: &T) {
        let envelope = CacheEnvelope {
            data: payload,
            timestamp: self.now_millis(),
        };
        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to serialize cache entry");
                return;
            }
        };
        if let Err(e) = self.store.write(key, raw).await {
            tracing::warn!(key, error = %e, "cache write failed");
        }
    }

    /// Removes every entry whose key starts with `prefix` and returns how
    /// many were removed. Failures are logged and skipped.
    pub async fn clear(&self, prefix: &str) -> usize {
        let keys = match self.store.keys().await {
            Ok(keys) => keys,
            Err(e) => {
                tracing::warn!(prefix, error = %e, "failed to list cache keys");
                return 0;
            }
        };

        let mut removed = 0;
        for key in keys.iter().filter(|k| k.starts_with(prefix)) {
            match self.store.remove(key).await {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(e) => tracing::warn!(key = %key, error = %e, "failed to remove cache entry"),
            }
        }
        tracing::debug!(prefix, removed, "cleared cache entries");
        removed
    }

    fn now_millis(&self) -> i64 {
        (self.clock)().timestamp_millis()
    }
}

fn ttl_millis(ttl: Duration) -> i64 {
    i64::try_from(ttl.as_millis()).unwrap_or(i64::MAX)
}
