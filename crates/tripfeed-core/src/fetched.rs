//! Provenance envelope returned by every service fetch.
//!
//! Fetches never fail from the caller's point of view. Instead they report
//! where the data came from so callers can tell fresh, cached and degraded
//! data apart.

use serde::{Deserialize, Serialize};

/// Why a fetch served static fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No search API key configured.
    MissingCredential,
    /// The provider answered with an `error` field.
    ProviderError,
    /// Network failure, non-2xx status, or an unparseable body.
    TransportError,
    /// The provider answered but nothing survived normalization.
    EmptyResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "reason")]
pub enum Source {
    Cache,
    Network,
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fetched<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    #[must_use]
    pub fn cached(data: T) -> Self {
        Self {
            data,
            source: Source::Cache,
        }
    }

    #[must_use]
    pub fn network(data: T) -> Self {
        Self {
            data,
            source: Source::Network,
        }
    }

    #[must_use]
    pub fn fallback(data: T, reason: FallbackReason) -> Self {
        Self {
            data,
            source: Source::Fallback(reason),
        }
    }

    /// `true` when the data is synthetic fallback rather than provider data.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self.source, Source::Fallback(_))
    }

    pub fn into_data(self) -> T {
        self.data
    }
}
