use thiserror::Error;
use tripfeed_core::FallbackReason;

/// Errors returned by the search provider client.
#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key is configured, so no request was attempted.
    #[error("search API key is not configured")]
    MissingCredential,

    /// Network or TLS failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from search provider")]
    UnexpectedStatus { status: u16 },

    /// The provider answered with an `"error"` field in its JSON body.
    #[error("search provider error: {0}")]
    Provider(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl SearchError {
    /// How the service reports this error once it has degraded to fallback data.
    #[must_use]
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::MissingCredential => FallbackReason::MissingCredential,
            Self::Provider(_) => FallbackReason::ProviderError,
            Self::Http(_)
            | Self::UnexpectedStatus { .. }
            | Self::Deserialize { .. }
            | Self::InvalidBaseUrl { .. } => FallbackReason::TransportError,
        }
    }
}
