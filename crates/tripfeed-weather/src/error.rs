use thiserror::Error;
use tripfeed_core::FallbackReason;

/// Errors returned by the forecast client.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Network or TLS failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the request and said why, e.g. an out-of-range
    /// latitude or an unknown timezone.
    #[error("forecast API error: {reason}")]
    Api { reason: String },

    #[error("unexpected HTTP status {status} from forecast API")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The daily arrays disagree in length, so days cannot be lined up.
    #[error("daily forecast arrays have mismatched lengths {lengths:?}")]
    MismatchedDaily { lengths: [usize; 4] },

    /// Too few forecast days to label "Today" and "Tomorrow".
    #[error("forecast has only {days} day(s)")]
    ShortForecast { days: usize },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl WeatherError {
    #[must_use]
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Api { .. } => FallbackReason::ProviderError,
            Self::ShortForecast { .. } => FallbackReason::EmptyResult,
            Self::Http(_)
            | Self::UnexpectedStatus { .. }
            | Self::Deserialize { .. }
            | Self::MismatchedDaily { .. }
            | Self::InvalidBaseUrl { .. } => FallbackReason::TransportError,
        }
    }
}
