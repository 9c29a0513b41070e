// crates/streetfind-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by a street search invocation.
///
/// The three variants are mutually exclusive outcomes of the last search.
/// Location failures are deliberately absent: they are absorbed by the
/// pipeline and never reach the caller.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The street name was empty after trimming. No request was sent.
    #[error("please enter a street name")]
    InvalidInput,

    /// The service answered but no city has a street with that exact name.
    #[error("no city found with a street named \"{street}\"")]
    NoMatch { street: String },

    /// Transport or decoding failure. The message stays generic; the
    /// underlying cause is only reachable through `source()`.
    #[error("search failed, please try again")]
    SearchFailed(#[source] GeocodeError),
}

impl SearchError {
    /// Short machine-friendly tag, used in logs and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidInput => "invalid_input",
            SearchError::NoMatch { .. } => "no_match",
            SearchError::SearchFailed(_) => "search_failed",
        }
    }
}

impl From<GeocodeError> for SearchError {
    fn from(err: GeocodeError) -> Self {
        SearchError::SearchFailed(err)
    }
}

/// Failures talking to the geocoding service.
#[derive(Error, Debug)]
pub enum GeocodeError {
    /// Connection, TLS or body read failure from the HTTP client.
    #[error("underlying request failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("geocoder answered with HTTP status {0}")]
    Status(u16),

    #[error("failed to parse geocoder response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid geocoder payload: {0}")]
    InvalidPayload(String),
}

/// Failures from the device location provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
