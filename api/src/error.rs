use thiserror::Error;

/// Failure of either dashboard request.
///
/// Messages are shown to the user verbatim and deliberately do not say which
/// endpoint failed; the URL goes to the log instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to load data (HTTP {status})")]
    Status { status: reqwest::StatusCode },

    #[error("Malformed response: {0}")]
    Decode(#[source] serde_json::Error),
}
