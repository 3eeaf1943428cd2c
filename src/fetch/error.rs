use thiserror::Error;

use super::client::BoxError;

/// Why a single fetch attempt ended without a new list.
///
/// None of these are retried; the previously published list stays in place.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint is not a usable http(s) URL. No request was made.
    #[error("invalid trivia endpoint {endpoint:?}: {reason}")]
    Configuration { endpoint: String, reason: String },

    #[error("failed to fetch trivia: {0}")]
    Transport(#[source] BoxError),

    #[error("trivia response had no body")]
    EmptyResponse,

    #[error("failed to decode trivia response: {0}")]
    Decode(#[from] serde_json::Error),
}
