//! Error type for completion requests.

use thiserror::Error;

/// What went wrong while requesting a completion.
///
/// `Transport` covers connection refusals, DNS failures, and timeouts from the HTTP
/// layer. `Status` is any non-2xx answer with whatever body the endpoint sent back.
/// `Malformed` and `MissingContent` mean the endpoint answered 2xx but the body did
/// not carry a usable reply.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed completion response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("completion response contained no reply text")]
    MissingContent,
}
