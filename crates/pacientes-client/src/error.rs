//! Error types for the pacientes client.

use thiserror::Error;

/// Errors produced by [`ApiClient`](crate::ApiClient) calls.
///
/// The variants mirror the ways a call can go wrong: the server answered
/// with a non-success status, the request never got a response, or the
/// exchange was malformed on our side.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code of the response.
        status: u16,
        /// Raw response body, kept verbatim for message probing.
        body: String,
    },

    /// The request was dispatched but no response came back.
    #[error("no response from server: {0}")]
    Connect(#[source] reqwest::Error),

    /// A 2xx response arrived but its body was not the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be built or serialized.
    #[error("request failed to build: {0}")]
    Request(#[source] reqwest::Error),
}
