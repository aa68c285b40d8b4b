use thiserror::Error;

/// Errors surfaced by [`ApiClient`](crate::ApiClient) operations.
///
/// Every failure is propagated to the caller immediately. The client never
/// retries, never substitutes fallback values, and never logs at error
/// level on the caller's behalf.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The underlying HTTP client could not be constructed.
    #[error("client configuration error: {0}")]
    Configuration(String),

    /// The server answered with a non-success status.
    #[error("API request failed: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The transport could not complete the round trip (DNS failure,
    /// unreachable host, aborted connection).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response carried a success status but its body was not valid JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
