use thiserror::Error;

/// Errors produced by the API client.
///
/// The three variants mirror the three ways a call can go wrong: the request
/// never completed, the server answered with a non-success status, or the
/// body did not have the expected shape.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network / transport failure (DNS, connect, TLS, interrupted body).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected record.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ApiError>;
