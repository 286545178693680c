use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while fetching users from the remote API.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The reqwest client could not be constructed.
    #[error("Failed to build the HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS, connect, timeout or body-read failure.
    #[error("Request to the users API failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Users API answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body is not a JSON array of objects.
    #[error("Users API returned an unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),
}
