//! Domain error types
//!
//! These errors are framework-agnostic and describe why a call to one of the
//! external services failed.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request never produced a response (DNS, connect, timeout...)
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// The remote service answered with a non-success status
    #[error("Remote service returned status {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Decode(String),
    /// The remote service reported an error inside a success response
    #[error("Remote service error: {0}")]
    Remote(String),
    /// Credentials are missing or could not be used
    #[error("Credentials error: {0}")]
    Credentials(String),
    /// Local filesystem failure
    #[error("I/O error: {0}")]
    Io(String),
    /// The caller's input cannot be expressed as an outbound request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<std::io::Error> for ServiceError {
    fn from(e: std::io::Error) -> Self {
        ServiceError::Io(e.to_string())
    }
}
