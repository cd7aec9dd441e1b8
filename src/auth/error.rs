use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("login rejected with HTTP status {0}")]
    Status(u16),
    #[error("malformed login payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid login endpoint '{0}'")]
    InvalidEndpoint(String),
    /// Failures from transports other than the HTTP one.
    #[error("transport error: {0}")]
    Transport(String),
}
