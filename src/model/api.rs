use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Failure of a request issued by the client against the portal API.
///
/// Cloneable so that a single failed request can be handed to every caller waiting on
/// the same query key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,
    #[error("authentication required")]
    Unauthorized,
    #[error("access denied")]
    Forbidden,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps a non-success HTTP status and the server's error message into an [`ApiError`].
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => Self::BadRequest(message),
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict(message),
            _ => Self::Server(format!("status {}: {}", status, message)),
        }
    }
}
