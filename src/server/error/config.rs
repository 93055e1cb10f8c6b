use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Startup configuration failures; the server exits before serving requests.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),
    #[error("Environment variable {0} is set but empty")]
    EmptyEnvVar(&'static str),
    #[error("Environment variable {var} is not a valid identity provider URL: {reason}")]
    InvalidProviderUrl { var: &'static str, reason: String },
    #[error("Failed to build the identity provider HTTP client: {0}")]
    ProviderClient(String),
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
