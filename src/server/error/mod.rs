//! Error types for the portal server.
//!
//! Domain errors (authentication, configuration, events, content) each map to their own
//! HTTP responses, library errors are logged and reported as a generic 500. Every error
//! implements `IntoResponse` so controllers can return `Result<_, Error>` directly.

pub mod auth;
pub mod config;
pub mod content;
pub mod event;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, content::ContentError, event::EventError,
    },
};

/// Main error type for the portal server.
///
/// Aggregates the domain errors and external library errors so `?` converts them
/// automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or invalid environment variables.
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Session, CSRF, identity provider or permission failures.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Event lookup and registration failures.
    #[error(transparent)]
    EventError(#[from] EventError),
    /// News, documents, profiles and support requests.
    #[error(transparent)]
    ContentError(#[from] ContentError),
    /// Failed to parse a value from string or other format.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// HTTP client error while talking to the identity provider.
    #[error(transparent)]
    HttpClientError(#[from] reqwest::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::EventError(err) => err.into_response(),
            Self::ContentError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged, the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
