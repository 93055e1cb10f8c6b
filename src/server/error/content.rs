use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("News ID {0:?} not found")]
    NewsNotFound(i32),
    #[error("Profile ID {0:?} not found")]
    ProfileNotFound(i32),
    #[error("Support request ID {0:?} not found")]
    SupportRequestNotFound(i32),
    /// Request body failed validation, carries the message shown to the user.
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

impl IntoResponse for ContentError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NewsNotFound(_) => error_response(StatusCode::NOT_FOUND, "Новость не найдена"),
            Self::ProfileNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Профиль не найден")
            }
            Self::SupportRequestNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Обращение не найдено")
            }
            Self::InvalidInput(message) => error_response(StatusCode::BAD_REQUEST, message),
        }
    }
}
