use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Profile ID is not present in session")]
    UserNotInSession,
    #[error("Profile ID {0:?} not found in database despite having an active session")]
    UserNotInDatabase(i32),
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,
    #[error("Failed to login user due to CSRF state present in session store but without a value")]
    CsrfMissingValue,
    #[error("Profile ID {0:?} attempted an employee-only action")]
    EmployeeOnly(i32),
    #[error("Profile ID {0:?} attempted to change their own role")]
    OwnRoleChange(i32),
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Необходимо авторизоваться")
            }
            Self::UserNotInDatabase(profile_id) => {
                tracing::debug!(profile_id = %profile_id, "{}", self);

                error_response(StatusCode::UNAUTHORIZED, "Необходимо авторизоваться")
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                error_response(
                    StatusCode::BAD_REQUEST,
                    "There was an issue logging you in, please try again.",
                )
            }
            Self::EmployeeOnly(profile_id) => {
                tracing::debug!(profile_id = %profile_id, "{}", self);

                error_response(StatusCode::FORBIDDEN, "Доступно только сотрудникам")
            }
            Self::OwnRoleChange(profile_id) => {
                tracing::debug!(profile_id = %profile_id, "{}", self);

                error_response(StatusCode::BAD_REQUEST, "Нельзя изменить собственную роль")
            }
            Self::CsrfMissingValue | Self::TokenExchange(_) => {
                InternalServerError(self).into_response()
            }
        }
    }
}
