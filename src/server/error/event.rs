use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event ID {0:?} not found")]
    EventNotFound(i32),
    #[error("Event ID {0:?} has reached its participants limit")]
    EventFull(i32),
    #[error("Profile ID {user_id:?} is already registered for event ID {event_id:?}")]
    AlreadyRegistered { event_id: i32, user_id: i32 },
    #[error("Invalid participants limit {0}, expected a positive number")]
    InvalidParticipantsLimit(i32),
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::EventNotFound(_) => {
                error_response(StatusCode::NOT_FOUND, "Мероприятие не найдено")
            }
            Self::EventFull(_) => {
                error_response(StatusCode::CONFLICT, "Все места на мероприятие заняты")
            }
            Self::AlreadyRegistered { .. } => error_response(
                StatusCode::CONFLICT,
                "Вы уже зарегистрированы на это мероприятие",
            ),
            Self::InvalidParticipantsLimit(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Лимит участников должен быть больше нуля",
            ),
        }
    }
}
