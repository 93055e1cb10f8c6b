use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventArticleDto, EventDto, ParticipantProfileDto},
    },
    server::{
        controller::util::get_profile::{get_employee_from_session, get_profile_from_session},
        error::{event::EventError, Error},
        model::app::AppState,
        service::event::EventService,
    },
};

pub static EVENT_TAG: &str = "event";

/// All events ordered by date
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "Events ordered by date", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let events = EventService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(events)))
}

/// Create an event, employees only
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Created event", body = EventDto),
        (status = 400, description = "Invalid title or participants limit", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(event): Json<CreateEventDto>,
) -> Result<impl IntoResponse, Error> {
    let employee = get_employee_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .create(event, employee.id)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// Event with its participant list
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Event with participants", body = EventArticleDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(article) = EventService::new(&state.db).get_article(event_id).await? else {
        return Err(EventError::EventNotFound(event_id).into());
    };

    Ok((StatusCode::OK, Json(article)))
}

/// Participants of an event with their profiles, employees only
#[utoipa::path(
    get,
    path = "/api/events/{id}/participants",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "Registered participants", body = Vec<ParticipantProfileDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event_participants(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_employee_from_session(&state, &session).await?;

    let participants = EventService::new(&state.db)
        .get_participants(event_id)
        .await?;

    Ok((StatusCode::OK, Json(participants)))
}

/// Join an event as the signed-in profile
///
/// Registration and the participant counter are updated atomically.
#[utoipa::path(
    post,
    path = "/api/events/{id}/participants",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 201, description = "Joined, returns the updated event", body = EventDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Already registered or event is full", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_event(
    State(state): State<AppState>,
    session: Session,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let event = EventService::new(&state.db)
        .join(event_id, profile.id)
        .await?;

    Ok((StatusCode::CREATED, Json(event)))
}
