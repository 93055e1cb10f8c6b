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
        support::{CreateSupportRequestDto, SupportRequestDto},
    },
    server::{
        controller::util::get_profile::{get_employee_from_session, get_profile_from_session},
        error::Error,
        model::app::AppState,
        service::support::SupportService,
    },
};

pub static SUPPORT_TAG: &str = "support";

/// Received support requests, employees only
#[utoipa::path(
    get,
    path = "/api/support/requests",
    tag = SUPPORT_TAG,
    responses(
        (status = 200, description = "Support requests, unresolved first", body = Vec<SupportRequestDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_support_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_employee_from_session(&state, &session).await?;

    let requests = SupportService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// Send a support request as the signed-in profile
#[utoipa::path(
    post,
    path = "/api/support/requests",
    tag = SUPPORT_TAG,
    request_body = CreateSupportRequestDto,
    responses(
        (status = 201, description = "Created request", body = SupportRequestDto),
        (status = 400, description = "Missing subject or message", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_support_request(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CreateSupportRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let request = SupportService::new(&state.db)
        .create(profile.id, request)
        .await?;

    Ok((StatusCode::CREATED, Json(request)))
}

/// Mark a support request resolved, employees only
#[utoipa::path(
    put,
    path = "/api/support/requests/{id}/resolve",
    tag = SUPPORT_TAG,
    params(("id" = i32, Path, description = "Support request ID")),
    responses(
        (status = 200, description = "Resolved request", body = SupportRequestDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 404, description = "Support request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_support_request(
    State(state): State<AppState>,
    session: Session,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    get_employee_from_session(&state, &session).await?;

    let request = SupportService::new(&state.db).resolve(request_id).await?;

    Ok((StatusCode::OK, Json(request)))
}
