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
        profile::{ProfileDto, RoleDto, UpdateProfileDto, UpdateRoleDto},
    },
    server::{
        controller::util::get_profile::{get_employee_from_session, get_profile_from_session},
        error::Error,
        model::app::AppState,
        service::profile::ProfileService,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Role of a profile
///
/// Returns `null` as the role when no profile exists for the ID.
#[utoipa::path(
    get,
    path = "/api/profiles/{id}/role",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    responses(
        (status = 200, description = "Role of the profile, null when it does not exist", body = RoleDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_role(
    State(state): State<AppState>,
    Path(profile_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let role = ProfileService::new(&state.db).get_role(profile_id).await?;

    Ok((StatusCode::OK, Json(RoleDto { role })))
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Signed-in profile", body = ProfileDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the signed-in user's full name
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(update): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, Error> {
    let profile = get_profile_from_session(&state, &session).await?;

    let profile = ProfileService::new(&state.db)
        .update_profile(profile.id, update)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// All profiles, employees only
#[utoipa::path(
    get,
    path = "/api/profiles",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "All profiles", body = Vec<ProfileDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_employee_from_session(&state, &session).await?;

    let profiles = ProfileService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(profiles)))
}

/// Change the role of another profile, employees only
#[utoipa::path(
    put,
    path = "/api/profiles/{id}/role",
    tag = PROFILE_TAG,
    params(("id" = i32, Path, description = "Profile ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Profile with its new role", body = ProfileDto),
        (status = 400, description = "Attempted to change own role", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an employee", body = ErrorDto),
        (status = 404, description = "Profile not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile_role(
    State(state): State<AppState>,
    session: Session,
    Path(profile_id): Path<i32>,
    Json(update): Json<UpdateRoleDto>,
) -> Result<impl IntoResponse, Error> {
    let employee = get_employee_from_session(&state, &session).await?;

    let profile = ProfileService::new(&state.db)
        .set_role(&employee, profile_id, update.role)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
