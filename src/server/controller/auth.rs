use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, profile::ProfileDto},
    server::{
        controller::util::{csrf::consume_login_state, get_profile::find_profile_from_session},
        error::{error_response, Error},
        model::{
            app::AppState,
            session::{auth::SessionAuthCsrf, user::SessionUserId},
        },
        service::auth::{callback::CallbackService, login::login_service},
    },
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Login route to initiate login with the identity provider
///
/// Stores a CSRF state in the session and redirects the user to the provider's
/// authorization page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the identity provider's login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let login = login_service(&state.identity);

    SessionAuthCsrf::insert(&session, &login.state).await?;

    Ok(Redirect::temporary(&login.login_url))
}

/// Callback route the identity provider redirects to after a successful login
///
/// Validates the CSRF state, exchanges the code for the user's claims, creates the profile on
/// first login and stores its ID in the session.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued by the login route"),
        ("code" = String, Query, description = "Authorization code"),
    ),
    responses(
        (status = 307, description = "Successful login, redirect to the profile page"),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, Error> {
    consume_login_state(&session, &params.0.state).await?;

    let profile = CallbackService::new(&state.db, &state.identity)
        .handle_callback(&params.0.code)
        .await?;

    SessionUserId::insert(&session, profile.id).await?;

    Ok(Redirect::temporary("/profile"))
}

/// Logs the user out by clearing their session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the login page"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_profile_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored errors, so only clear signed-in sessions
    if maybe_profile_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/login"))
}

/// Profile of the signed-in user
///
/// Used by the client at start-up to resolve its session.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in profile", body = ProfileDto),
        (status = 404, description = "No signed-in profile", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    match find_profile_from_session(&state, &session).await? {
        Some(profile) => Ok((StatusCode::OK, Json(profile)).into_response()),
        None => Ok(error_response(StatusCode::NOT_FOUND, "Profile not found")),
    }
}
