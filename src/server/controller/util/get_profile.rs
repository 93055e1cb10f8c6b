use dioxus_logger::tracing;
use tower_sessions::Session;

use crate::{
    model::profile::{ProfileDto, Role},
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::profile::ProfileService,
    },
};

/// Resolves the session's profile, `None` for anonymous sessions.
///
/// A session pointing at a profile that no longer exists is cleared and treated as
/// anonymous.
pub async fn find_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<Option<ProfileDto>, Error> {
    match get_profile_from_session(state, session).await {
        Ok(profile) => Ok(Some(profile)),
        Err(Error::AuthError(AuthError::UserNotInSession))
        | Err(Error::AuthError(AuthError::UserNotInDatabase(_))) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Retrieves the signed-in profile from session and then from database
///
/// # Returns
/// - `Ok(ProfileDto)` - Profile of the signed-in user
/// - `Err(Error::AuthError(AuthError::UserNotInSession))` - No profile ID in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))` - Profile ID in session but not in
///   the database (session is cleared)
/// - `Err(Error)` - Database or session failures
pub async fn get_profile_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ProfileDto, Error> {
    let Some(profile_id) = SessionUserId::get(session).await? else {
        return Err(Error::AuthError(AuthError::UserNotInSession));
    };

    let Some(profile) = ProfileService::new(&state.db).get(profile_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for profile ID {} with active session but was not found in database",
            profile_id
        );

        return Err(Error::AuthError(AuthError::UserNotInDatabase(profile_id)));
    };

    Ok(profile)
}

/// Like [`get_profile_from_session`] but additionally requires the employee role.
pub async fn get_employee_from_session(
    state: &AppState,
    session: &Session,
) -> Result<ProfileDto, Error> {
    let profile = get_profile_from_session(state, session).await?;

    if profile.role != Role::Employee {
        return Err(Error::AuthError(AuthError::EmployeeOnly(profile.id)));
    }

    Ok(profile)
}
