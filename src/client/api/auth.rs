use portal::model::{api::ApiError, profile::ProfileDto};

use super::get_optional;

/// Profile of the signed-in viewer, `None` when the session is anonymous.
pub async fn get_session() -> Result<Option<ProfileDto>, ApiError> {
    get_optional("/api/auth/session").await
}
