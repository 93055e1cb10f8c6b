use portal::{
    model::{
        api::ApiError,
        profile::{ProfileDto, Role, RoleDto, UpdateProfileDto, UpdateRoleDto},
    },
    query::{Collection, QueryClient, QueryKey},
};

use super::{get, put};

/// Role of a profile, `None` when no profile row exists.
pub async fn role(queries: &QueryClient, profile_id: i32) -> Result<Option<Role>, ApiError> {
    queries
        .fetch(
            QueryKey::resource(Collection::Roles, profile_id),
            move || async move {
                let dto: RoleDto = get(&format!("/api/profiles/{}/role", profile_id)).await?;
                Ok(dto.role)
            },
        )
        .await
}

/// Profile of the signed-in viewer.
pub async fn own(queries: &QueryClient, viewer_id: i32) -> Result<ProfileDto, ApiError> {
    queries
        .fetch(
            QueryKey::resource(Collection::Profiles, viewer_id),
            || get("/api/profile"),
        )
        .await
}

pub async fn update_own(
    queries: &QueryClient,
    update: &UpdateProfileDto,
) -> Result<ProfileDto, ApiError> {
    let profile: ProfileDto = put("/api/profile", update).await?;

    queries.invalidate_collection(Collection::Profiles);

    Ok(profile)
}

/// All profiles, employees only.
pub async fn list(queries: &QueryClient, viewer_id: i32) -> Result<Vec<ProfileDto>, ApiError> {
    queries
        .fetch(
            QueryKey::list(Collection::Profiles).for_viewer(Some(viewer_id)),
            || get("/api/profiles"),
        )
        .await
}

pub async fn set_role(
    queries: &QueryClient,
    profile_id: i32,
    role: Role,
) -> Result<ProfileDto, ApiError> {
    let profile: ProfileDto = put(
        &format!("/api/profiles/{}/role", profile_id),
        &UpdateRoleDto { role },
    )
    .await?;

    queries.invalidate_collection(Collection::Profiles);
    queries.invalidate_collection(Collection::Roles);

    Ok(profile)
}
