use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{ProfileDto, Role, UpdateProfileDto},
    server::{
        data::profile::ProfileRepository,
        error::{auth::AuthError, content::ContentError, Error},
        model::dto::parse_role,
    },
};

/// Service for profiles and role management.
pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self, profile_id: i32) -> Result<Option<ProfileDto>, Error> {
        let profile = ProfileRepository::new(self.db).get(profile_id).await?;

        Ok(profile.map(ProfileDto::from))
    }

    /// Role of a profile, `None` when no profile row exists.
    pub async fn get_role(&self, profile_id: i32) -> Result<Option<Role>, Error> {
        let profile = ProfileRepository::new(self.db).get(profile_id).await?;

        Ok(profile.as_ref().map(parse_role))
    }

    pub async fn get_all(&self) -> Result<Vec<ProfileDto>, Error> {
        let profiles = ProfileRepository::new(self.db).get_all().await?;

        Ok(profiles.into_iter().map(ProfileDto::from).collect())
    }

    /// Updates the viewer's own full name, blank names clear it.
    pub async fn update_profile(
        &self,
        profile_id: i32,
        update: UpdateProfileDto,
    ) -> Result<ProfileDto, Error> {
        let full_name = update
            .full_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        let Some(profile) = ProfileRepository::new(self.db)
            .update_full_name(profile_id, full_name)
            .await?
        else {
            return Err(ContentError::ProfileNotFound(profile_id).into());
        };

        Ok(profile.into())
    }

    /// Changes another profile's role on behalf of an employee.
    ///
    /// # Returns
    /// - `Ok(ProfileDto)` - Profile with the new role
    /// - `Err(Error::AuthError(AuthError::EmployeeOnly))` - Actor is not an employee
    /// - `Err(Error::AuthError(AuthError::OwnRoleChange))` - Actor targeted their own profile
    /// - `Err(Error::ContentError(ContentError::ProfileNotFound))` - Target does not exist
    pub async fn set_role(
        &self,
        actor: &ProfileDto,
        profile_id: i32,
        role: Role,
    ) -> Result<ProfileDto, Error> {
        if actor.role != Role::Employee {
            return Err(AuthError::EmployeeOnly(actor.id).into());
        }
        if actor.id == profile_id {
            return Err(AuthError::OwnRoleChange(actor.id).into());
        }

        let Some(profile) = ProfileRepository::new(self.db)
            .update_role(profile_id, role)
            .await?
        else {
            return Err(ContentError::ProfileNotFound(profile_id).into());
        };

        tracing::info!(
            profile_id = %profile_id,
            changed_by = %actor.id,
            role = %role,
            "Changed profile role"
        );

        Ok(profile.into())
    }
}
