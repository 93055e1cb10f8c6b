use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::profile::Role;

pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    /// Creates a new instance of [`ProfileRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a profile for an identity-provider subject
    pub async fn create(
        &self,
        subject: &str,
        email: Option<String>,
        full_name: Option<String>,
        role: Role,
    ) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let profile = entity::profile::ActiveModel {
            subject: ActiveValue::Set(subject.to_string()),
            email: ActiveValue::Set(email),
            full_name: ActiveValue::Set(full_name),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        profile.insert(self.db).await
    }

    pub async fn get(&self, profile_id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(profile_id)
            .one(self.db)
            .await
    }

    pub async fn find_by_subject(
        &self,
        subject: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Subject.eq(subject))
            .one(self.db)
            .await
    }

    /// Every profile, oldest first
    pub async fn get_all(&self) -> Result<Vec<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::CreatedAt)
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the full name, returns `None` if the profile does not exist
    pub async fn update_full_name(
        &self,
        profile_id: i32,
        full_name: Option<String>,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.get(profile_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.full_name = ActiveValue::Set(full_name);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Sets the role, returns `None` if the profile does not exist
    pub async fn update_role(
        &self,
        profile_id: i32,
        role: Role,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        let Some(profile) = self.get(profile_id).await? else {
            return Ok(None);
        };

        let mut profile_am = profile.into_active_model();
        profile_am.role = ActiveValue::Set(role.as_str().to_string());
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        Ok(Some(profile_am.update(self.db).await?))
    }

    /// Refreshes the email reported by the identity provider on login
    pub async fn update_email(
        &self,
        profile: entity::profile::Model,
        email: Option<String>,
    ) -> Result<entity::profile::Model, DbErr> {
        if profile.email == email {
            return Ok(profile);
        }

        let mut profile_am = profile.into_active_model();
        profile_am.email = ActiveValue::Set(email);
        profile_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        profile_am.update(self.db).await
    }
}
