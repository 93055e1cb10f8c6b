use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder,
};

pub struct SupportRequestRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupportRequestRepository<'a, C> {
    /// Creates a new instance of [`SupportRequestRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        profile_id: i32,
        subject: String,
        message: String,
    ) -> Result<entity::support_request::Model, DbErr> {
        let request = entity::support_request::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            subject: ActiveValue::Set(subject),
            message: ActiveValue::Set(message),
            resolved: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            resolved_at: ActiveValue::Set(None),
            ..Default::default()
        };

        request.insert(self.db).await
    }

    /// Every request with its author, unresolved first then newest first
    pub async fn get_all_with_authors(
        &self,
    ) -> Result<
        Vec<(
            entity::support_request::Model,
            Option<entity::profile::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::SupportRequest::find()
            .find_also_related(entity::profile::Entity)
            .order_by_asc(entity::support_request::Column::Resolved)
            .order_by_desc(entity::support_request::Column::CreatedAt)
            .order_by_desc(entity::support_request::Column::Id)
            .all(self.db)
            .await
    }

    /// Marks a request resolved, returns `None` if it does not exist
    ///
    /// Resolving twice keeps the first resolution time.
    pub async fn resolve(
        &self,
        request_id: i32,
    ) -> Result<Option<entity::support_request::Model>, DbErr> {
        let Some(request) = entity::prelude::SupportRequest::find_by_id(request_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if request.resolved {
            return Ok(Some(request));
        }

        let mut request_am = request.into_active_model();
        request_am.resolved = ActiveValue::Set(true);
        request_am.resolved_at = ActiveValue::Set(Some(Utc::now().naive_utc()));

        Ok(Some(request_am.update(self.db).await?))
    }
}
