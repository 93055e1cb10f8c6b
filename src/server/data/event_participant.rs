use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct EventParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventParticipantRepository<'a, C> {
    /// Creates a new instance of [`EventParticipantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a profile for an event
    ///
    /// Fails with a unique constraint violation if the pair already exists.
    pub async fn create(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_participant::Model, DbErr> {
        let participant = entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            user_id: ActiveValue::Set(user_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        participant.insert(self.db).await
    }

    pub async fn exists(&self, event_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .filter(entity::event_participant::Column::UserId.eq(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Participants of an event in registration order
    pub async fn get_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<Vec<entity::event_participant::Model>, DbErr> {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .order_by_asc(entity::event_participant::Column::CreatedAt)
            .order_by_asc(entity::event_participant::Column::UserId)
            .all(self.db)
            .await
    }

    /// Participants of an event joined with their profiles, in registration order
    pub async fn get_with_profiles_by_event_id(
        &self,
        event_id: i32,
    ) -> Result<
        Vec<(
            entity::event_participant::Model,
            Option<entity::profile::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.eq(event_id))
            .find_also_related(entity::profile::Entity)
            .order_by_asc(entity::event_participant::Column::CreatedAt)
            .order_by_asc(entity::event_participant::Column::UserId)
            .all(self.db)
            .await
    }
}
