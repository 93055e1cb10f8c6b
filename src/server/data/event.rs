use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel,
    QueryOrder, QuerySelect,
};

use crate::model::event::CreateEventDto;

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        event: CreateEventDto,
        created_by: Option<i32>,
    ) -> Result<entity::event::Model, DbErr> {
        let event = entity::event::ActiveModel {
            title: ActiveValue::Set(event.title),
            description: ActiveValue::Set(event.description),
            date: ActiveValue::Set(event.date),
            image_url: ActiveValue::Set(event.image_url),
            participants_limit: ActiveValue::Set(event.participants_limit),
            current_participants: ActiveValue::Set(0),
            created_by: ActiveValue::Set(created_by),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        event.insert(self.db).await
    }

    pub async fn get(&self, event_id: i32) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .one(self.db)
            .await
    }

    /// Fetches the event and locks its row until the surrounding transaction ends
    ///
    /// Backends without row locks (SQLite) serialize write transactions instead.
    pub async fn get_for_update(
        &self,
        event_id: i32,
    ) -> Result<Option<entity::event::Model>, DbErr> {
        entity::prelude::Event::find_by_id(event_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Every event ordered by date, earliest first
    pub async fn get_all(&self) -> Result<Vec<entity::event::Model>, DbErr> {
        entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await
    }

    /// Sets the participant counter of an event fetched earlier in the same transaction
    pub async fn set_current_participants(
        &self,
        event: entity::event::Model,
        current_participants: i32,
    ) -> Result<entity::event::Model, DbErr> {
        let mut event_am = event.into_active_model();
        event_am.current_participants = ActiveValue::Set(current_participants);

        event_am.update(self.db).await
    }
}
