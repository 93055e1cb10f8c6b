use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn event(&self) -> EventFixtures<'_> {
        EventFixtures { setup: self }
    }
}

pub struct EventFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> EventFixtures<'a> {
    /// Inserts an event a week from now.
    ///
    /// `current_participants` is written as given, no participant rows are created.
    pub async fn insert_event(
        &self,
        title: &str,
        participants_limit: Option<i32>,
        current_participants: i32,
    ) -> Result<entity::event::Model, TestError> {
        self.insert_event_in_days(title, 7, participants_limit, current_participants)
            .await
    }

    pub async fn insert_event_in_days(
        &self,
        title: &str,
        days_from_now: i64,
        participants_limit: Option<i32>,
        current_participants: i32,
    ) -> Result<entity::event::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Event::insert(entity::event::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(format!("Description of {}", title)),
                date: ActiveValue::Set(now + Duration::days(days_from_now)),
                image_url: ActiveValue::Set(None),
                participants_limit: ActiveValue::Set(participants_limit),
                current_participants: ActiveValue::Set(current_participants),
                created_by: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Registers a profile for an event without touching the participant counter.
    pub async fn insert_participant(
        &self,
        event_id: i32,
        user_id: i32,
    ) -> Result<entity::event_participant::Model, TestError> {
        Ok(entity::prelude::EventParticipant::insert(
            entity::event_participant::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
