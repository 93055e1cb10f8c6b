use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::event::{
        CreateEventDto, EventArticleDto, EventDto, EventParticipantDto, ParticipantProfileDto,
    },
    server::{
        data::{event::EventRepository, event_participant::EventParticipantRepository},
        error::{content::ContentError, event::EventError, Error},
    },
};

/// Service for events and participant registration.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All events ordered by date.
    pub async fn get_all(&self) -> Result<Vec<EventDto>, Error> {
        let events = EventRepository::new(self.db).get_all().await?;

        Ok(events.into_iter().map(EventDto::from).collect())
    }

    /// Event with its participant list, `None` if the event does not exist.
    pub async fn get_article(&self, event_id: i32) -> Result<Option<EventArticleDto>, Error> {
        let Some(event) = EventRepository::new(self.db).get(event_id).await? else {
            return Ok(None);
        };

        let participants = EventParticipantRepository::new(self.db)
            .get_by_event_id(event_id)
            .await?;

        Ok(Some(EventArticleDto {
            event: event.into(),
            participants: participants
                .into_iter()
                .map(EventParticipantDto::from)
                .collect(),
        }))
    }

    /// Creates an event after validating its title and participants limit.
    pub async fn create(
        &self,
        mut event: CreateEventDto,
        created_by: i32,
    ) -> Result<EventDto, Error> {
        event.title = event.title.trim().to_string();
        if event.title.is_empty() {
            return Err(ContentError::InvalidInput("Укажите название мероприятия").into());
        }
        if let Some(limit) = event.participants_limit.filter(|limit| *limit <= 0) {
            return Err(EventError::InvalidParticipantsLimit(limit).into());
        }

        let event = EventRepository::new(self.db)
            .create(event, Some(created_by))
            .await?;

        tracing::info!(event_id = %event.id, created_by = %created_by, "Created event");

        Ok(event.into())
    }

    /// Registers a profile for an event.
    ///
    /// The registration row and the participant counter are written in one transaction
    /// holding a lock on the event row, so concurrent joins cannot exceed the limit.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - Event with the incremented participant counter
    /// - `Err(Error::EventError(EventError::EventNotFound))` - Event does not exist
    /// - `Err(Error::EventError(EventError::AlreadyRegistered))` - Profile already joined
    /// - `Err(Error::EventError(EventError::EventFull))` - Participants limit reached
    pub async fn join(&self, event_id: i32, user_id: i32) -> Result<EventDto, Error> {
        let txn = self.db.begin().await?;
        let event_repo = EventRepository::new(&txn);
        let participant_repo = EventParticipantRepository::new(&txn);

        let Some(event) = event_repo.get_for_update(event_id).await? else {
            return Err(EventError::EventNotFound(event_id).into());
        };

        if participant_repo.exists(event_id, user_id).await? {
            return Err(EventError::AlreadyRegistered { event_id, user_id }.into());
        }

        if event
            .participants_limit
            .is_some_and(|limit| event.current_participants >= limit)
        {
            return Err(EventError::EventFull(event_id).into());
        }

        if let Err(err) = participant_repo.create(event_id, user_id).await {
            return Err(match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    EventError::AlreadyRegistered { event_id, user_id }.into()
                }
                _ => err.into(),
            });
        }

        let current_participants = event.current_participants + 1;
        let event = event_repo
            .set_current_participants(event, current_participants)
            .await?;

        txn.commit().await?;

        tracing::info!(
            event_id = %event_id,
            user_id = %user_id,
            current_participants = %event.current_participants,
            "Profile joined event"
        );

        Ok(event.into())
    }

    /// Registered participants with their profile details.
    pub async fn get_participants(
        &self,
        event_id: i32,
    ) -> Result<Vec<ParticipantProfileDto>, Error> {
        if EventRepository::new(self.db).get(event_id).await?.is_none() {
            return Err(EventError::EventNotFound(event_id).into());
        }

        let participants = EventParticipantRepository::new(self.db)
            .get_with_profiles_by_event_id(event_id)
            .await?;

        Ok(participants
            .into_iter()
            .map(ParticipantProfileDto::from)
            .collect())
    }
}
