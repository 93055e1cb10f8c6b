//! Database model type aliases.
//!
//! Short names for the `entity` crate models used across repositories and services.

/// Portal profile, one per identity-provider subject.
///
/// `role` is stored as text and parsed into [`crate::model::profile::Role`].
pub type ProfileModel = entity::profile::Model;

pub type EventModel = entity::event::Model;

/// Registration of a profile for an event, keyed by `(event_id, user_id)`.
pub type EventParticipantModel = entity::event_participant::Model;

pub type NewsModel = entity::news::Model;

pub type DocumentModel = entity::document::Model;

pub type SupportRequestModel = entity::support_request::Model;
