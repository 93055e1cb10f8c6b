//! SeaORM entities for the portal database.

pub mod prelude;

pub mod document;
pub mod event;
pub mod event_participant;
pub mod news;
pub mod profile;
pub mod support_request;
