//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table and are generic over [`sea_orm::ConnectionTrait`]
//! so the same code runs on a pooled connection or inside a transaction.

pub mod document;
pub mod event;
pub mod event_participant;
pub mod news;
pub mod profile;
pub mod support_request;
