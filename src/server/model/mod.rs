//! Server application models and type definitions.
//!
//! Application state, the identity provider client, database model aliases, their conversions into the shared DTOs and the typed
//! wrappers around session data.

pub mod app;
pub mod auth;
pub mod db;
pub mod dto;
pub mod session;
