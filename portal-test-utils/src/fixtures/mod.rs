//! Fixtures for database rows and mock HTTP endpoints.
//!
//! - `auth` - identity-provider token and userinfo endpoints
//! - `content` - news, documents and support requests
//! - `event` - events and participant registrations
//! - `profile` - portal profiles

pub mod auth;
pub mod content;
pub mod event;
pub mod profile;
