//! Session data models.
//!
//! Typed wrappers for the values the server keeps in the Redis-backed session: the CSRF
//! state of a pending login and the ID of the signed-in profile.

pub mod auth;
pub mod user;
