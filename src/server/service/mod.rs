//! Service layer for business logic.
//!
//! Services validate input, enforce permissions that depend on stored data and coordinate
//! repositories, opening a transaction where several writes must succeed together.

pub mod auth;
pub mod document;
pub mod event;
pub mod news;
pub mod profile;
pub mod support;
