//! HTTP controller endpoints for the portal API.
//!
//! Axum handlers read the session, call services and turn their results into JSON
//! responses. Every handler carries a utoipa path annotation collected by the router into
//! the OpenAPI document.

pub mod auth;
pub mod document;
pub mod event;
pub mod news;
pub mod profile;
pub mod support;
pub mod util;
