//! Data transfer objects and view logic shared by the client and the server.

pub mod action;
pub mod api;
pub mod document;
pub mod event;
pub mod news;
pub mod notification;
pub mod profile;
pub mod session;
pub mod support;
