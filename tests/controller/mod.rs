//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an in-memory database, an in-memory session and a
//! mock identity provider, asserting on status codes and on the rows they leave behind.

mod auth;
mod content;
mod event;
mod profile;
mod support;

use portal_test_utils::prelude::*;

use crate::util::{into_response, TestContextExt};
