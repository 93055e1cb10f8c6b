//! Tests for event controller endpoints.

mod create;
mod get_event;
mod join;
mod participants;

use super::*;
