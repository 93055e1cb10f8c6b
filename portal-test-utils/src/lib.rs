//! Test utilities for the portal crate.
//!
//! Tests are set up in two phases: a declarative [`TestBuilder`] creates tables, fixtures
//! and mock identity-provider endpoints, and the resulting [`TestContext`] exposes the
//! in-memory database, an in-memory session and fixture helpers for the test body.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::*, TestBuilder, TestContext, TestError};
}
