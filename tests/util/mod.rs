//! Helpers for building application state on top of a [`TestContext`].

use axum::response::{IntoResponse, Response};
use portal::server::{error::Error, model::app::AppState, model::auth::IdentityProvider};
use portal_test_utils::prelude::*;

/// Extension trait for TestContext to create AppState pointing at the mock identity provider
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn into_app_state_with_employees(&self, employee_emails: Vec<String>) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.into_app_state_with_employees(Vec::new())
    }

    fn into_app_state_with_employees(&self, employee_emails: Vec<String>) -> AppState {
        let identity = IdentityProvider::new(
            TEST_CLIENT_ID,
            TEST_CLIENT_SECRET,
            &self.server_url(TEST_AUTH_PATH),
            &self.server_url(TEST_TOKEN_PATH),
            TEST_CALLBACK_URL,
            &self.server_url(TEST_USERINFO_PATH),
            employee_emails,
        )
        .expect("Failed to build identity provider for tests");

        AppState {
            db: self.db.clone(),
            identity,
        }
    }
}

/// Converts a controller result into the response axum would send.
pub fn into_response<T: IntoResponse>(result: Result<T, Error>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(e) => e.into_response(),
    }
}
