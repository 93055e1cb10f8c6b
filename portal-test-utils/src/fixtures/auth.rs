//! Mock identity-provider endpoints.

use mockito::Mock;
use serde_json::json;

use crate::{
    constant::{TEST_ACCESS_TOKEN, TEST_TOKEN_PATH, TEST_USERINFO_PATH},
    TestContext,
};

impl TestContext {
    pub fn auth(&mut self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> AuthFixtures<'a> {
    /// Token endpoint answering every code exchange with [`TEST_ACCESS_TOKEN`].
    pub fn create_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({
            "access_token": TEST_ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600
        });

        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Userinfo endpoint returning the given claims for [`TEST_ACCESS_TOKEN`].
    pub fn create_userinfo_endpoint(
        &mut self,
        sub: &str,
        email: Option<&str>,
        name: Option<&str>,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "sub": sub,
            "email": email,
            "name": name
        });

        self.setup
            .server
            .mock("GET", TEST_USERINFO_PATH)
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_ACCESS_TOKEN).as_str(),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Token endpoint rejecting the code exchange.
    pub fn create_failing_token_endpoint(&mut self, expected_requests: usize) -> Mock {
        let body = json!({ "error": "invalid_grant" });

        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}
