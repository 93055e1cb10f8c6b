//! Placeholder identity-provider settings shared by all tests.

pub static TEST_CLIENT_ID: &str = "portal_client_id";

pub static TEST_CLIENT_SECRET: &str = "portal_client_secret";

pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/api/auth/callback";

pub static TEST_AUTH_PATH: &str = "/oauth/authorize";

pub static TEST_TOKEN_PATH: &str = "/oauth/token";

pub static TEST_USERINFO_PATH: &str = "/userinfo";

pub static TEST_ACCESS_TOKEN: &str = "test_access_token";
