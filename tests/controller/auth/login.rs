use axum::{extract::State, http::StatusCode};
use portal::server::{controller::auth::login, model::session::auth::SessionAuthCsrf};

use super::*;

/// Expect 307 redirect to the provider with the CSRF state stored in session
#[tokio::test]
async fn redirects_to_provider_and_stores_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = into_response(login(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(location.starts_with(&test.server_url(TEST_AUTH_PATH)));

    let stored_state = SessionAuthCsrf::remove(&test.session).await.unwrap();
    assert!(location.contains(&format!("state={}", stored_state)));

    Ok(())
}
