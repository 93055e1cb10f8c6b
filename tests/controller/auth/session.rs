use axum::{extract::State, http::StatusCode};
use portal::server::{controller::auth::get_session, model::session::user::SessionUserId};

use super::*;

/// Expect 200 with the profile of the signed-in user
#[tokio::test]
async fn returns_signed_in_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(get_session(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for anonymous sessions
#[tokio::test]
async fn returns_not_found_when_anonymous() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let resp = into_response(get_session(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 404 when the session points at a deleted profile
#[tokio::test]
async fn returns_not_found_for_missing_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let resp = into_response(get_session(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
