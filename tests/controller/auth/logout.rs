use axum::http::StatusCode;
use portal::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

/// Expect 307 redirect and a cleared session after logout
#[tokio::test]
async fn clears_session_on_logout() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(logout(test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    let profile_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(profile_id.is_none());

    Ok(())
}

/// Expect 307 redirect even when nobody was signed in
#[tokio::test]
async fn redirects_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = into_response(logout(test.session).await);

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    Ok(())
}
