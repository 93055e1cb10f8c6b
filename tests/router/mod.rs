//! Requests routed through the full API router with an in-memory session layer.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use portal::server::router::routes;
use portal_test_utils::prelude::*;
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::TestContextExt;

fn app(test: &TestContext) -> Router {
    routes()
        .with_state(test.into_app_state())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

async fn status_of(test: &TestContext, method: &str, uri: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");

    app(test)
        .oneshot(request)
        .await
        .expect("Router is infallible")
        .status()
}

/// Expect public listings to be reachable without a session
#[tokio::test]
async fn serves_public_listings() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.event().insert_event("Meetup", Some(10), 0).await?;

    assert_eq!(status_of(&test, "GET", "/api/events").await, StatusCode::OK);
    assert_eq!(status_of(&test, "GET", "/api/news").await, StatusCode::OK);
    assert_eq!(status_of(&test, "GET", "/api/documents").await, StatusCode::OK);
    assert_eq!(status_of(&test, "GET", "/api/events/1").await, StatusCode::OK);

    Ok(())
}

/// Expect anonymous sessions to be rejected by protected routes
#[tokio::test]
async fn protects_routes_needing_a_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.event().insert_event("Meetup", Some(10), 0).await?;

    assert_eq!(
        status_of(&test, "POST", "/api/events/1/participants").await,
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(status_of(&test, "GET", "/api/profile").await, StatusCode::UNAUTHORIZED);
    assert_eq!(status_of(&test, "GET", "/api/auth/session").await, StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the role lookup of an unknown profile to succeed
#[tokio::test]
async fn serves_role_lookup_for_unknown_profile() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    assert_eq!(
        status_of(&test, "GET", "/api/profiles/42/role").await,
        StatusCode::OK
    );

    Ok(())
}

/// Expect the OpenAPI document to be served
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    assert_eq!(
        status_of(&test, "GET", "/api/docs/openapi.json").await,
        StatusCode::OK
    );

    Ok(())
}
