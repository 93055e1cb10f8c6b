use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use portal::server::controller::event::{get_event, get_events};

use super::*;

/// Expect 200 for an existing event with participants
#[tokio::test]
async fn returns_event_with_participants() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    let event = test.event().insert_event("Meetup", Some(10), 1).await?;
    test.event().insert_participant(event.id, 1).await?;

    let resp = into_response(get_event(State(test.into_app_state()), Path(event.id)).await);

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 not found for an event that does not exist
#[tokio::test]
async fn returns_not_found_for_missing_event() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let resp = into_response(get_event(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 for the event list, empty or not
#[tokio::test]
async fn lists_events() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    test.event().insert_event("Meetup", None, 0).await?;

    let resp = into_response(get_events(State(test.into_app_state())).await);

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
