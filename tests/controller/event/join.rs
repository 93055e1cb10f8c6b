//! Tests for joining events.
//!
//! Registration writes a participant row and increments the event's counter in one
//! transaction, so every rejected join must leave both untouched.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use entity::prelude::{Event, EventParticipant};
use portal::server::{controller::event::join_event, model::session::user::SessionUserId};
use sea_orm::EntityTrait;

use super::*;

async fn member_test() -> Result<TestContext, TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    Ok(test)
}

/// Expect 201 with a participant row and the counter incremented exactly once
#[tokio::test]
async fn joins_event_and_increments_counter() -> Result<(), TestError> {
    let test = member_test().await?;
    let event = test.event().insert_event("Meetup", Some(10), 3).await?;

    let resp = into_response(
        join_event(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);

    let participants = EventParticipant::find().all(&test.db).await?;
    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].user_id, 1);

    let event = Event::find_by_id(event.id).one(&test.db).await?.unwrap();
    assert_eq!(event.current_participants, 4);

    Ok(())
}

/// Expect events without a limit to accept joins at any count
#[tokio::test]
async fn joins_event_without_limit() -> Result<(), TestError> {
    let test = member_test().await?;
    let event = test.event().insert_event("Open day", None, 500).await?;

    let resp = into_response(
        join_event(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 409 conflict and no row written when the event is full
#[tokio::test]
async fn rejects_full_event() -> Result<(), TestError> {
    let test = member_test().await?;
    let event = test.event().insert_event("Meetup", Some(2), 2).await?;

    let resp = into_response(
        join_event(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let participants = EventParticipant::find().all(&test.db).await?;
    assert!(participants.is_empty());

    let event = Event::find_by_id(event.id).one(&test.db).await?.unwrap();
    assert_eq!(event.current_participants, 2);

    Ok(())
}

/// Expect 409 conflict on the second join and the counter incremented only once
#[tokio::test]
async fn rejects_joining_twice() -> Result<(), TestError> {
    let test = member_test().await?;
    let event = test.event().insert_event("Meetup", Some(10), 0).await?;
    let state = test.into_app_state();

    let first = into_response(
        join_event(State(state.clone()), test.session.clone(), Path(event.id)).await,
    );
    let second =
        into_response(join_event(State(state), test.session.clone(), Path(event.id)).await);

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let participants = EventParticipant::find().all(&test.db).await?;
    assert_eq!(participants.len(), 1);

    let event = Event::find_by_id(event.id).one(&test.db).await?.unwrap();
    assert_eq!(event.current_participants, 1);

    Ok(())
}

/// Expect 404 not found for an event that does not exist
#[tokio::test]
async fn rejects_missing_event() -> Result<(), TestError> {
    let test = member_test().await?;

    let resp = into_response(
        join_event(State(test.into_app_state()), test.session.clone(), Path(99)).await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 unauthorized and no row written for anonymous sessions
#[tokio::test]
async fn rejects_anonymous_join() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let event = test.event().insert_event("Meetup", Some(10), 0).await?;

    let resp = into_response(
        join_event(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let participants = EventParticipant::find().all(&test.db).await?;
    assert!(participants.is_empty());

    Ok(())
}
