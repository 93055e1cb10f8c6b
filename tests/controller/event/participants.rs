use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use portal::server::{
    controller::event::get_event_participants, model::session::user::SessionUserId,
};

use super::*;

/// Expect 200 for employees
#[tokio::test]
async fn returns_participants_to_employees() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .with_profile("member", "member")
        .build()
        .await?;
    let event = test.event().insert_event("Meetup", Some(10), 1).await?;
    test.event().insert_participant(event.id, 2).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        get_event_participants(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 forbidden for members
#[tokio::test]
async fn forbids_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    let event = test.event().insert_event("Meetup", Some(10), 0).await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        get_event_participants(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 401 unauthorized for anonymous sessions
#[tokio::test]
async fn rejects_anonymous_viewers() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let event = test.event().insert_event("Meetup", Some(10), 0).await?;

    let resp = into_response(
        get_event_participants(
            State(test.into_app_state()),
            test.session.clone(),
            Path(event.id),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 404 not found for a missing event even for employees
#[tokio::test]
async fn returns_not_found_for_missing_event() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        get_event_participants(State(test.into_app_state()), test.session.clone(), Path(7))
            .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
