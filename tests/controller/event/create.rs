use axum::{extract::State, http::StatusCode, Json};
use chrono::{Duration, Utc};
use entity::prelude::Event;
use portal::{
    model::event::CreateEventDto,
    server::{controller::event::create_event, model::session::user::SessionUserId},
};
use sea_orm::EntityTrait;

use super::*;

fn new_event(title: &str, participants_limit: Option<i32>) -> CreateEventDto {
    CreateEventDto {
        title: title.to_string(),
        description: "Evening meetup".to_string(),
        date: Utc::now().naive_utc() + Duration::days(3),
        image_url: None,
        participants_limit,
    }
}

/// Expect 201 and a stored event with no participants for employees
#[tokio::test]
async fn employees_create_events() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_event(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_event("Meetup", Some(20))),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);

    let events = Event::find().all(&test.db).await?;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].current_participants, 0);
    assert_eq!(events[0].created_by, Some(1));

    Ok(())
}

/// Expect 400 bad request for a non-positive participants limit
#[tokio::test]
async fn rejects_non_positive_limit() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_event(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_event("Meetup", Some(0))),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(Event::find().all(&test.db).await?.is_empty());

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
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_event(
            State(test.into_app_state()),
            test.session.clone(),
            Json(new_event("Meetup", None)),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
