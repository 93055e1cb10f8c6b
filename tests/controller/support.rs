//! Tests for support request endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::SupportRequest;
use portal::{
    model::support::CreateSupportRequestDto,
    server::{
        controller::support::{
            create_support_request, get_support_requests, resolve_support_request,
        },
        model::session::user::SessionUserId,
    },
};
use sea_orm::EntityTrait;

use super::*;

fn request(subject: &str, message: &str) -> CreateSupportRequestDto {
    CreateSupportRequestDto {
        subject: subject.to_string(),
        message: message.to_string(),
    }
}

/// Expect 201 and a stored request for signed-in members
#[tokio::test]
async fn members_submit_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_support_request(
            State(test.into_app_state()),
            test.session.clone(),
            Json(request("Access", "I cannot see the documents")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::CREATED);

    let requests = SupportRequest::find().all(&test.db).await?;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].profile_id, 1);
    assert!(!requests[0].resolved);

    Ok(())
}

/// Expect 400 bad request for a blank message
#[tokio::test]
async fn rejects_blank_message() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        create_support_request(
            State(test.into_app_state()),
            test.session.clone(),
            Json(request("Access", "   ")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(SupportRequest::find().all(&test.db).await?.is_empty());

    Ok(())
}

/// Expect 401 unauthorized for anonymous sessions
#[tokio::test]
async fn rejects_anonymous_requests() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let resp = into_response(
        create_support_request(
            State(test.into_app_state()),
            test.session.clone(),
            Json(request("Access", "Help")),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect 403 forbidden when members list received requests
#[tokio::test]
async fn members_cannot_list_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("member", "member")
        .build()
        .await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        get_support_requests(State(test.into_app_state()), test.session.clone()).await,
    );

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect employees to resolve requests
#[tokio::test]
async fn employees_resolve_requests() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .with_profile("member", "member")
        .build()
        .await?;
    let created = test.content().insert_support_request(2, "Access").await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();
    let state = test.into_app_state();

    let listed = into_response(get_support_requests(State(state.clone()), test.session.clone()).await);
    let resolved = into_response(
        resolve_support_request(State(state), test.session.clone(), Path(created.id)).await,
    );

    assert_eq!(listed.status(), StatusCode::OK);
    assert_eq!(resolved.status(), StatusCode::OK);

    let request = SupportRequest::find_by_id(created.id)
        .one(&test.db)
        .await?
        .unwrap();
    assert!(request.resolved);
    assert!(request.resolved_at.is_some());

    Ok(())
}
