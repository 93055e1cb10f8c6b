//! Tests for profile and role endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::Profile;
use portal::{
    model::profile::{Role, UpdateProfileDto, UpdateRoleDto},
    server::{
        controller::profile::{
            get_profile, get_profile_role, get_profiles, update_profile, update_profile_role,
        },
        model::session::user::SessionUserId,
    },
};
use sea_orm::EntityTrait;

use super::*;

async fn employee_and_member() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_portal_tables()
        .with_profile("employee", "employee")
        .with_profile("member", "member")
        .build()
        .await
}

/// Expect 200 for the role of an existing profile
#[tokio::test]
async fn returns_role_of_existing_profile() -> Result<(), TestError> {
    let test = employee_and_member().await?;

    let resp = into_response(get_profile_role(State(test.into_app_state()), Path(1)).await);

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 rather than 404 when no profile exists for the ID
#[tokio::test]
async fn returns_success_for_missing_profile_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let resp = into_response(get_profile_role(State(test.into_app_state()), Path(5)).await);

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 unauthorized for the own profile of an anonymous session
#[tokio::test]
async fn own_profile_requires_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;

    let resp = into_response(get_profile(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Expect the full name to be updated for the signed-in profile
#[tokio::test]
async fn updates_own_full_name() -> Result<(), TestError> {
    let test = employee_and_member().await?;
    SessionUserId::insert(&test.session, 2).await.unwrap();

    let resp = into_response(
        update_profile(
            State(test.into_app_state()),
            test.session.clone(),
            Json(UpdateProfileDto {
                full_name: Some("Anna Petrova".to_string()),
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);

    let profile = Profile::find_by_id(2).one(&test.db).await?.unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Anna Petrova"));

    Ok(())
}

/// Expect 403 forbidden when a member lists profiles
#[tokio::test]
async fn members_cannot_list_profiles() -> Result<(), TestError> {
    let test = employee_and_member().await?;
    SessionUserId::insert(&test.session, 2).await.unwrap();

    let resp = into_response(get_profiles(State(test.into_app_state()), test.session.clone()).await);

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect employees to change the role of another profile
#[tokio::test]
async fn employees_change_roles() -> Result<(), TestError> {
    let test = employee_and_member().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        update_profile_role(
            State(test.into_app_state()),
            test.session.clone(),
            Path(2),
            Json(UpdateRoleDto {
                role: Role::Employee,
            }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::OK);

    let profile = Profile::find_by_id(2).one(&test.db).await?.unwrap();
    assert_eq!(profile.role, "employee");

    Ok(())
}

/// Expect 400 bad request when employees change their own role
#[tokio::test]
async fn employees_cannot_change_own_role() -> Result<(), TestError> {
    let test = employee_and_member().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        update_profile_role(
            State(test.into_app_state()),
            test.session.clone(),
            Path(1),
            Json(UpdateRoleDto { role: Role::Member }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let profile = Profile::find_by_id(1).one(&test.db).await?.unwrap();
    assert_eq!(profile.role, "employee");

    Ok(())
}

/// Expect 404 not found when the target profile does not exist
#[tokio::test]
async fn role_change_of_missing_profile_is_not_found() -> Result<(), TestError> {
    let test = employee_and_member().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = into_response(
        update_profile_role(
            State(test.into_app_state()),
            test.session.clone(),
            Path(9),
            Json(UpdateRoleDto { role: Role::Member }),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
