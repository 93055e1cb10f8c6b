use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use entity::prelude::Profile;
use portal::server::{
    controller::auth::{callback, CallbackParams},
    model::session::{auth::SessionAuthCsrf, user::SessionUserId},
};
use sea_orm::EntityTrait;

use super::*;

async fn params_with_stored_state(test: &TestContext) -> CallbackParams {
    let params = CallbackParams {
        state: "state".to_string(),
        code: "code".to_string(),
    };

    SessionAuthCsrf::insert(&test.session, &params.state)
        .await
        .unwrap();

    params
}

/// Expect a redirect to the profile page and a new member profile on first login
#[tokio::test]
async fn creates_profile_on_first_login() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_identity_endpoints("subject-1", Some("anna@example.org"), Some("Anna"))
        .build()
        .await?;
    let params = params_with_stored_state(&test).await;

    let resp = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    test.assert_mocks();

    let profiles = Profile::find().all(&test.db).await?;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].subject, "subject-1");
    assert_eq!(profiles[0].email.as_deref(), Some("anna@example.org"));
    assert_eq!(profiles[0].role, "member");

    let session_profile_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_profile_id, Some(profiles[0].id));

    Ok(())
}

/// Expect configured employee emails to start out as employees
#[tokio::test]
async fn bootstraps_configured_employees() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_identity_endpoints("subject-1", Some("Boss@Example.org"), None)
        .build()
        .await?;
    let params = params_with_stored_state(&test).await;
    let state = test.into_app_state_with_employees(vec!["boss@example.org".to_string()]);

    let resp = into_response(callback(State(state), test.session.clone(), Query(params)).await);

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let profiles = Profile::find().all(&test.db).await?;
    assert_eq!(profiles[0].role, "employee");

    Ok(())
}

/// Expect the existing profile to be reused on later logins
#[tokio::test]
async fn reuses_existing_profile() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_profile("subject-1", "employee")
        .with_identity_endpoints("subject-1", Some("anna@example.org"), Some("Anna"))
        .build()
        .await?;
    let params = params_with_stored_state(&test).await;

    let resp = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let profiles = Profile::find().all(&test.db).await?;
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].role, "employee");

    Ok(())
}

/// Expect 400 bad request when the CSRF state does not match
#[tokio::test]
async fn rejects_mismatched_csrf_state() -> Result<(), TestError> {
    let test = TestBuilder::new().with_portal_tables().build().await?;
    let mut params = params_with_stored_state(&test).await;
    params.state = "incorrect_state".to_string();

    let resp = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 internal server error when the provider rejects the code
#[tokio::test]
async fn fails_when_code_exchange_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_portal_tables().build().await?;
    let token_endpoint = test.auth().create_failing_token_endpoint(1);
    let params = params_with_stored_state(&test).await;

    let resp = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await,
    );

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    token_endpoint.assert();

    let profiles = Profile::find().all(&test.db).await?;
    assert!(profiles.is_empty());

    Ok(())
}

/// Expect a replayed callback to be refused once the login state was consumed
#[tokio::test]
async fn refuses_replayed_callback() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_portal_tables()
        .with_identity_endpoints("subject-1", Some("anna@example.org"), Some("Anna"))
        .build()
        .await?;
    let params = params_with_stored_state(&test).await;
    let replayed = CallbackParams {
        state: params.state.clone(),
        code: params.code.clone(),
    };

    let first = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(params),
        )
        .await,
    );
    let second = into_response(
        callback(
            State(test.into_app_state()),
            test.session.clone(),
            Query(replayed),
        )
        .await,
    );

    assert_eq!(first.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
    test.assert_mocks();

    let profiles = Profile::find().all(&test.db).await?;
    assert_eq!(profiles.len(), 1);

    Ok(())
}
