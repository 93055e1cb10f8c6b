use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::auth::SessionAuthCsrf,
};

/// Takes the login state out of the session and checks it against the state returned by
/// the identity provider.
///
/// The stored state is consumed whether or not it matches, a login attempt gets one try.
pub async fn consume_login_state(session: &Session, returned_state: &str) -> Result<(), Error> {
    let issued_state = SessionAuthCsrf::remove(session).await?;

    if returned_state.is_empty() || issued_state != returned_state {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use portal_test_utils::prelude::*;

    use crate::server::{
        controller::util::csrf::consume_login_state,
        error::{auth::AuthError, Error},
        model::session::auth::SessionAuthCsrf,
    };

    /// Expect the issued state to be accepted once
    #[tokio::test]
    async fn accepts_issued_state_once() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "login-state").await.unwrap();

        let first = consume_login_state(&test.session, "login-state").await;
        let replayed = consume_login_state(&test.session, "login-state").await;

        assert!(first.is_ok());
        assert!(matches!(
            replayed,
            Err(Error::AuthError(AuthError::CsrfMissingValue))
        ));

        Ok(())
    }

    /// Expect 400 for a foreign state, and the issued state to be gone afterwards
    #[tokio::test]
    async fn mismatch_consumes_issued_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "login-state").await.unwrap();

        let forged = consume_login_state(&test.session, "forged-state").await;
        let retry = consume_login_state(&test.session, "login-state").await;

        let Err(error) = forged else {
            panic!("forged state must be rejected");
        };
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
        assert!(retry.is_err());

        Ok(())
    }

    /// Expect an empty returned state to be rejected
    #[tokio::test]
    async fn rejects_empty_returned_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionAuthCsrf::insert(&test.session, "login-state").await.unwrap();

        let result = consume_login_state(&test.session, "").await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::CsrfValidationFailed))
        ));

        Ok(())
    }

    /// Expect 500 when a callback arrives without a login having started
    #[tokio::test]
    async fn fails_without_issued_state() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = consume_login_state(&test.session, "login-state").await;

        let Err(error) = result else {
            panic!("callback without login must fail");
        };
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        Ok(())
    }
}
