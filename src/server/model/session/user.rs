use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_USER_ID_KEY: &str = "portal:user:id";

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionUserId(pub String);

impl SessionUserId {
    /// Insert profile ID into session
    pub async fn insert(session: &Session, profile_id: i32) -> Result<(), Error> {
        session
            .insert(SESSION_USER_ID_KEY, SessionUserId(profile_id.to_string()))
            .await?;

        Ok(())
    }

    /// Get profile ID from session
    pub async fn get(session: &Session) -> Result<Option<i32>, Error> {
        session
            .get::<SessionUserId>(SESSION_USER_ID_KEY)
            .await?
            .map(|SessionUserId(id_str)| {
                id_str.parse::<i32>().map_err(|e| {
                    Error::ParseError(format!("Failed to parse session profile id: {}", e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use portal_test_utils::prelude::*;

    use crate::server::model::session::user::{SessionUserId, SESSION_USER_ID_KEY};

    /// Expect Some when profile ID is present in session
    #[tokio::test]
    async fn returns_inserted_profile_id() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        SessionUserId::insert(&test.session, 7).await.unwrap();

        let result = SessionUserId::get(&test.session).await;

        assert!(matches!(result, Ok(Some(7))));

        Ok(())
    }

    /// Expect None when no profile ID is present in session
    #[tokio::test]
    async fn returns_none_for_empty_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let result = SessionUserId::get(&test.session).await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }

    /// Expect parse error when the stored ID is not an i32
    #[tokio::test]
    async fn fails_for_unparseable_id() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;
        test.session
            .insert(SESSION_USER_ID_KEY, SessionUserId("invalid_id".to_string()))
            .await?;

        let result = SessionUserId::get(&test.session).await;

        assert!(result.is_err());

        Ok(())
    }
}
