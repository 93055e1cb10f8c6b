use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, TokenResponse};
use sea_orm::DatabaseConnection;

use crate::{
    model::profile::Role,
    server::{
        data::profile::ProfileRepository,
        error::{auth::AuthError, Error},
        model::{
            auth::{IdentityProvider, UserInfo},
            db::ProfileModel,
        },
    },
};

/// Completes a login after the identity provider redirected back with a code.
pub struct CallbackService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a IdentityProvider,
}

impl<'a> CallbackService<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Exchanges the code, fetches the user's claims and returns their profile.
    ///
    /// # Returns
    /// - `Ok(ProfileModel)` - Existing or newly created profile for the user
    /// - `Err(Error::AuthError(AuthError::TokenExchange))` - Provider rejected the code
    /// - `Err(Error::HttpClientError)` - Userinfo request failed
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn handle_callback(&self, code: &str) -> Result<ProfileModel, Error> {
        let user_info = self.fetch_user_info(code).await?;

        self.get_or_create_profile(user_info).await
    }

    async fn fetch_user_info(&self, code: &str) -> Result<UserInfo, Error> {
        let token = self
            .identity
            .oauth
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .request_async(&self.identity.http)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let user_info = self
            .identity
            .http
            .get(&self.identity.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(user_info)
    }

    /// Finds the profile for the claims' subject, creating it on first login.
    ///
    /// New profiles are members unless their email is listed as a bootstrap employee.
    pub async fn get_or_create_profile(&self, user_info: UserInfo) -> Result<ProfileModel, Error> {
        let profile_repo = ProfileRepository::new(self.db);

        if let Some(profile) = profile_repo.find_by_subject(&user_info.sub).await? {
            return Ok(profile_repo.update_email(profile, user_info.email).await?);
        }

        let role = if self
            .identity
            .is_bootstrap_employee(user_info.email.as_deref())
        {
            Role::Employee
        } else {
            Role::Member
        };

        let profile = profile_repo
            .create(&user_info.sub, user_info.email, user_info.name, role)
            .await?;

        tracing::info!(profile_id = %profile.id, role = %role, "Created profile on first login");

        Ok(profile)
    }
}
