//! OAuth2 identity provider client.

use oauth2::{
    basic::BasicClient, AuthUrl, ClientId, ClientSecret, EndpointNotSet, EndpointSet,
    RedirectUrl, TokenUrl,
};
use serde::Deserialize;

use crate::server::{config::Config, error::config::ConfigError};

/// OAuth2 client with the authorization and token endpoints configured.
pub type OAuthClient =
    BasicClient<EndpointSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Scopes requested from the identity provider.
pub const OAUTH_SCOPES: [&str; 3] = ["openid", "email", "profile"];

/// Everything needed to authenticate users against the identity provider.
#[derive(Clone)]
pub struct IdentityProvider {
    pub oauth: OAuthClient,
    pub http: reqwest::Client,
    pub userinfo_url: String,
    /// Lowercased emails granted the employee role when their profile is created.
    pub employee_emails: Vec<String>,
}

/// Claims returned by the identity provider's userinfo endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

impl IdentityProvider {
    /// Builds the provider client from explicit endpoint URLs.
    pub fn new(
        client_id: &str,
        client_secret: &str,
        auth_url: &str,
        token_url: &str,
        callback_url: &str,
        userinfo_url: &str,
        employee_emails: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let oauth = BasicClient::new(ClientId::new(client_id.to_string()))
            .set_client_secret(ClientSecret::new(client_secret.to_string()))
            .set_auth_uri(
                AuthUrl::new(auth_url.to_string()).map_err(|e| invalid("OAUTH_AUTH_URL", e))?,
            )
            .set_token_uri(
                TokenUrl::new(token_url.to_string()).map_err(|e| invalid("OAUTH_TOKEN_URL", e))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(callback_url.to_string())
                    .map_err(|e| invalid("OAUTH_CALLBACK_URL", e))?,
            );

        // The token endpoint must not be followed through redirects
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ConfigError::ProviderClient(e.to_string()))?;

        Ok(Self {
            oauth,
            http,
            userinfo_url: userinfo_url.to_string(),
            employee_emails,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(
            &config.oauth_client_id,
            &config.oauth_client_secret,
            &config.oauth_auth_url,
            &config.oauth_token_url,
            &config.oauth_callback_url,
            &config.oauth_userinfo_url,
            config.employee_emails.clone(),
        )
    }

    /// Whether a newly created profile with this email starts out as an employee.
    pub fn is_bootstrap_employee(&self, email: Option<&str>) -> bool {
        email.is_some_and(|email| {
            let email = email.trim().to_lowercase();
            self.employee_emails.iter().any(|employee| *employee == email)
        })
    }
}

fn invalid(var: &'static str, error: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidProviderUrl {
        var,
        reason: error.to_string(),
    }
}
