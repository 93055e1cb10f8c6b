use oauth2::{CsrfToken, Scope};

use crate::server::model::auth::{IdentityProvider, OAUTH_SCOPES};

/// Login URL and the CSRF state that must come back with the callback.
pub struct LoginRedirect {
    pub login_url: String,
    pub state: String,
}

pub fn login_service(identity: &IdentityProvider) -> LoginRedirect {
    let (login_url, csrf_token) = identity
        .oauth
        .authorize_url(CsrfToken::new_random)
        .add_scopes(
            OAUTH_SCOPES
                .iter()
                .map(|scope| Scope::new(scope.to_string())),
        )
        .url();

    LoginRedirect {
        login_url: login_url.to_string(),
        state: csrf_token.secret().to_string(),
    }
}
