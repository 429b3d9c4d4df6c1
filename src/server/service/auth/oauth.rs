//! OAuth2 authorization-code flow against Google.

use oauth2::{AuthorizationCode, CsrfToken, Scope};
use url::Url;

use crate::server::{
    error::{auth::AuthError, AppError},
    state::OAuth2Client,
};

pub struct GoogleOAuthService<'a> {
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> GoogleOAuthService<'a> {
    pub fn new(http_client: &'a reqwest::Client, oauth_client: &'a OAuth2Client) -> Self {
        Self {
            http_client,
            oauth_client,
        }
    }

    /// Generates the Google consent screen URL with a fresh CSRF token.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state token to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }

    /// Exchanges an authorization code for the ID token Google issues alongside it.
    ///
    /// # Returns
    /// - `Ok(String)` - Raw ID token, still to be verified
    /// - `Err(AuthError::TokenExchange)` - Exchange failed or no ID token was returned
    pub async fn exchange_code(&self, code: String) -> Result<String, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        token
            .extra_fields()
            .id_token
            .clone()
            .ok_or_else(|| AuthError::TokenExchange("response carried no id_token".to_string()).into())
    }
}
