use std::future::Future;

use serde::Deserialize;

use crate::server::error::{auth::AuthError, AppError};

/// Google's token introspection endpoint for ID tokens.
pub static TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Identity claims extracted from a verified Google ID token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleIdentity {
    /// Stable Google account identifier (`sub` claim).
    pub sub: String,
    pub email: String,
    pub email_verified: bool,
    pub name: Option<String>,
}

impl GoogleIdentity {
    /// Display name, falling back to the local part of the email address.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => self
                .email
                .split('@')
                .next()
                .unwrap_or(&self.email)
                .to_string(),
        }
    }

    /// Lower-cased domain part of the email address.
    pub fn email_domain(&self) -> Option<String> {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_ascii_lowercase())
    }
}

/// Verifies Google ID tokens.
///
/// Yields `Ok(None)` when the token is not acceptable (bad signature, expired, issued for
/// another client). `Err` is reserved for failures to reach the verifier at all.
pub trait IdTokenVerifier {
    fn verify(
        &self,
        id_token: &str,
    ) -> impl Future<Output = Result<Option<GoogleIdentity>, AppError>> + Send;
}

/// Response body of the `tokeninfo` endpoint. Google encodes booleans as strings.
#[derive(Debug, Deserialize)]
pub(crate) struct TokenInfo {
    pub aud: String,
    pub sub: String,
    pub email: Option<String>,
    pub email_verified: Option<String>,
    pub name: Option<String>,
}

impl TokenInfo {
    pub(crate) fn into_identity(self, client_id: &str) -> Option<GoogleIdentity> {
        if self.aud != client_id {
            return None;
        }

        Some(GoogleIdentity {
            sub: self.sub,
            email: self.email?,
            email_verified: self.email_verified.as_deref() == Some("true"),
            name: self.name,
        })
    }
}

/// Production verifier backed by Google's `tokeninfo` endpoint.
#[derive(Clone)]
pub struct GoogleTokenVerifier {
    http_client: reqwest::Client,
    client_id: String,
}

impl GoogleTokenVerifier {
    pub fn new(http_client: reqwest::Client, client_id: String) -> Self {
        Self {
            http_client,
            client_id,
        }
    }
}

impl IdTokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, id_token: &str) -> Result<Option<GoogleIdentity>, AppError> {
        let response = self
            .http_client
            .get(TOKENINFO_URL)
            .query(&[("id_token", id_token)])
            .send()
            .await?;

        // Google answers 400 for malformed, expired or forged tokens
        if response.status() == reqwest::StatusCode::BAD_REQUEST {
            return Ok(None);
        }

        let info: TokenInfo = response.error_for_status()?.json().await?;

        Ok(info.into_identity(&self.client_id))
    }
}

/// Checks ID tokens against an `IdTokenVerifier`.
pub struct GoogleAuthService<'a, V: IdTokenVerifier> {
    verifier: &'a V,
}

impl<'a, V: IdTokenVerifier> GoogleAuthService<'a, V> {
    pub fn new(verifier: &'a V) -> Self {
        Self { verifier }
    }

    /// Verifies a Google ID token.
    ///
    /// # Arguments
    /// - `id_token` - Raw JWT issued by Google
    ///
    /// # Returns
    /// - `Ok(GoogleIdentity)` - Exactly the payload the verifier produced
    /// - `Err(AppError::AuthErr(AuthError::InvalidToken))` - The verifier rejected the token
    /// - `Err(AppError::ReqwestErr)` - The verifier could not be reached
    pub async fn verify_id_token(&self, id_token: &str) -> Result<GoogleIdentity, AppError> {
        match self.verifier.verify(id_token).await? {
            Some(identity) => Ok(identity),
            None => Err(AuthError::InvalidToken.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedVerifier(Option<GoogleIdentity>);

    impl IdTokenVerifier for FixedVerifier {
        async fn verify(&self, _id_token: &str) -> Result<Option<GoogleIdentity>, AppError> {
            Ok(self.0.clone())
        }
    }

    fn identity() -> GoogleIdentity {
        GoogleIdentity {
            sub: "1234567890".to_string(),
            email: "jane.doe@acme.io".to_string(),
            email_verified: true,
            name: Some("Jane Doe".to_string()),
        }
    }

    fn token_info(aud: &str) -> TokenInfo {
        TokenInfo {
            aud: aud.to_string(),
            sub: "1234567890".to_string(),
            email: Some("jane.doe@acme.io".to_string()),
            email_verified: Some("true".to_string()),
            name: Some("Jane Doe".to_string()),
        }
    }

    #[tokio::test]
    async fn empty_payload_is_an_invalid_token() {
        let verifier = FixedVerifier(None);

        let result = GoogleAuthService::new(&verifier).verify_id_token("token").await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    #[tokio::test]
    async fn valid_payload_is_returned_unchanged() {
        let verifier = FixedVerifier(Some(identity()));

        let result = GoogleAuthService::new(&verifier)
            .verify_id_token("token")
            .await
            .unwrap();

        assert_eq!(result, identity());
    }

    #[test]
    fn token_for_another_client_is_rejected() {
        assert!(token_info("other-client").into_identity("my-client").is_none());
        assert_eq!(
            token_info("my-client").into_identity("my-client"),
            Some(identity())
        );
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let mut identity = identity();
        identity.name = None;

        assert_eq!(identity.display_name(), "jane.doe");
        assert_eq!(identity.email_domain().as_deref(), Some("acme.io"));
    }
}
