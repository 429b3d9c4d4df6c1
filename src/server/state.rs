//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for external API requests
//! - OAuth2 client for Google sign-in
//! - Google ID-token verifier
//! - The runtime maintenance flag

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EndpointNotSet, EndpointSet, ExtraTokenFields, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use super::service::auth::GoogleTokenVerifier;

/// Extra fields of Google's token response. OpenID Connect adds the ID token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for GoogleTokenFields {}

/// Type alias for the OAuth2 client configured for Google authentication.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<GoogleTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<GoogleTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `OAuth2Client` is designed to be cloned
/// - `GoogleTokenVerifier` wraps a `reqwest::Client`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured without redirects. Used for the OAuth2 code exchange.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the Google authorization-code flow.
    pub oauth_client: OAuth2Client,

    /// Verifies Google ID tokens for both sign-in flows.
    pub verifier: GoogleTokenVerifier,

    /// Value served by the maintenance status endpoint.
    pub maintenance_mode: bool,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `oauth_client` - OAuth2 client for Google authentication
    /// - `verifier` - Google ID-token verifier
    /// - `maintenance_mode` - Runtime maintenance flag
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        verifier: GoogleTokenVerifier,
        maintenance_mode: bool,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            verifier,
            maintenance_mode,
        }
    }
}
