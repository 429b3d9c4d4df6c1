//! Server initialization.
//!
//! Each function builds one piece of `AppState` or the session layer from `Config`.

use oauth2::{AuthUrl, Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{
    cookie::{Key, SameSite},
    service::SignedCookie,
    Expiry, SessionManagerLayer,
};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer on top of the application's Sqlite pool.
///
/// Sessions are stored in the same database, signed with `JWT_SECRET`, expire after a week
/// of inactivity, and use secure cookies in production.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer ready to wrap the router
/// - `Err(AppError::SqlxErr)` - Session table migration failed
/// - `Err(AppError::ConfigErr)` - Secret is not usable as a signing key
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();
    let store = SqliteStore::new(pool);
    store.migrate().await?;

    let key = Key::try_from(config.session_secret.as_slice()).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "JWT_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.production)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)))
        .with_signed(key))
}

/// Builds the HTTP client used for outbound calls.
///
/// Redirects are disabled so OAuth responses cannot bounce requests elsewhere.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?)
}

/// Builds the OAuth2 client for Google's authorization-code flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect endpoints set
/// - `Err(AppError::ConfigErr)` - One of the endpoint URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |e: url::ParseError| ConfigError::InvalidEnvVar {
            name,
            reason: e.to_string(),
        }
    };

    let client: OAuth2Client = Client::new(ClientId::new(config.google_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.google_client_secret.clone()))
        .set_auth_uri(AuthUrl::new(config.google_auth_url.clone()).map_err(invalid("GOOGLE_AUTH_URL"))?)
        .set_token_uri(
            TokenUrl::new(config.google_token_url.clone()).map_err(invalid("GOOGLE_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.google_redirect_url.clone())
                .map_err(invalid("GOOGLE_REDIRECT_URL"))?,
        );

    Ok(client)
}

#[cfg(test)]
mod tests {
    use sea_orm::Database;

    use super::*;

    fn config(secret: &str) -> Config {
        Config::from_lookup(|name| {
            let value = match name {
                "DATABASE_URL" => "sqlite::memory:",
                "GOOGLE_CLIENT_ID" => "client-id.apps.googleusercontent.com",
                "GOOGLE_CLIENT_SECRET" => "secret",
                "GOOGLE_REDIRECT_URL" => "http://localhost:8080/api/auth/callback",
                "JWT_SECRET" => secret,
                _ => return None,
            };
            Some(value.to_string())
        })
        .unwrap()
    }

    /// Tests that the signed session layer builds on the application's Sqlite pool.
    ///
    /// Expected: Ok with the session table migrated
    #[tokio::test]
    async fn builds_signed_session_layer() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let config = config(&"s".repeat(64));

        let layer: Result<SessionManagerLayer<SqliteStore, SignedCookie>, AppError> =
            connect_to_session(&db, &config).await;

        assert!(layer.is_ok());
    }

    /// Tests that the OAuth client accepts the configured Google endpoints.
    ///
    /// Expected: Ok
    #[test]
    fn builds_oauth_client() {
        let config = config(&"s".repeat(64));

        assert!(setup_oauth_client(&config).is_ok());
    }
}
