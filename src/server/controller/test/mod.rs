use axum::{
    body::Body,
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, Session, SessionManagerLayer};

use crate::server::{
    config::Config, middleware::session::AuthSession, router,
    service::auth::GoogleTokenVerifier, startup, state::AppState,
};

mod comment;
mod cycle;
mod feedback;
mod hierarchy;
mod rating;
mod review;
mod user;

/// Header carrying the user ID a test request is made as.
const TEST_USER_HEADER: &str = "x-test-user";

fn test_config() -> Config {
    Config::from_lookup(|name| {
        let value = match name {
            "DATABASE_URL" => "sqlite::memory:",
            "GOOGLE_CLIENT_ID" => "client-id.apps.googleusercontent.com",
            "GOOGLE_CLIENT_SECRET" => "secret",
            "GOOGLE_REDIRECT_URL" => "http://localhost:8080/api/auth/callback",
            "JWT_SECRET" => "0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef",
            _ => return None,
        };
        Some(value.to_string())
    })
    .unwrap()
}

/// Logs the request in as the user named by [`TEST_USER_HEADER`].
async fn login_as(session: Session, request: Request, next: Next) -> Response {
    let user_id = request
        .headers()
        .get(TEST_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Some(user_id) = user_id {
        AuthSession::new(&session)
            .set_user_id(&user_id)
            .await
            .unwrap();
    }

    next.run(request).await
}

/// Builds the API router against `db` with an in-memory session store.
fn test_app(db: &DatabaseConnection, maintenance_mode: bool) -> Router {
    let config = test_config();
    let http_client = startup::setup_reqwest_client().unwrap();
    let oauth_client = startup::setup_oauth_client(&config).unwrap();
    let verifier = GoogleTokenVerifier::new(http_client.clone(), config.google_client_id);

    router::router()
        .with_state(AppState::new(
            db.clone(),
            http_client,
            oauth_client,
            verifier,
            maintenance_mode,
        ))
        .layer(middleware::from_fn(login_as))
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn request(method: Method, uri: &str, user_id: Option<&str>, body: Option<serde_json::Value>) -> Request {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(TEST_USER_HEADER, user_id);
    }

    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, request: Request) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

fn json(bytes: &[u8]) -> serde_json::Value {
    serde_json::from_slice(bytes).unwrap()
}
