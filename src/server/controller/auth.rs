use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{GoogleLoginDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::{
            auth::{GoogleAuthService, GoogleOAuthService},
            user::UserService,
        },
        state::AppState,
        validator::ValidatedJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Google for token exchange.
    pub code: String,
}

/// Redirects to Google's consent screen.
///
/// Stores a fresh CSRF token in the session for the callback to check.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Google sign-in"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let oauth_service = GoogleOAuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = oauth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth redirect flow.
///
/// Checks the CSRF state, exchanges the code, verifies the returned ID token, upserts the
/// user and stores their ID in the session before sending them to the app.
///
/// # Returns
/// - `303 See Other` - Signed in, redirect to `/`
/// - `400 Bad Request` - CSRF mismatch or failed code exchange
/// - `401 Unauthorized` - ID token rejected
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state issued by /api/auth/login"),
        ("code" = String, Query, description = "Authorization code from Google")
    ),
    responses(
        (status = 303, description = "Signed in, redirect to the app"),
        (status = 400, description = "CSRF mismatch or code exchange failure", body = ErrorDto),
        (status = 401, description = "Invalid ID token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let id_token = GoogleOAuthService::new(&state.http_client, &state.oauth_client)
        .exchange_code(params.code)
        .await?;
    let identity = GoogleAuthService::new(&state.verifier)
        .verify_id_token(&id_token)
        .await?;

    let user = UserService::new(&state.db).sign_in(&identity).await?;
    AuthSession::new(&session).set_user_id(&user.id).await?;

    Ok(Redirect::to("/"))
}

/// Signs in with a Google Identity Services credential.
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `400 Bad Request` - Missing credential
/// - `401 Unauthorized` - Credential rejected by Google
#[utoipa::path(
    post,
    path = "/api/auth/google",
    tag = AUTH_TAG,
    request_body = GoogleLoginDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Missing credential", body = ErrorDto),
        (status = 401, description = "Invalid ID token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn google_login(
    State(state): State<AppState>,
    session: Session,
    ValidatedJson(payload): ValidatedJson<GoogleLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let identity = GoogleAuthService::new(&state.verifier)
        .verify_id_token(&payload.credential)
        .await?;

    let user = UserService::new(&state.db).sign_in(&identity).await?;
    AuthSession::new(&session).set_user_id(&user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Returns the signed-in user, or 404 when nobody is signed in.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 404, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_session = AuthSession::new(&session);

    let Some(user_id) = auth_session.get_user_id().await? else {
        return Err(AppError::NotFound("Not logged in".to_string()));
    };

    match UserService::new(&state.db).get_by_id(&user_id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => {
            // Session outlived its user
            auth_session.clear().await?;
            Err(AppError::NotFound("Not logged in".to_string()))
        }
    }
}

/// Clears the session and sends the browser to the login page.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Signed out, redirect to /login"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(Redirect::temporary("/login"))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
