use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Authentication state shared through context by `App`.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Hydrating),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Rendered on the server or before the client has hydrated; the session is unknown
    Hydrating,
    /// The user request is in flight
    Loading,
    Authenticated(UserDto),
    /// No active session
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    /// Whether the user request has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        !matches!(self, AuthState::Hydrating | AuthState::Loading)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(UserDto::is_admin)
    }

    pub fn is_super_admin(&self) -> bool {
        self.user().is_some_and(UserDto::is_super_admin)
    }
}
