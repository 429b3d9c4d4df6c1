use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// What a layout demands of the session user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    LoggedIn,
    Admin,
    SuperAdmin,
}

impl Requirement {
    fn is_met_by(&self, state: &AuthState) -> bool {
        match self {
            Requirement::LoggedIn => state.user().is_some(),
            Requirement::Admin => state.is_admin(),
            Requirement::SuperAdmin => state.is_super_admin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    Hydrating,
    Loading,
    Unauthenticated,
    Unauthorized,
    Authorized,
}

/// Decides what a protected layout shows for the current auth state.
///
/// A failed user lookup counts as unauthenticated.
pub fn resolve_guard(state: &AuthState, requirement: Requirement) -> GuardState {
    match state {
        AuthState::Hydrating => GuardState::Hydrating,
        AuthState::Loading => GuardState::Loading,
        AuthState::NotLoggedIn | AuthState::Error(_) => GuardState::Unauthenticated,
        AuthState::Authenticated(_) if requirement.is_met_by(state) => GuardState::Authorized,
        AuthState::Authenticated(_) => GuardState::Unauthorized,
    }
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { requirement: Requirement::LoggedIn }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { requirement: Requirement::Admin }
    }
}

/// Super admin pages. Admins without the role are sent back to `/admin`.
#[component]
pub fn SuperAdminRouteGuard() -> Element {
    rsx! {
        ProtectedLayout { requirement: Requirement::SuperAdmin }
    }
}

#[component]
pub fn ProtectedLayout(requirement: Requirement) -> Element {
    let auth_context = use_context::<AuthContext>();
    let nav = navigator();

    let guard = resolve_guard(&auth_context.read(), requirement);

    use_effect(use_reactive!(|(guard, requirement)| {
        match (guard, requirement) {
            (GuardState::Unauthenticated, _) => {
                nav.push(Route::Login {});
            }
            (GuardState::Unauthorized, Requirement::SuperAdmin) => {
                nav.push(Route::Admin {});
            }
            _ => (),
        }
    }));

    rsx! {
        match guard {
            GuardState::Hydrating | GuardState::Loading => rsx! { LoadingPage {} },
            GuardState::Authorized => rsx! { Outlet::<Route> {} },
            GuardState::Unauthorized if requirement != Requirement::SuperAdmin => rsx! {
                ErrorPage {
                    status: 403,
                    message: "You don't have permission to view this page".to_string(),
                }
            },
            // Redirecting
            _ => rsx! {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        client::model::error::ApiError,
        model::user::{Role, UserDto},
    };

    fn user(roles: &[Role]) -> AuthState {
        AuthState::Authenticated(UserDto {
            id: "user-1".to_string(),
            email: "jane@example.com".to_string(),
            name: "Jane".to_string(),
            organization_id: None,
            roles: roles.to_vec(),
        })
    }

    #[test]
    fn pending_states_wait() {
        assert_eq!(
            resolve_guard(&AuthState::Hydrating, Requirement::SuperAdmin),
            GuardState::Hydrating
        );
        assert_eq!(
            resolve_guard(&AuthState::Loading, Requirement::SuperAdmin),
            GuardState::Loading
        );
    }

    #[test]
    fn anonymous_users_are_unauthenticated() {
        assert_eq!(
            resolve_guard(&AuthState::NotLoggedIn, Requirement::SuperAdmin),
            GuardState::Unauthenticated
        );

        let failed = AuthState::Error(ApiError {
            status: 500,
            message: "Failed to send request".to_string(),
        });
        assert_eq!(
            resolve_guard(&failed, Requirement::LoggedIn),
            GuardState::Unauthenticated
        );
    }

    #[test]
    fn super_admin_guard_requires_role() {
        assert_eq!(
            resolve_guard(&user(&[Role::Employee]), Requirement::SuperAdmin),
            GuardState::Unauthorized
        );
        assert_eq!(
            resolve_guard(&user(&[Role::Admin]), Requirement::SuperAdmin),
            GuardState::Unauthorized
        );
        assert_eq!(
            resolve_guard(&user(&[Role::SuperAdmin]), Requirement::SuperAdmin),
            GuardState::Authorized
        );
    }

    #[test]
    fn super_admin_passes_admin_guard() {
        assert_eq!(
            resolve_guard(&user(&[Role::SuperAdmin]), Requirement::Admin),
            GuardState::Authorized
        );
        assert_eq!(
            resolve_guard(&user(&[Role::Employee]), Requirement::LoggedIn),
            GuardState::Authorized
        );
    }
}
