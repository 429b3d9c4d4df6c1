//! HTTP request handlers.
//!
//! Each handler resolves the session user through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts request DTOs into parameter types, calls a service and maps the domain result
//! back into a DTO. Every handler carries a `utoipa::path` annotation collected by the
//! router's OpenAPI document.

pub mod auth;
pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod goal;
pub mod hierarchy;
pub mod maintenance;
pub mod organization;
pub mod rating;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
