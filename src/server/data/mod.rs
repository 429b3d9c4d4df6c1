//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over `ConnectionTrait`, so the same
//! repository runs against the connection pool or inside a transaction opened by a service.
//! They return SeaORM entity models; services convert those into domain models.

pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod goal;
pub mod hierarchy;
pub mod organization;
pub mod rating;
pub mod review_template;
pub mod user;

#[cfg(test)]
mod test;

/// Generates a new primary key.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
