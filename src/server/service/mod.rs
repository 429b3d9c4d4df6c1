//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Access rules, state transitions and derived defaults
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Multi-row writes run in one transaction, with every
//!   repository in the unit of work built on the same `&txn`

pub mod auth;
pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod goal;
pub mod hierarchy;
pub mod organization;
pub mod rating;
pub mod review;
pub mod user;
