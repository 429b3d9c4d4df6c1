//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models in the service layer and transformed to DTOs at the controller boundary.
//! Stored enumeration strings are parsed into typed enums on the way in, so nothing above
//! the data layer handles raw status or type strings.

pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod goal;
pub mod hierarchy;
pub mod organization;
pub mod rating;
pub mod review;
pub mod user;
