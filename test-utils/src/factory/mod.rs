//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert rows immediately, so parents must exist
//! before children are created; the `helpers` module creates whole dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let org = factory::organization::create_organization(db).await?;
//! let user = factory::user::UserFactory::new(db)
//!     .organization(&org.id)
//!     .roles(&["employee", "admin"])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `organization` - Create organization entities
//! - `user` - Create user entities with role rows
//! - `cycle` - Create feedback cycle entities
//! - `feedback` - Create feedback entities with their content row
//! - `comment` - Create comment entities
//! - `hierarchy` - Create reporting-line edges
//! - `review_template` - Create review template entities
//! - `helpers` - Unique ids and dependency chains

pub mod comment;
pub mod cycle;
pub mod feedback;
pub mod helpers;
pub mod hierarchy;
pub mod organization;
pub mod review_template;
pub mod user;

pub use comment::create_comment;
pub use cycle::create_cycle;
pub use feedback::create_feedback;
pub use hierarchy::create_edge;
pub use organization::create_organization;
pub use user::create_user;
