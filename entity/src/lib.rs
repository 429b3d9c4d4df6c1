//! SeaORM entity definitions for the feedback cycle schema.
//!
//! Every table created by the `migration` crate has a matching module here. Identifiers are
//! UUID strings generated by the application, so no primary key is auto-incremented.

pub mod prelude;

pub mod comment;
pub mod feedback;
pub mod feedback_content;
pub mod feedback_cycle;
pub mod goal;
pub mod organization;
pub mod organizational_hierarchy;
pub mod rating;
pub mod review_template;
pub mod user;
pub mod user_role;
