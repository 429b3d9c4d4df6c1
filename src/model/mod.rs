pub mod api;
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
