pub mod helper;
pub mod maintenance;
pub mod organization;
pub mod review;
pub mod user;
