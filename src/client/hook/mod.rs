pub mod maintenance;

pub use maintenance::{use_maintenance_mode, MaintenanceState};
