pub mod cycle_maintenance;
