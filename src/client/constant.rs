pub const SITE_NAME: &str = "Feedback Cycles";

/// Seconds between maintenance status checks.
pub const MAINTENANCE_POLL_SECS: u64 = 30;

/// Build-time maintenance switch. When truthy the app never asks the server.
///
/// Read from `MAINTENANCE_MODE` at compile time. `VITE_MAINTENANCE_MODE`, the name the
/// previous web build used, is still honored when `MAINTENANCE_MODE` is unset.
pub const MAINTENANCE_MODE: Option<&str> = match option_env!("MAINTENANCE_MODE") {
    Some(flag) => Some(flag),
    None => option_env!("VITE_MAINTENANCE_MODE"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_flag_prefers_new_name() {
        let expected = option_env!("MAINTENANCE_MODE").or(option_env!("VITE_MAINTENANCE_MODE"));

        assert_eq!(MAINTENANCE_MODE, expected);
    }
}
