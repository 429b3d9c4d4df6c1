use std::future::Future;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{client::model::error::ApiError, model::maintenance::is_truthy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaintenanceState {
    /// No answer from the server yet.
    Checking,
    Active,
    Inactive,
}

impl From<bool> for MaintenanceState {
    fn from(active: bool) -> Self {
        if active {
            Self::Active
        } else {
            Self::Inactive
        }
    }
}

/// Whether the build-time flag forces maintenance mode.
pub fn flag_enabled(flag: Option<&str>) -> bool {
    flag.is_some_and(is_truthy)
}

/// Resolves the maintenance state once.
///
/// The build flag short-circuits the request. A failed request is logged and
/// treated as "not in maintenance" so an unreachable status endpoint never
/// locks users out.
pub async fn check_maintenance<F, Fut>(flag: Option<&str>, fetch: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<bool, ApiError>>,
{
    if flag_enabled(flag) {
        return true;
    }

    match fetch().await {
        Ok(active) => active,
        Err(err) => {
            tracing::warn!("Failed to check maintenance status: {}", err);
            false
        }
    }
}

/// Polls the maintenance status endpoint every
/// [`MAINTENANCE_POLL_SECS`](crate::client::constant::MAINTENANCE_POLL_SECS) seconds.
pub fn use_maintenance_mode() -> Signal<MaintenanceState> {
    #[allow(unused_mut)]
    let mut state = use_signal(|| {
        if flag_enabled(crate::client::constant::MAINTENANCE_MODE) {
            MaintenanceState::Active
        } else {
            MaintenanceState::Checking
        }
    });

    #[cfg(feature = "web")]
    use_future(move || async move {
        use crate::client::{
            api::maintenance::get_maintenance_status,
            constant::{MAINTENANCE_MODE, MAINTENANCE_POLL_SECS},
        };

        loop {
            let active = check_maintenance(MAINTENANCE_MODE, || async {
                get_maintenance_status()
                    .await
                    .map(|status| status.data.maintenance)
            })
            .await;
            state.set(MaintenanceState::from(active));

            if flag_enabled(MAINTENANCE_MODE) {
                break;
            }

            gloo_timers::future::sleep(std::time::Duration::from_secs(MAINTENANCE_POLL_SECS))
                .await;
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn build_flag_skips_request() {
        let calls = AtomicUsize::new(0);

        let active = check_maintenance(Some("true"), || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        })
        .await;

        assert!(active);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn uses_server_answer_without_flag() {
        assert!(check_maintenance(None, || async { Ok(true) }).await);
        assert!(!check_maintenance(Some("false"), || async { Ok(false) }).await);
    }

    #[tokio::test]
    async fn failed_request_means_inactive() {
        let active = check_maintenance(None, || async {
            Err(ApiError {
                status: 500,
                message: "Failed to send request".to_string(),
            })
        })
        .await;

        assert!(!active);
    }

    #[test]
    fn flag_accepts_truthy_values() {
        assert!(flag_enabled(Some("1")));
        assert!(flag_enabled(Some("On")));
        assert!(!flag_enabled(Some("nope")));
        assert!(!flag_enabled(None));
    }
}
