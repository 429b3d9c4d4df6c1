use chrono::{NaiveDate, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{cycle::CycleRepository, hierarchy::HierarchyRepository},
    error::AppError,
};

/// Starts the hourly maintenance scheduler.
///
/// Each run closes active cycles whose end date has passed and deactivates hierarchy
/// relationships whose end date has been reached. Failures are logged and the next run
/// tries again.
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Top of every hour
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            run_maintenance(&db, Utc::now().date_naive()).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cycle maintenance scheduler started");

    Ok(())
}

/// Runs both maintenance passes for `today`, logging each outcome.
pub(crate) async fn run_maintenance(db: &DatabaseConnection, today: NaiveDate) {
    if let Err(e) = close_expired_cycles(db, today).await {
        tracing::error!("Error closing expired cycles: {}", e);
    }

    if let Err(e) = deactivate_ended_edges(db, today).await {
        tracing::error!("Error deactivating ended hierarchy relationships: {}", e);
    }
}

async fn close_expired_cycles(db: &DatabaseConnection, today: NaiveDate) -> Result<(), AppError> {
    let closed = CycleRepository::new(db).close_expired(today).await?;
    if closed > 0 {
        tracing::info!("Closed {} expired review cycles", closed);
    }

    Ok(())
}

async fn deactivate_ended_edges(db: &DatabaseConnection, today: NaiveDate) -> Result<(), AppError> {
    let ended = HierarchyRepository::new(db).deactivate_ended(today).await?;
    if ended > 0 {
        tracing::info!("Deactivated {} ended hierarchy relationships", ended);
    }

    Ok(())
}
