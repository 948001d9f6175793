use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{data::restaurant::RestaurantRepository, error::AppError};

/// Starts the promotion expiry scheduler.
///
/// This scheduler runs every minute and clears the promoted flag on
/// restaurants whose paid promotion window has lapsed, so promoted placement
/// never outlives the payment that bought it.
///
/// # Arguments
/// - `db`: Database connection
pub async fn start_scheduler(db: DatabaseConnection) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = expire_promotions(&db).await {
                tracing::error!("Error expiring restaurant promotions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Promotion expiry scheduler started");

    Ok(())
}

/// Clears promotions whose expiry time has passed.
async fn expire_promotions(db: &DatabaseConnection) -> Result<(), AppError> {
    let cleared = RestaurantRepository::new(db)
        .clear_expired_promotions(Utc::now())
        .await?;

    if cleared > 0 {
        tracing::info!(cleared, "expired restaurant promotions cleared");
    }

    Ok(())
}
