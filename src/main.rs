use std::sync::Arc;

use orderboard::{
    config::Config, error::AppError, notify::NotificationBus, router,
    scheduler::promotions, service::token::TokenService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let bus = Arc::new(NotificationBus::new());
    let tokens = TokenService::new(&config.token_secret, config.token_ttl_hours);

    tracing::info!("Starting server");

    // Start the promotion expiry scheduler in a separate task
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = promotions::start_scheduler(scheduler_db).await {
            tracing::error!("Promotion scheduler error: {}", e);
        }
    });

    let app = router::router(AppState::new(db, bus, tokens));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
