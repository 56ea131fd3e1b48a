// File: services/reservo_backend/src/main.rs
mod app;

use reservo_common::{logging, ReservoError};
use reservo_config::{config_dir, load_config};
use reservo_reservation::ScheduleData;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), ReservoError> {
    let config = load_config().map_err(reservo_common::config_error)?;
    logging::init_with_str(config.log_level.as_deref().unwrap_or("info"));
    info!(
        "Configuration loaded from {} (RUN_ENV={})",
        config_dir().display(),
        std::env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string())
    );
    let config = Arc::new(config);

    let schedule = logging::log_result(
        ScheduleData::load(&config.reservation),
        "Schedule data loaded",
        "Failed to load schedule data",
    )?;

    let app = app::build_router(config.clone(), Arc::new(schedule))?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
