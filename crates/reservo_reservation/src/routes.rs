// --- File: crates/reservo_reservation/src/routes.rs ---

use crate::error::ReservationError;
use crate::handlers::{get_time_slots_handler, ReservationState};
use crate::logic::TimetableOptions;
use crate::schedule::ScheduleData;
use axum::{routing::post, Router};
use reservo_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the reservation feature.
///
/// The schedule is loaded by the caller and shared read-only with every request.
pub fn routes(
    config: Arc<AppConfig>,
    schedule: Arc<ScheduleData>,
) -> Result<Router, ReservationError> {
    let options = TimetableOptions::from_config(&config.reservation)?;
    let state = Arc::new(ReservationState { schedule, options });

    Ok(Router::new()
        .route("/getTimeSlots", post(get_time_slots_handler))
        .with_state(state))
}
