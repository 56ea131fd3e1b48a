// File: crates/reservo_reservation/src/handlers.rs
use crate::logic::{get_time_slots, TimetableOptions};
use crate::models::{DayTimetable, TimeSlotsRequest};
use crate::schedule::ScheduleData;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use reservo_common::{invalid_argument, ReservoError};
use std::sync::Arc;
use tracing::{info, warn};

// Shared state for the reservation handlers
#[derive(Clone)]
pub struct ReservationState {
    pub schedule: Arc<ScheduleData>,
    pub options: TimetableOptions,
}

/// Handler computing bookable timeslots per day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/getTimeSlots", // Path relative to /api
    request_body(content = TimeSlotsRequest, example = json!({
        "start_day_identifier": "20240101",
        "timezone_identifier": "Asia/Seoul",
        "service_duration": 3600,
        "days": 3,
        "timeslot_interval": 1800,
        "is_ignore_schedule": false,
        "is_ignore_workhour": false
    })),
    responses(
        (status = 200, description = "One timetable per requested day", body = [DayTimetable]),
        (status = 400, description = "Missing or invalid request field",
         example = json!({ "error": { "message": "service_duration required", "code": 400 } })),
        (status = 500, description = "Business hours not configured for a requested weekday")
    ),
    tag = "Reservation"
))]
pub async fn get_time_slots_handler(
    State(state): State<Arc<ReservationState>>,
    payload: Result<Json<TimeSlotsRequest>, JsonRejection>,
) -> Result<Json<Vec<DayTimetable>>, ReservoError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected time slot request body: {}", rejection.body_text());
        invalid_argument(rejection.body_text())
    })?;

    info!(
        "Time slot request: start={:?} tz={:?} days={:?} duration={:?}",
        request.start_day_identifier,
        request.timezone_identifier,
        request.days,
        request.service_duration
    );

    let timetables = get_time_slots(&request, &state.schedule, &state.options)?;
    Ok(Json(timetables))
}
