// File: crates/reservo_reservation/src/doc.rs

#![cfg(feature = "openapi")]
use crate::models::{BlockedEvent, DayTimetable, TimeSlotsRequest, Timeslot, WorkHourRule};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::get_time_slots_handler),
    components(schemas(
        TimeSlotsRequest,
        DayTimetable,
        Timeslot,
        WorkHourRule,
        BlockedEvent
    )),
    tags(
        (name = "Reservation", description = "Bookable timeslot computation")
    ),
    servers(
        (url = "/api", description = "Reservation API server")
    )
)]
pub struct ReservationApiDoc;
