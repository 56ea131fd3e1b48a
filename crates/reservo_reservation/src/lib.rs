// --- File: crates/reservo_reservation/src/lib.rs ---
pub mod anchor;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod overlap;
pub mod routes;
pub mod schedule;
pub mod slots;
pub mod workhours;

pub use error::ReservationError;
pub use handlers::ReservationState;
pub use logic::{get_time_slots, TimetableOptions};
pub use models::{BlockedEvent, DayTimetable, TimeSlotsRequest, Timeslot, WorkHourRule};
pub use routes::routes;
pub use schedule::ScheduleData;
