// --- File: crates/reservo_reservation/src/logic.rs ---
use crate::anchor::{parse_timezone, AnchorDate};
use crate::error::{invalid_argument, ReservationError, Result};
use crate::models::{DayTimetable, TimeSlotsRequest, Timeslot};
use crate::schedule::ScheduleData;
use crate::slots::{enumerate, window_for};
use crate::workhours::SECONDS_PER_DAY;
use chrono_tz::Tz;
use reservo_config::ReservationConfig;
use tracing::debug;

pub const DEFAULT_TIMESLOT_INTERVAL: i64 = 1800;
pub const DEFAULT_DAYS: u32 = 1;
pub const DEFAULT_IS_IGNORE_WORKHOUR: bool = false;

/// Server-side settings that shape how requests are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimetableOptions {
    /// Zone used when the request has no `timezone_identifier`
    pub default_timezone: Tz,
    /// Largest accepted `days` value
    pub max_days: u32,
    /// Largest accepted candidate-slot bound, see [`candidate_slot_bound`]
    pub max_candidate_slots: u64,
}

impl Default for TimetableOptions {
    fn default() -> Self {
        Self {
            default_timezone: Tz::UTC,
            max_days: 366,
            max_candidate_slots: 100_000,
        }
    }
}

impl TimetableOptions {
    pub fn from_config(config: &ReservationConfig) -> Result<Self> {
        let default_timezone = config.default_timezone.parse::<Tz>().map_err(|_| {
            ReservationError::InvalidConfig(format!(
                "unknown default_timezone '{}'",
                config.default_timezone
            ))
        })?;
        Ok(Self {
            default_timezone,
            max_days: config.max_days,
            max_candidate_slots: config.max_candidate_slots,
        })
    }
}

/// A request whose fields passed presence and range checks.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedRequest {
    pub start: AnchorDate,
    pub service_duration: i64,
    pub days: u32,
    pub timeslot_interval: i64,
    pub is_ignore_schedule: bool,
    pub is_ignore_workhour: bool,
}

impl ValidatedRequest {
    /// Checks every field before any day is computed.
    ///
    /// `days` and `timeslot_interval` of zero fall back to their defaults.
    pub fn new(request: &TimeSlotsRequest, options: &TimetableOptions) -> Result<Self> {
        let start_day = request
            .start_day_identifier
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| invalid_argument("start_day_identifier required"))?;

        let service_duration = match request.service_duration {
            None | Some(0) => return Err(invalid_argument("service_duration required")),
            Some(d) if d < 0 => return Err(invalid_argument("service_duration must be positive")),
            Some(d) => d,
        };

        let timeslot_interval = match request.timeslot_interval {
            None | Some(0) => DEFAULT_TIMESLOT_INTERVAL,
            Some(i) if i < 0 => {
                return Err(invalid_argument("timeslot_interval must be positive"))
            }
            Some(i) => i,
        };

        let days = request.days.filter(|d| *d > 0).unwrap_or(DEFAULT_DAYS);
        if days > options.max_days {
            return Err(invalid_argument(format!(
                "days must not exceed {}",
                options.max_days
            )));
        }

        let bound = candidate_slot_bound(days, timeslot_interval);
        if bound > options.max_candidate_slots {
            return Err(invalid_argument(format!(
                "request would enumerate {} candidate slots, limit is {}",
                bound, options.max_candidate_slots
            )));
        }

        let tz = match request.timezone_identifier.as_deref() {
            Some(name) if !name.is_empty() => parse_timezone(name)?,
            _ => options.default_timezone,
        };
        let start = AnchorDate::resolve(start_day, tz)?;

        Ok(Self {
            start,
            service_duration,
            days,
            timeslot_interval,
            is_ignore_schedule: request.is_ignore_schedule,
            is_ignore_workhour: request.is_ignore_workhour,
        })
    }
}

/// Most candidate slots `days` days can yield at the given step.
///
/// A window never exceeds one day, so each day starts at most
/// `86400 / timeslot_interval + 1` candidates. `timeslot_interval` must be positive.
pub fn candidate_slot_bound(days: u32, timeslot_interval: i64) -> u64 {
    let per_day = (SECONDS_PER_DAY / timeslot_interval) as u64 + 1;
    u64::from(days).saturating_mul(per_day)
}

/// Computes the per-day timetables for `request` against the loaded schedule.
///
/// Fails without partial output when a field is invalid or when a working
/// day has no business-hour rule.
pub fn get_time_slots(
    request: &TimeSlotsRequest,
    schedule: &ScheduleData,
    options: &TimetableOptions,
) -> Result<Vec<DayTimetable>> {
    let validated = ValidatedRequest::new(request, options)?;
    build_day_timetables(&validated, schedule)
}

pub fn build_day_timetables(
    request: &ValidatedRequest,
    schedule: &ScheduleData,
) -> Result<Vec<DayTimetable>> {
    debug!(
        "Building {} day timetables from {} ({}), duration {}s, interval {}s",
        request.days,
        request.start.date(),
        request.start.midnight().timezone(),
        request.service_duration,
        request.timeslot_interval
    );

    let mut day_timetables = Vec::with_capacity(request.days as usize);
    for day_modifier in 0..request.days {
        let current_day = request.start.advance(day_modifier)?;
        let weekday = current_day.weekday();
        let workhour = schedule.workhours.lookup(weekday);
        let is_day_off = workhour.is_some_and(|rule| rule.is_day_off);

        if !should_process_workhour(request.is_ignore_workhour, is_day_off) {
            day_timetables.push(DayTimetable {
                start_of_day: current_day.timestamp(),
                day_modifier,
                is_day_off: true,
                timeslots: Vec::new(),
            });
            continue;
        }

        let (open, close) = window_for(
            current_day.timestamp(),
            weekday,
            workhour,
            request.is_ignore_workhour,
        )?;
        let timeslots: Vec<Timeslot> = enumerate(
            open,
            close,
            request.service_duration,
            request.timeslot_interval,
        )
        .into_iter()
        .filter(|slot| !schedule.blocked.is_blocked(slot, request.is_ignore_schedule))
        .collect();

        debug!(
            "Day {} ({}, weekday {}): {} slots",
            day_modifier,
            current_day.date(),
            weekday,
            timeslots.len()
        );
        day_timetables.push(DayTimetable {
            start_of_day: current_day.timestamp(),
            day_modifier,
            is_day_off: false,
            timeslots,
        });
    }

    Ok(day_timetables)
}

/// Whether a day gets slots, kept bit-for-bit compatible with the existing API.
///
/// Only `is_ignore_workhour` turns a day off; the rule's `is_day_off` flag is
/// gated behind `DEFAULT_IS_IGNORE_WORKHOUR`, which is false.
pub fn should_process_workhour(is_ignore_workhour: bool, is_day_off: bool) -> bool {
    !(is_ignore_workhour || (DEFAULT_IS_IGNORE_WORKHOUR && is_day_off))
}
