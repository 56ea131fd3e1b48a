// --- File: crates/reservo_reservation/src/slots.rs ---
use crate::error::{ReservationError, Result};
use crate::models::{Timeslot, WorkHourRule};
use crate::workhours::SECONDS_PER_DAY;

/// Candidate slots of length `duration`, starting at `open` and stepping by
/// `step`, that end no later than `close`.
///
/// Slots overlap each other when `step < duration`. Callers guarantee
/// `duration > 0` and `step > 0`.
pub fn enumerate(open: i64, close: i64, duration: i64, step: i64) -> Vec<Timeslot> {
    debug_assert!(duration > 0 && step > 0);
    let mut slots = Vec::new();
    let mut time = open;
    while let Some(end_at) = time.checked_add(duration).filter(|end| *end <= close) {
        slots.push(Timeslot {
            begin_at: time,
            end_at,
        });
        match time.checked_add(step) {
            Some(next) => time = next,
            None => break,
        }
    }
    slots
}

/// The `(open, close)` window in epoch seconds for a day starting at `midnight`.
///
/// With `ignore_workhour` the whole day is open. Otherwise the rule's
/// intervals are added to `midnight`; a missing rule is a lookup gap.
pub fn window_for(
    midnight: i64,
    weekday: u8,
    rule: Option<&WorkHourRule>,
    ignore_workhour: bool,
) -> Result<(i64, i64)> {
    if ignore_workhour {
        return Ok((midnight, midnight + SECONDS_PER_DAY));
    }
    let rule = rule.ok_or(ReservationError::MissingWorkHour { weekday })?;
    Ok((midnight + rule.open_interval, midnight + rule.close_interval))
}
