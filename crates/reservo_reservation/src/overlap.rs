// --- File: crates/reservo_reservation/src/overlap.rs ---
use crate::error::{ReservationError, Result};
use crate::models::{BlockedEvent, Timeslot};

/// Whether `slot` intersects `event`.
///
/// True when the slot starts inside the event, ends inside it, or covers it.
pub fn overlaps(slot: &Timeslot, event: &BlockedEvent) -> bool {
    (slot.begin_at >= event.begin_at && slot.begin_at < event.end_at)
        || (slot.end_at > event.begin_at && slot.end_at <= event.end_at)
        || (slot.begin_at <= event.begin_at && slot.end_at >= event.end_at)
}

/// Linear scan over unsorted events.
pub fn is_blocked(slot: &Timeslot, events: &[BlockedEvent], ignore_schedule: bool) -> bool {
    if ignore_schedule {
        return false;
    }
    events.iter().any(|event| overlaps(slot, event))
}

/// Blocked events sorted and merged once, queried by binary search.
///
/// For slots with positive length this answers exactly like [`is_blocked`]
/// over the original list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedSchedule {
    merged: Vec<BlockedEvent>,
}

impl BlockedSchedule {
    /// Rejects events with `begin_at >= end_at`.
    pub fn new(events: &[BlockedEvent]) -> Result<Self> {
        if let Some(bad) = events.iter().find(|e| e.begin_at >= e.end_at) {
            return Err(ReservationError::InvalidSchedule(format!(
                "event begin_at {} must be before end_at {}",
                bad.begin_at, bad.end_at
            )));
        }
        Ok(Self {
            merged: merge_blocked_events(events),
        })
    }

    pub fn is_blocked(&self, slot: &Timeslot, ignore_schedule: bool) -> bool {
        if ignore_schedule {
            return false;
        }
        // First merged interval still running at slot start; only it can intersect.
        let idx = self.merged.partition_point(|event| event.end_at <= slot.begin_at);
        self.merged
            .get(idx)
            .is_some_and(|event| overlaps(slot, event))
    }

    pub fn intervals(&self) -> &[BlockedEvent] {
        &self.merged
    }
}

/// Sorts by `begin_at` and merges overlapping or touching intervals.
fn merge_blocked_events(events: &[BlockedEvent]) -> Vec<BlockedEvent> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|event| event.begin_at);

    let mut merged: Vec<BlockedEvent> = Vec::with_capacity(sorted.len());
    for event in sorted {
        match merged.last_mut() {
            Some(last) if event.begin_at <= last.end_at => {
                last.end_at = last.end_at.max(event.end_at);
            }
            _ => merged.push(event),
        }
    }
    merged
}
