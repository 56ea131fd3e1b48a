// --- File: crates/reservo_reservation/src/workhours.rs ---
use crate::error::{ReservationError, Result};
use crate::models::WorkHourRule;
use std::collections::BTreeMap;
use tracing::warn;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Business-hour rules keyed by weekday (Monday=1 … Sunday=7).
///
/// Built through [`WorkHourTable::new`], which rejects out-of-range weekdays,
/// duplicates and windows that do not fit inside one day. A table may still
/// lack some weekdays; lookups for those return `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkHourTable {
    rules: BTreeMap<u8, WorkHourRule>,
}

impl WorkHourTable {
    pub fn new(rules: impl IntoIterator<Item = WorkHourRule>) -> Result<Self> {
        let mut table = BTreeMap::new();
        for rule in rules {
            validate_rule(&rule)?;
            let weekday = rule.weekday;
            if table.insert(weekday, rule).is_some() {
                return Err(ReservationError::InvalidSchedule(format!(
                    "duplicate rule for weekday {weekday}"
                )));
            }
        }

        let missing: Vec<u8> = (1..=7).filter(|day| !table.contains_key(day)).collect();
        if !missing.is_empty() {
            warn!("Work hour table has no rule for weekdays {:?}", missing);
        }

        Ok(Self { rules: table })
    }

    pub fn lookup(&self, weekday: u8) -> Option<&WorkHourRule> {
        self.rules.get(&weekday)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn validate_rule(rule: &WorkHourRule) -> Result<()> {
    if !(1..=7).contains(&rule.weekday) {
        return Err(ReservationError::InvalidSchedule(format!(
            "weekday must be within 1..=7, got {}",
            rule.weekday
        )));
    }
    let in_day = |seconds: i64| (0..=SECONDS_PER_DAY).contains(&seconds);
    if !in_day(rule.open_interval) || !in_day(rule.close_interval) {
        return Err(ReservationError::InvalidSchedule(format!(
            "weekday {}: open/close must be within 0..={SECONDS_PER_DAY} seconds",
            rule.weekday
        )));
    }
    if rule.open_interval > rule.close_interval {
        return Err(ReservationError::InvalidSchedule(format!(
            "weekday {}: open_interval {} is after close_interval {}",
            rule.weekday, rule.open_interval, rule.close_interval
        )));
    }
    Ok(())
}
