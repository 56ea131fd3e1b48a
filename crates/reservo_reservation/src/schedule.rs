// --- File: crates/reservo_reservation/src/schedule.rs ---
//! Read-only business-hours and blocked-event tables.
//!
//! Loaded once from JSON at startup and shared behind an `Arc`; the timetable
//! builder only ever borrows them.

use crate::error::{ReservationError, Result};
use crate::models::{BlockedEvent, WorkHourRule};
use crate::overlap::BlockedSchedule;
use crate::workhours::WorkHourTable;
use reservo_config::ReservationConfig;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleData {
    pub workhours: WorkHourTable,
    pub blocked: BlockedSchedule,
}

impl ScheduleData {
    pub fn new(rules: Vec<WorkHourRule>, events: &[BlockedEvent]) -> Result<Self> {
        Ok(Self {
            workhours: WorkHourTable::new(rules)?,
            blocked: BlockedSchedule::new(events)?,
        })
    }

    /// Parses both tables from JSON arrays.
    pub fn from_json(workhours_json: &str, events_json: &str) -> Result<Self> {
        let rules: Vec<WorkHourRule> = parse_json("workhours", workhours_json)?;
        let events: Vec<BlockedEvent> = parse_json("events", events_json)?;
        Self::new(rules, &events)
    }

    /// Reads the files named in the reservation config.
    pub fn load(config: &ReservationConfig) -> Result<Self> {
        let rules: Vec<WorkHourRule> = read_json_file(Path::new(&config.workhours_path))?;
        let events: Vec<BlockedEvent> = read_json_file(Path::new(&config.events_path))?;
        let data = Self::new(rules, &events)?;
        info!(
            "Loaded {} work hour rules and {} blocked events ({} merged intervals)",
            data.workhours.len(),
            events.len(),
            data.blocked.intervals().len()
        );
        Ok(data)
    }
}

fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| ReservationError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_json(&path.display().to_string(), &raw)
}

fn parse_json<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|source| ReservationError::Json {
        path: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKHOURS: &str = r#"[
        { "weekday": 1, "open_interval": 32400, "close_interval": 61200, "is_day_off": false },
        { "weekday": 7, "open_interval": 0, "close_interval": 0, "is_day_off": true }
    ]"#;

    #[test]
    fn test_from_json() {
        let events = r#"[{ "begin_at": 100, "end_at": 200 }]"#;
        let data = ScheduleData::from_json(WORKHOURS, events).unwrap();
        assert_eq!(data.workhours.len(), 2);
        assert!(data.workhours.lookup(7).unwrap().is_day_off);
        assert_eq!(data.blocked.intervals().len(), 1);
    }

    #[test]
    fn test_is_day_off_defaults_to_false() {
        let rules = r#"[{ "weekday": 2, "open_interval": 0, "close_interval": 3600 }]"#;
        let data = ScheduleData::from_json(rules, "[]").unwrap();
        assert!(!data.workhours.lookup(2).unwrap().is_day_off);
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = ScheduleData::from_json("{", "[]").unwrap_err();
        assert!(matches!(err, ReservationError::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let config = ReservationConfig {
            workhours_path: "no/such/workhours.json".to_string(),
            ..ReservationConfig::default()
        };
        let err = ScheduleData::load(&config).unwrap_err();
        assert!(err.to_string().contains("no/such/workhours.json"));
    }

    #[test]
    fn test_load_from_files() {
        let dir = std::env::temp_dir().join(format!("reservo-schedule-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let workhours_path = dir.join("workhours.json");
        let events_path = dir.join("events.json");
        fs::write(&workhours_path, WORKHOURS).unwrap();
        fs::write(&events_path, "[]").unwrap();

        let config = ReservationConfig {
            workhours_path: workhours_path.display().to_string(),
            events_path: events_path.display().to_string(),
            ..ReservationConfig::default()
        };
        let data = ScheduleData::load(&config).unwrap();
        assert!(data.workhours.lookup(1).is_some());
        assert!(data.blocked.intervals().is_empty());

        fs::remove_dir_all(&dir).ok();
    }
}
