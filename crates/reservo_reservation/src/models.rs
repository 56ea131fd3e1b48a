// --- File: crates/reservo_reservation/src/models.rs ---
use serde::{Deserialize, Deserializer, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Business hours for one weekday, as stored in `workhours.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct WorkHourRule {
    /// Monday=1 … Sunday=7
    #[cfg_attr(feature = "openapi", schema(example = 1, minimum = 1, maximum = 7))]
    pub weekday: u8,
    /// Seconds after local midnight at which the day opens
    #[cfg_attr(feature = "openapi", schema(example = 32400))]
    pub open_interval: i64,
    /// Seconds after local midnight at which the day closes
    #[cfg_attr(feature = "openapi", schema(example = 61200))]
    pub close_interval: i64,
    #[serde(default)]
    pub is_day_off: bool,
}

/// An interval no generated slot may intersect, as stored in `events.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct BlockedEvent {
    #[cfg_attr(feature = "openapi", schema(example = 1704099600))]
    pub begin_at: i64,
    #[cfg_attr(feature = "openapi", schema(example = 1704103200))]
    pub end_at: i64,
}

/// Body of `POST /getTimeSlots`.
///
/// Every field is optional at the wire level; presence and range checks
/// happen in [`crate::logic::get_time_slots`] so that the caller receives the
/// same messages no matter which field is missing.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct TimeSlotsRequest {
    /// Calendar date in `YYYYMMDD` form
    #[cfg_attr(feature = "openapi", schema(example = "20240101"))]
    pub start_day_identifier: Option<String>,
    /// IANA zone name; the configured default zone is used when absent
    #[cfg_attr(feature = "openapi", schema(example = "Asia/Seoul"))]
    pub timezone_identifier: Option<String>,
    /// Length of each slot in seconds
    #[cfg_attr(feature = "openapi", schema(example = 3600))]
    pub service_duration: Option<i64>,
    /// Number of days to compute, starting at `start_day_identifier` (default 1)
    #[cfg_attr(feature = "openapi", schema(example = 3))]
    pub days: Option<u32>,
    /// Distance in seconds between consecutive slot starts (default 1800)
    #[cfg_attr(feature = "openapi", schema(example = 1800))]
    pub timeslot_interval: Option<i64>,
    /// Keep slots that intersect blocked events; absent or `null` means false
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_ignore_schedule: bool,
    /// Skip business hours and report every day as a day off; absent or `null` means false
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_ignore_workhour: bool,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Timeslot {
    #[cfg_attr(feature = "openapi", schema(example = 1704099600))]
    pub begin_at: i64,
    #[cfg_attr(feature = "openapi", schema(example = 1704101400))]
    pub end_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DayTimetable {
    /// Epoch seconds of this day's local midnight
    #[cfg_attr(feature = "openapi", schema(example = 1704034800))]
    pub start_of_day: i64,
    /// Offset in days from the requested start day
    #[cfg_attr(feature = "openapi", schema(example = 0))]
    pub day_modifier: u32,
    pub is_day_off: bool,
    pub timeslots: Vec<Timeslot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_flags_read_as_false() {
        let request: TimeSlotsRequest = serde_json::from_str(
            r#"{"start_day_identifier":"20240101","is_ignore_schedule":null,"is_ignore_workhour":null}"#,
        )
        .unwrap();
        assert!(!request.is_ignore_schedule);
        assert!(!request.is_ignore_workhour);

        let request: TimeSlotsRequest =
            serde_json::from_str(r#"{"is_ignore_schedule":true}"#).unwrap();
        assert!(request.is_ignore_schedule);
        assert!(!request.is_ignore_workhour);
    }

    #[test]
    fn test_non_boolean_flag_is_rejected() {
        assert!(serde_json::from_str::<TimeSlotsRequest>(r#"{"is_ignore_workhour":"yes"}"#).is_err());
    }
}
