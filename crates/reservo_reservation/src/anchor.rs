// --- File: crates/reservo_reservation/src/anchor.rs ---
//! Calendar-date anchoring: `YYYYMMDD` + zone name → local midnight.

use crate::error::{invalid_argument, Result};
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use std::str::FromStr;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// A calendar day in a zone, together with the instant of its local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorDate {
    date: NaiveDate,
    midnight: DateTime<Tz>,
}

impl AnchorDate {
    /// Resolves an 8-digit `YYYYMMDD` identifier to local midnight in `tz`.
    pub fn resolve(date_identifier: &str, tz: Tz) -> Result<Self> {
        let date = parse_date_identifier(date_identifier)?;
        Self::from_date(date, tz)
    }

    pub fn from_date(date: NaiveDate, tz: Tz) -> Result<Self> {
        let midnight = local_midnight(date, tz)?;
        Ok(Self { date, midnight })
    }

    /// The anchor `days` calendar days later in the same zone.
    ///
    /// Midnight is re-resolved for the new date, so a day containing a DST
    /// transition is 23 or 25 hours long rather than a fixed 86400 seconds.
    pub fn advance(&self, days: u32) -> Result<Self> {
        let date = self
            .date
            .checked_add_days(Days::new(u64::from(days)))
            .ok_or_else(|| invalid_argument("days out of range"))?;
        Self::from_date(date, self.midnight.timezone())
    }

    /// Monday=1 … Sunday=7.
    pub fn weekday(&self) -> u8 {
        self.date.weekday().number_from_monday() as u8
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn midnight(&self) -> DateTime<Tz> {
        self.midnight
    }

    /// Epoch seconds of local midnight.
    pub fn timestamp(&self) -> i64 {
        self.midnight.timestamp()
    }
}

/// Parses an IANA zone name such as `Asia/Seoul`.
pub fn parse_timezone(timezone_identifier: &str) -> Result<Tz> {
    Tz::from_str(timezone_identifier).map_err(|_| invalid_argument("invalid timezone_identifier"))
}

fn parse_date_identifier(date_identifier: &str) -> Result<NaiveDate> {
    if date_identifier.len() != 8 || !date_identifier.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_argument("invalid dateStr param"));
    }
    let field = |range: std::ops::Range<usize>| date_identifier[range].parse::<u32>().ok();
    let (Some(year), Some(month), Some(day)) = (field(0..4), field(4..6), field(6..8)) else {
        return Err(invalid_argument("invalid dateStr param"));
    };
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| invalid_argument("invalid dateStr param"))
}

/// First instant of `date` in `tz`.
///
/// Ambiguous midnights take the earlier instant. When midnight falls into a
/// DST gap, the first existing minute of the day is used.
fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    let naive = date.and_time(NaiveTime::MIN);
    (0..MINUTES_PER_DAY)
        .find_map(|minute| {
            tz.from_local_datetime(&(naive + Duration::minutes(minute)))
                .earliest()
        })
        .ok_or_else(|| invalid_argument("invalid dateStr param"))
}
