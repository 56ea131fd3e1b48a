// --- File: crates/reservo_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Reservation Config ---
// Where the business-hours and blocked-event tables live, plus request limits.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReservationConfig {
    /// JSON array of weekday rules, e.g. `config/workhours.json`
    pub workhours_path: String,
    /// JSON array of blocked intervals, e.g. `config/events.json`
    pub events_path: String,
    /// Zone used when a request carries no `timezone_identifier`
    #[serde(default = "default_timezone")]
    pub default_timezone: String,
    /// Upper bound for the `days` request field
    #[serde(default = "default_max_days")]
    pub max_days: u32,
    /// Upper bound for `days × (86400 / timeslot_interval + 1)`, the most
    /// candidate slots a single request may enumerate
    #[serde(default = "default_max_candidate_slots")]
    pub max_candidate_slots: u64,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_max_days() -> u32 {
    366
}

fn default_max_candidate_slots() -> u64 {
    100_000
}

impl Default for ReservationConfig {
    fn default() -> Self {
        Self {
            workhours_path: "config/workhours.json".to_string(),
            events_path: "config/events.json".to_string(),
            default_timezone: default_timezone(),
            max_days: default_max_days(),
            max_candidate_slots: default_max_candidate_slots(),
        }
    }
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    /// Log level name (`trace`, `debug`, `info`, ...); INFO when absent
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub reservation: ReservationConfig,
}
