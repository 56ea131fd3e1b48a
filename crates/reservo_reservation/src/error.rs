// --- File: crates/reservo_reservation/src/error.rs ---
use reservo_common::ReservoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReservationError {
    /// A request field is missing or malformed.
    #[error("{0}")]
    InvalidArgument(String),
    /// The business-hours table has no rule for the weekday being processed.
    #[error("No work hour rule configured for weekday {weekday}")]
    MissingWorkHour { weekday: u8 },
    /// The loaded business-hours or event table violates its invariants.
    #[error("Invalid schedule data: {0}")]
    InvalidSchedule(String),
    #[error("Invalid reservation config: {0}")]
    InvalidConfig(String),
    #[error("Failed to read schedule file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse schedule file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ReservationError>;

pub(crate) fn invalid_argument(message: impl Into<String>) -> ReservationError {
    ReservationError::InvalidArgument(message.into())
}

impl From<ReservationError> for ReservoError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::InvalidArgument(msg) => ReservoError::InvalidArgument(msg),
            err @ ReservationError::MissingWorkHour { .. } => {
                ReservoError::ConfigError(err.to_string())
            }
            err @ (ReservationError::InvalidSchedule(_) | ReservationError::InvalidConfig(_)) => {
                ReservoError::ConfigError(err.to_string())
            }
            err @ (ReservationError::Io { .. } | ReservationError::Json { .. }) => {
                ReservoError::InternalError(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reservo_common::HttpStatusCode;

    #[test]
    fn test_invalid_argument_is_client_error() {
        let err: ReservoError = invalid_argument("service_duration required").into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_string(), "service_duration required");
    }

    #[test]
    fn test_missing_work_hour_is_server_error() {
        let err: ReservoError = ReservationError::MissingWorkHour { weekday: 6 }.into();
        assert_eq!(err.status_code(), 500);
        assert!(err.to_string().contains("weekday 6"));
    }
}
