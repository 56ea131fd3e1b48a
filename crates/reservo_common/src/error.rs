// --- File: crates/reservo_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Reservo errors.
///
/// Each crate keeps its own domain error and converts it into `ReservoError`
/// at the HTTP boundary by implementing `From<DomainError> for ReservoError`.
#[derive(Error, Debug)]
pub enum ReservoError {
    /// A request field is missing or malformed. The message is shown to the caller verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ReservoError {
    fn status_code(&self) -> u16 {
        match self {
            ReservoError::InvalidArgument(_) => 400,
            ReservoError::ConfigError(_) => 500,
            ReservoError::InternalError(_) => 500,
        }
    }
}

impl From<std::io::Error> for ReservoError {
    fn from(err: std::io::Error) -> Self {
        ReservoError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn invalid_argument<T: fmt::Display>(message: T) -> ReservoError {
    ReservoError::InvalidArgument(message.to_string())
}

pub fn config_error<T: fmt::Display>(message: T) -> ReservoError {
    ReservoError::ConfigError(message.to_string())
}
