// --- File: crates/reservo_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP error mapping
pub mod logging; // Logging utilities

// Re-export error types and utilities for easier access
pub use error::{config_error, invalid_argument, HttpStatusCode, ReservoError};

// Re-export HTTP utilities for easier access
pub use http::IntoHttpResponse;

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, init_with_str, log_result};
