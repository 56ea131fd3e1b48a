//! Logging utilities for the Reservo application.
//!
//! This module provides a standardized approach to logging across all crates
//! in the workspace. Every crate logs through `tracing`; the binary calls one
//! of the `init*` functions once at startup.

use tracing::{error, info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber at INFO level.
///
/// # Examples
///
/// ```
/// use reservo_common::logging;
///
/// logging::init();
/// logging::init_with_level(tracing::Level::DEBUG);
/// ```
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific log level.
///
/// `RUST_LOG` directives are honored in addition to the `reservo=<level>`
/// directive added here. Calling this more than once is harmless; only the
/// first call installs a subscriber.
pub fn init_with_level(level: Level) {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("reservo={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize the tracing subscriber from a level name such as `"debug"`.
///
/// Unknown names fall back to INFO.
pub fn init_with_str(level: &str) {
    match level.parse::<Level>() {
        Ok(level) => init_with_level(level),
        Err(_) => {
            init_with_level(Level::INFO);
            warn!("Unknown log level '{}', using INFO", level);
        }
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Returns the original result so it can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_does_not_panic() {
        init_with_str("debug");
        init_with_str("not-a-level");
        init();
    }

    #[test]
    fn test_log_result_passes_value_through() {
        let ok: Result<u32, String> = Ok(7);
        assert_eq!(log_result(ok, "loaded", "failed").unwrap(), 7);

        let err: Result<u32, String> = Err("broken".to_string());
        assert_eq!(log_result(err, "loaded", "failed").unwrap_err(), "broken");
    }
}
