//! Structured logging with `tracing`.
//!
//! The event core only emits `tracing` events; installing a subscriber is the
//! embedding application's decision. These helpers cover the two setups the
//! settings file can ask for:
//!
//! - [`init_subscriber`]: compact human-readable output on stderr
//! - [`init_subscriber_json`]: one JSON object per line on stderr
//!
//! `RUST_LOG` always wins over the configured level.

pub mod test_utils;

pub use test_utils::{CapturedEvent, CapturedLogs, capture_logs};

use tracing_subscriber::EnvFilter;

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber with compact stderr output.
///
/// Call once at application startup. Subsequent calls are no-ops.
pub fn init_subscriber(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // try_init fails if a global subscriber is already installed
    let _ = subscriber.try_init();
}

/// Initialize the global tracing subscriber with JSON lines on stderr.
///
/// Call once at application startup. Subsequent calls are no-ops.
pub fn init_subscriber_json(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = subscriber.try_init();
}
