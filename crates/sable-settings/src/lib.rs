//! # sable-settings
//!
//! Configuration for the sable event queue.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`SableSettings::default()`]
//! 2. **User file**: `~/.sable/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `SABLE_*` overrides (highest priority)

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{LoggingSettings, QueueSettings, SableSettings};

use std::sync::OnceLock;

static SETTINGS: OnceLock<SableSettings> = OnceLock::new();

/// Get the global settings instance.
///
/// On first call, loads settings from `~/.sable/settings.json` with env var
/// overrides. If loading fails, logs the error and returns compiled defaults.
pub fn get_settings() -> &'static SableSettings {
    SETTINGS.get_or_init(|| {
        load_settings().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load settings, using defaults");
            SableSettings::default()
        })
    })
}

/// Install the global `tracing` subscriber described by `settings`.
///
/// `RUST_LOG` takes precedence over `settings.level`.
pub fn init_logging(settings: &LoggingSettings) {
    if settings.json {
        sable_core::logging::init_subscriber_json(&settings.level);
    } else {
        sable_core::logging::init_subscriber(&settings.level);
    }
}

/// Initialize the global settings with a specific value.
///
/// Returns the settings back if the global was already initialized.
pub fn init_settings(settings: SableSettings) -> std::result::Result<(), SableSettings> {
    SETTINGS.set(settings)
}
