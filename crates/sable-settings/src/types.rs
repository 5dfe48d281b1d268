//! Settings type definitions.
//!
//! Field names are camelCase in JSON. Every section is `#[serde(default)]`,
//! so a settings file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SettingsError};

/// Upper bound accepted for `queue.maxQueuedEvents`.
pub const MAX_QUEUED_EVENTS_LIMIT: usize = 1_000_000;

/// Upper bound accepted for `queue.waitPollIntervalMs`.
pub const WAIT_POLL_INTERVAL_LIMIT_MS: u64 = 1_000;

/// Root settings type.
///
/// ```json
/// {
///   "queue": { "maxQueuedEvents": 4096, "pumpOnPoll": false },
///   "logging": { "level": "debug" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SableSettings {
    /// Event queue behaviour.
    pub queue: QueueSettings,
    /// Log output.
    pub logging: LoggingSettings,
}

impl SableSettings {
    /// Check every range-limited value.
    pub fn validate(&self) -> Result<()> {
        self.queue.validate()
    }
}

/// Event queue behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueSettings {
    /// Pushes beyond this many queued events fail.
    pub max_queued_events: usize,
    /// Whether `poll` and `wait` pump the backend when the queue is empty.
    pub pump_on_poll: bool,
    /// Longest a blocked `wait` sleeps before pumping the backend again.
    pub wait_poll_interval_ms: u64,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            max_queued_events: 65_535,
            pump_on_poll: true,
            wait_poll_interval_ms: 10,
        }
    }
}

impl QueueSettings {
    /// Check range-limited values.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_QUEUED_EVENTS_LIMIT).contains(&self.max_queued_events) {
            return Err(SettingsError::InvalidValue(format!(
                "queue.maxQueuedEvents must be in 1..={MAX_QUEUED_EVENTS_LIMIT}, got {}",
                self.max_queued_events
            )));
        }
        if !(1..=WAIT_POLL_INTERVAL_LIMIT_MS).contains(&self.wait_poll_interval_ms) {
            return Err(SettingsError::InvalidValue(format!(
                "queue.waitPollIntervalMs must be in 1..={WAIT_POLL_INTERVAL_LIMIT_MS}, got {}",
                self.wait_poll_interval_ms
            )));
        }
        Ok(())
    }
}

/// Log output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of compact text.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = SableSettings::default();
        assert_eq!(settings.queue.max_queued_events, 65_535);
        assert!(settings.queue.pump_on_poll);
        assert_eq!(settings.queue.wait_poll_interval_ms, 10);
        assert_eq!(settings.logging.level, "warn");
        assert!(!settings.logging.json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn camel_case_wire_format() {
        let json = serde_json::to_value(SableSettings::default()).unwrap();
        assert_eq!(json["queue"]["maxQueuedEvents"], 65_535);
        assert_eq!(json["queue"]["pumpOnPoll"], true);
        assert_eq!(json["queue"]["waitPollIntervalMs"], 10);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: SableSettings =
            serde_json::from_str(r#"{"queue": {"pumpOnPoll": false}}"#).unwrap();
        assert!(!settings.queue.pump_on_poll);
        assert_eq!(settings.queue.max_queued_events, 65_535);
        assert_eq!(settings.logging, LoggingSettings::default());
    }

    #[test]
    fn validate_rejects_zero_capacity() {
        let queue = QueueSettings {
            max_queued_events: 0,
            ..QueueSettings::default()
        };
        let err = queue.validate().unwrap_err();
        assert!(err.to_string().contains("maxQueuedEvents"));
    }

    #[test]
    fn validate_rejects_long_poll_interval() {
        let queue = QueueSettings {
            wait_poll_interval_ms: 5_000,
            ..QueueSettings::default()
        };
        assert!(matches!(queue.validate(), Err(SettingsError::InvalidValue(_))));
    }
}
