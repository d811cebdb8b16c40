//! Runtime configuration for notifications and logging.
//!
//! # Responsibility
//! - Provide defaults for notification presentation (label, duration).
//! - Resolve logging settings from the process environment.
//!
//! # Invariants
//! - Missing settings always fall back to documented defaults.
//! - Reading configuration never panics.

use serde::{Deserialize, Serialize};

/// Default notification display time in milliseconds.
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;
/// Default label of the notification dismiss action.
pub const DEFAULT_DISMISS_LABEL: &str = "Accept";

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "SOCIOS_LOG_LEVEL";
/// Environment variable holding the absolute log directory.
pub const LOG_DIR_ENV: &str = "SOCIOS_LOG_DIR";

/// Presentation settings applied to every emitted notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub dismiss_label: String,
    pub duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            dismiss_label: DEFAULT_DISMISS_LABEL.to_string(),
            duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
        }
    }
}

/// Logging settings for `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// One of `trace|debug|info|warn|error`.
    pub level: String,
    /// Absolute directory for rolling log files.
    pub log_dir: String,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            log_dir: log_dir.into(),
        }
    }

    /// Reads `SOCIOS_LOG_LEVEL` and `SOCIOS_LOG_DIR`.
    ///
    /// Returns `None` when no log directory is configured, meaning file
    /// logging stays disabled.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let log_dir = lookup(LOG_DIR_ENV).filter(|value| !value.trim().is_empty())?;
        let level = lookup(LOG_LEVEL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| default_log_level().to_string());
        Some(Self { level, log_dir })
    }
}

/// Returns the default log level for current build mode.
///
/// - `debug` builds -> `debug`
/// - `release` builds -> `info`
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::{default_log_level, LoggingConfig, NotificationConfig, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn notification_defaults_match_snackbar_settings() {
        let config = NotificationConfig::default();
        assert_eq!(config.duration_ms, 5000);
        assert_eq!(config.dismiss_label, "Accept");
    }

    #[test]
    fn logging_disabled_without_directory() {
        assert_eq!(LoggingConfig::from_lookup(lookup_from(&[])), None);
        assert_eq!(
            LoggingConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "  ")])),
            None
        );
    }

    #[test]
    fn logging_level_falls_back_to_build_default() {
        let config = LoggingConfig::from_lookup(lookup_from(&[(LOG_DIR_ENV, "/tmp/socios")]))
            .expect("dir is set");
        assert_eq!(config.level, default_log_level());

        let config = LoggingConfig::from_lookup(lookup_from(&[
            (LOG_DIR_ENV, "/tmp/socios"),
            (LOG_LEVEL_ENV, "warn"),
        ]))
        .expect("dir is set");
        assert_eq!(config.level, "warn");
    }
}
