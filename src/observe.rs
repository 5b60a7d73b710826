//! Logging setup
//!
//! Structured logging via the `tracing` ecosystem. The synthesis path emits
//! `debug!`/`trace!` events; binaries and tests that want to see them call
//! [`init_logging`] once at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use raychan::observe::{init_logging, LogConfig, LogLevel};
//!
//! init_logging(&LogConfig {
//!     level: LogLevel::Debug,
//!     ..Default::default()
//! });
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log level threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        f.write_str(s)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level threshold when no filter is given.
    pub level: LogLevel,
    /// Explicit filter directives (e.g. `"raychan=trace"`); overrides
    /// `level` and the `RUST_LOG` environment variable.
    pub filter: Option<String>,
    /// One event per line without targets and timestamps.
    pub compact: bool,
}

/// Initialize the global logging subscriber.
///
/// `RUST_LOG` takes precedence over `config.level` unless an explicit
/// `config.filter` is set. Calling this more than once is harmless; later
/// calls are ignored.
pub fn init_logging(config: &LogConfig) {
    let filter = match &config.filter {
        Some(directives) => EnvFilter::try_new(directives)
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string())),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.to_string())),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.compact {
        builder.compact().without_time().with_target(false).try_init()
    } else {
        builder.try_init()
    };
    // A subscriber set elsewhere wins; nothing to do about it here.
    let _ = result;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, LogLevel::Info);
        assert!(config.filter.is_none());
        assert!(!config.compact);
    }

    #[test]
    fn test_config_serde() {
        let json = r#"{"level":"debug","filter":"raychan=trace","compact":true}"#;
        let config: LogConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.filter.as_deref(), Some("raychan=trace"));
        assert!(config.compact);
    }

    #[test]
    fn test_init_idempotent() {
        init_logging(&LogConfig::default());
        init_logging(&LogConfig {
            level: LogLevel::Trace,
            ..Default::default()
        });
    }
}
