//! Logging configuration read from the environment.
//!
//! Environment variables:
//! - `PORTCULLIS_LOG_FORMAT` (optional): `json` for JSON lines, anything else for text
//! - `PORTCULLIS_LOG_LEVEL` (optional, default: `info`): `trace`, `debug`, `info`, `warn` or `error`

use std::str::FromStr;

use tracing::Level;

pub const LOG_FORMAT_ENV: &str = "PORTCULLIS_LOG_FORMAT";
pub const LOG_LEVEL_ENV: &str = "PORTCULLIS_LOG_LEVEL";

/// Log output settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub json: bool,
    pub level: Level,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            json: false,
            level: Level::INFO,
        }
    }
}

impl LogConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`. Unparseable levels fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let json = lookup(LOG_FORMAT_ENV)
            .map(|v| v.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.json);
        let level = lookup(LOG_LEVEL_ENV)
            .and_then(|v| Level::from_str(v.trim()).ok())
            .unwrap_or(defaults.level);
        Self { json, level }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_overrides(mut self, json: bool, verbose: bool) -> Self {
        if json {
            self.json = true;
        }
        if verbose {
            self.level = Level::DEBUG;
        }
        self
    }
}
