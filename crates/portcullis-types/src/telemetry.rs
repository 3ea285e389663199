//! Centralised tracing initialisation for Portcullis binaries.
//!
//! Call [`init_tracing`] once at program start. Later calls are ignored,
//! since the global subscriber can only be set once per process.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LogConfig;

/// Initialise the global tracing subscriber.
///
/// * `json` - emit newline-delimited JSON log lines instead of text.
/// * `level` - default verbosity when `RUST_LOG` is not set.
///
/// Returns false when a global subscriber was already installed.
pub fn init_tracing(json: bool, level: Level) -> bool {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));
    let text_layer = (!json).then(|| fmt::layer().with_target(false));
    let json_layer = json.then(|| fmt::layer().with_target(false).json());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()
        .is_ok()
}

/// Initialise tracing from a [`LogConfig`].
pub fn init_tracing_from_config(config: &LogConfig) -> bool {
    init_tracing(config.json, config.level)
}
