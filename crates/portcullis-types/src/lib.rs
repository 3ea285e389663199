//! Portcullis resource types
//!
//! Defines the labeled resource contract shared by every resource kind:
//! - `ResourceHeader`: version, kind, name and static labels
//! - `Identifiable` / `Labeled` / `Searchable`: capability traits
//! - `combine_labels` / `match_search`: label merging and free-text search
//! - `ConnectionDiagnostic`: outcome of a connectivity test
//!
//! Resources validate themselves on construction. Storage, transport and
//! the diagnostics that produce resources live outside this crate.

pub mod config;
pub mod connection_diagnostic;
pub mod constants;
pub mod error;
pub mod header;
pub mod labels;
pub mod obs;
pub mod resource;
pub mod search;
pub mod telemetry;

pub use config::LogConfig;
pub use connection_diagnostic::{
    ConnectionDiagnostic, ConnectionDiagnosticSpec, ConnectionDiagnostics,
};
pub use constants::{
    is_known_origin, Version, KIND_CONNECTION_DIAGNOSTIC, ORIGIN_CLOUD, ORIGIN_CONFIG_FILE,
    ORIGIN_DEFAULTS, ORIGIN_DYNAMIC, ORIGIN_LABEL, ORIGIN_VALUES,
};
pub use error::{Result, TypesError};
pub use header::{Labels, Metadata, ResourceHeader};
pub use labels::{combine_labels, label_values, CommandLabel, DynamicLabels};
pub use obs::ResourceSpan;
pub use resource::{HasHeader, Identifiable, Labeled, ResourceWithLabels, Searchable};
pub use search::{contains_fold, filter_by_search, match_search};
pub use telemetry::{init_tracing, init_tracing_from_config};

/// Portcullis types version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
