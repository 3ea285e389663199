//! Structured tracing hooks for resource lifecycle events.
//!
//! Events carry an `event` field (`resource.created`,
//! `resource.validation_failed`, `resource.origin_set`) plus the resource
//! kind and name. Verbosity is controlled by the subscriber installed with
//! [`crate::telemetry::init_tracing`].

use tracing::{debug, warn};

/// RAII guard that enters a resource-scoped span.
///
/// ```ignore
/// let _span = ResourceSpan::enter("connection_diagnostic", "diag-1");
/// ```
pub struct ResourceSpan {
    _span: tracing::span::EnteredSpan,
}

impl ResourceSpan {
    pub fn enter(kind: &str, name: &str) -> Self {
        let span = tracing::info_span!("portcullis.resource", kind = %kind, name = %name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Emit event: a resource passed validation.
pub fn emit_resource_created(kind: &str, name: &str) {
    debug!(event = "resource.created", kind = %kind, name = %name);
}

/// Emit event: a resource failed validation (warning level).
pub fn emit_validation_failed(kind: &str, name: &str, error: &dyn std::fmt::Display) {
    warn!(
        event = "resource.validation_failed",
        kind = %kind,
        name = %name,
        error = %error,
    );
}

/// Emit event: the origin label of a resource changed.
pub fn emit_origin_set(kind: &str, name: &str, origin: &str) {
    debug!(event = "resource.origin_set", kind = %kind, name = %name, origin = %origin);
}
