//! Connection diagnostic resource: the outcome of a connectivity test.

use serde::{Deserialize, Serialize};

use crate::constants::KIND_CONNECTION_DIAGNOSTIC;
use crate::error::{Result, TypesError};
use crate::header::{Labels, ResourceHeader};
use crate::obs;
use crate::resource::{HasHeader, Labeled, Searchable};

/// Kind-specific payload of a connection diagnostic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionDiagnosticSpec {
    /// Whether the connection succeeded.
    #[serde(default)]
    pub success: bool,

    /// Human-readable explanation. Never empty on a validated resource.
    pub message: String,
}

impl ConnectionDiagnosticSpec {
    pub fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// A connection diagnostic resource.
///
/// Build it with [`ConnectionDiagnostic::new`]. A value obtained any other
/// way (e.g. deserialized from a store) must pass
/// [`ConnectionDiagnostic::check_and_set_defaults`] before use.
///
/// The payload is private; the message only changes through
/// [`ConnectionDiagnostic::set_message`]:
///
/// ```compile_fail
/// use portcullis_types::{ConnectionDiagnostic, ConnectionDiagnosticSpec};
///
/// let mut diag =
///     ConnectionDiagnostic::new("diag-1", None, ConnectionDiagnosticSpec::new(true, "ok"))?;
/// diag.spec.message.clear();
/// # Ok::<(), portcullis_types::TypesError>(())
/// ```
///
/// Nor can the name be rewritten through the header:
///
/// ```compile_fail
/// use portcullis_types::{ConnectionDiagnostic, ConnectionDiagnosticSpec};
///
/// let mut diag =
///     ConnectionDiagnostic::new("diag-1", None, ConnectionDiagnosticSpec::new(true, "ok"))?;
/// diag.header.metadata.name = "renamed".to_string();
/// # Ok::<(), portcullis_types::TypesError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionDiagnostic {
    #[serde(flatten)]
    header: ResourceHeader,
    spec: ConnectionDiagnosticSpec,
}

/// A list of connection diagnostics.
pub type ConnectionDiagnostics = Vec<ConnectionDiagnostic>;

impl ConnectionDiagnostic {
    /// Create a validated connection diagnostic.
    ///
    /// Missing labels are treated as an empty set. Fails with
    /// [`TypesError::BadParameter`] when `spec.message` is empty.
    pub fn new(
        name: impl Into<String>,
        labels: Option<Labels>,
        spec: ConnectionDiagnosticSpec,
    ) -> Result<Self> {
        let diagnostic = Self {
            header: ResourceHeader::new(
                KIND_CONNECTION_DIAGNOSTIC,
                name,
                labels.unwrap_or_default(),
            ),
            spec,
        };

        if let Err(err) = diagnostic.check_and_set_defaults() {
            obs::emit_validation_failed(
                &diagnostic.header.kind,
                &diagnostic.header.metadata.name,
                &err,
            );
            return Err(err);
        }

        obs::emit_resource_created(&diagnostic.header.kind, &diagnostic.header.metadata.name);
        Ok(diagnostic)
    }

    /// Check required fields.
    ///
    /// Only the message is validated. Name and label shape are left to the
    /// store.
    pub fn check_and_set_defaults(&self) -> Result<()> {
        if self.spec.message.is_empty() {
            return Err(missing_message());
        }
        Ok(())
    }

    pub fn is_success(&self) -> bool {
        self.spec.success
    }

    pub fn message(&self) -> &str {
        &self.spec.message
    }

    pub fn spec(&self) -> &ConnectionDiagnosticSpec {
        &self.spec
    }

    pub fn set_success(&mut self, success: bool) {
        self.spec.success = success;
    }

    /// Replace the message. An empty message is rejected and the stored
    /// message is kept.
    pub fn set_message(&mut self, message: impl Into<String>) -> Result<()> {
        let message = message.into();
        if message.is_empty() {
            return Err(missing_message());
        }
        self.spec.message = message;
        Ok(())
    }
}

fn missing_message() -> TypesError {
    TypesError::bad_parameter("ConnectionDiagnosticV1.Spec missing Message field")
}

impl HasHeader for ConnectionDiagnostic {
    fn header(&self) -> &ResourceHeader {
        &self.header
    }
}

// No dynamic labels: all labels are the static ones.
impl Labeled for ConnectionDiagnostic {
    fn static_labels_mut(&mut self) -> &mut Labels {
        &mut self.header.metadata.labels
    }
}

impl Searchable for ConnectionDiagnostic {}
