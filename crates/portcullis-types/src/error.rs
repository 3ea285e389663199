//! Error types for resource construction and validation.

use thiserror::Error;

/// Errors produced by resource types.
#[derive(Error, Debug)]
pub enum TypesError {
    /// A caller-supplied field failed validation.
    #[error("bad parameter: {0}")]
    BadParameter(String),

    /// A resource document could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TypesError {
    /// Shorthand for [`TypesError::BadParameter`].
    pub fn bad_parameter(message: impl Into<String>) -> Self {
        Self::BadParameter(message.into())
    }

    /// Returns true for the bad-parameter class of errors.
    pub fn is_bad_parameter(&self) -> bool {
        matches!(self, Self::BadParameter(_))
    }
}

/// Result type for resource operations.
pub type Result<T> = std::result::Result<T, TypesError>;
