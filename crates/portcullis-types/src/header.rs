//! Resource header shared by every resource kind.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::Version;

/// Static label set. Keys are unique and iterate in sorted order.
pub type Labels = BTreeMap<String, String>;

/// Identity and tagging metadata of a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metadata {
    /// Name, unique within the resource kind. Uniqueness is enforced by the store.
    pub name: String,

    #[serde(default)]
    pub labels: Labels,
}

/// Version, kind and metadata block embedded in every resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceHeader {
    pub version: Version,
    pub kind: String,
    pub metadata: Metadata,
}

impl ResourceHeader {
    /// Build a `V1` header.
    pub fn new(kind: impl Into<String>, name: impl Into<String>, labels: Labels) -> Self {
        Self {
            version: Version::V1,
            kind: kind.into(),
            metadata: Metadata {
                name: name.into(),
                labels,
            },
        }
    }
}
