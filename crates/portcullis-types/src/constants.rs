//! Shared constants for resource versions, kinds and origins.

use serde::{Deserialize, Serialize};

/// Schema version of a resource.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    #[default]
    V1,
}

impl Version {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a connection diagnostic resource.
pub const KIND_CONNECTION_DIAGNOSTIC: &str = "connection_diagnostic";

/// Reserved label recording how a resource came to exist.
pub const ORIGIN_LABEL: &str = "portcullis.dev/origin";

/// Resource was created from built-in defaults.
pub const ORIGIN_DEFAULTS: &str = "defaults";

/// Resource was created from a static configuration file.
pub const ORIGIN_CONFIG_FILE: &str = "config-file";

/// Resource was created through the API at runtime.
pub const ORIGIN_DYNAMIC: &str = "dynamic";

/// Resource was imported from a cloud provider.
pub const ORIGIN_CLOUD: &str = "cloud";

/// All well-known origin values.
pub const ORIGIN_VALUES: &[&str] = &[
    ORIGIN_DEFAULTS,
    ORIGIN_CONFIG_FILE,
    ORIGIN_DYNAMIC,
    ORIGIN_CLOUD,
];

/// Returns true if `value` is one of [`ORIGIN_VALUES`].
///
/// Setting an origin never checks this; stores that want to reject
/// unknown origins call it themselves.
pub fn is_known_origin(value: &str) -> bool {
    ORIGIN_VALUES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_serializes_lowercase() {
        let json = serde_json::to_string(&Version::V1).expect("serialize");
        assert_eq!(json, "\"v1\"");
        assert_eq!(Version::V1.to_string(), "v1");
    }

    #[test]
    fn test_unknown_version_rejected() {
        let result = serde_json::from_str::<Version>("\"v9\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_known_origins() {
        assert!(is_known_origin(ORIGIN_CLOUD));
        assert!(is_known_origin("config-file"));
        assert!(!is_known_origin(""));
        assert!(!is_known_origin("manual"));
    }
}
