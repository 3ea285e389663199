//! Capability traits shared by all resource kinds.
//!
//! A resource kind embeds a [`ResourceHeader`] and implements [`HasHeader`].
//! That is enough to get [`Identifiable`] for free. The header is only ever
//! lent out read-only, so name, kind and version cannot change after
//! construction. [`Labeled`] needs one more method, [`Labeled::static_labels_mut`],
//! since labels are the only mutable part of the header; a kind overrides
//! [`Labeled::dynamic_labels`] when it actually has dynamic labels.
//!
//! Resources are plain values with no internal locking. A store that shares
//! one between threads must serialize writers itself.

use crate::constants::{Version, ORIGIN_LABEL};
use crate::header::{Labels, Metadata, ResourceHeader};
use crate::labels::{combine_labels, label_values, DynamicLabels};
use crate::obs;
use crate::search;

/// Read-only access to the embedded header.
pub trait HasHeader {
    fn header(&self) -> &ResourceHeader;
}

/// Name, kind and version of a resource.
pub trait Identifiable {
    fn name(&self) -> &str;
    fn kind(&self) -> &str;
    fn version(&self) -> Version;
    fn metadata(&self) -> &Metadata;
}

impl<T: HasHeader> Identifiable for T {
    fn name(&self) -> &str {
        &self.header().metadata.name
    }

    fn kind(&self) -> &str {
        &self.header().kind
    }

    fn version(&self) -> Version {
        self.header().version
    }

    fn metadata(&self) -> &Metadata {
        &self.header().metadata
    }
}

/// Static labels, dynamic labels and the origin marker.
pub trait Labeled: HasHeader {
    /// Dynamic labels, computed on every call. Empty unless overridden.
    fn dynamic_labels(&self) -> DynamicLabels {
        DynamicLabels::new()
    }

    /// Static labels merged with dynamic label results.
    ///
    /// Returns a fresh map; dynamic values win on key collision.
    fn all_labels(&self) -> Labels {
        combine_labels(self.static_labels(), &self.dynamic_labels())
    }

    /// Borrowed view of the stored static labels.
    fn static_labels(&self) -> &Labels {
        &self.header().metadata.labels
    }

    /// Mutable alias of the stored static labels. Changes made through it
    /// are changes to the resource.
    fn static_labels_mut(&mut self) -> &mut Labels;

    /// Replace the whole static label set.
    fn set_static_labels(&mut self, labels: Labels) {
        *self.static_labels_mut() = labels;
    }

    /// Value of the origin label, or `""` when unset.
    fn origin(&self) -> &str {
        self.static_labels()
            .get(ORIGIN_LABEL)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set the origin label, overwriting any previous value.
    fn set_origin(&mut self, origin: &str) {
        self.static_labels_mut()
            .insert(ORIGIN_LABEL.to_string(), origin.to_string());
        let header = self.header();
        obs::emit_origin_set(&header.kind, &header.metadata.name, origin);
    }
}

/// Free-text search over label values and the resource name.
pub trait Searchable: Identifiable + Labeled {
    /// Values a search term may hit: every label value, then the name.
    fn search_fields(&self) -> Vec<String> {
        let mut fields = label_values(&self.all_labels());
        fields.push(self.name().to_string());
        fields
    }

    /// True if every term matches at least one search field.
    fn match_search(&self, terms: &[String]) -> bool {
        search::match_search(&self.search_fields(), terms, None)
    }
}

/// Everything a labeled resource kind provides.
pub trait ResourceWithLabels: Identifiable + Labeled + Searchable {}

impl<T: Identifiable + Labeled + Searchable> ResourceWithLabels for T {}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::labels::CommandLabel;

    /// A resource kind with one dynamic label.
    struct Node {
        header: ResourceHeader,
        hostname: String,
    }

    impl HasHeader for Node {
        fn header(&self) -> &ResourceHeader {
            &self.header
        }
    }

    impl Labeled for Node {
        fn static_labels_mut(&mut self) -> &mut Labels {
            &mut self.header.metadata.labels
        }

        fn dynamic_labels(&self) -> DynamicLabels {
            let mut dynamic = DynamicLabels::new();
            dynamic.insert(
                "hostname".to_string(),
                CommandLabel::new(vec!["hostname".into()], Duration::from_secs(60))
                    .with_result(self.hostname.clone()),
            );
            dynamic
        }
    }

    impl Searchable for Node {}

    fn node(labels: &[(&str, &str)], hostname: &str) -> Node {
        let labels = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Node {
            header: ResourceHeader::new("node", "node-1", labels),
            hostname: hostname.to_string(),
        }
    }

    fn is_resource<R: ResourceWithLabels>(_: &R) -> bool {
        true
    }

    #[test]
    fn test_identifiable_from_header() {
        let n = node(&[], "host-a");
        assert_eq!(n.name(), "node-1");
        assert_eq!(n.kind(), "node");
        assert_eq!(n.version(), Version::V1);
        assert_eq!(n.metadata().name, "node-1");
        assert!(is_resource(&n));
    }

    #[test]
    fn test_all_labels_includes_dynamic() {
        let n = node(&[("env", "prod"), ("hostname", "stale")], "host-a");
        let all = n.all_labels();
        assert_eq!(all["env"], "prod");
        assert_eq!(all["hostname"], "host-a");
        assert_eq!(n.static_labels()["hostname"], "stale");
    }

    #[test]
    fn test_dynamic_labels_computed_per_call() {
        let mut n = node(&[], "host-a");
        assert_eq!(n.all_labels()["hostname"], "host-a");
        n.hostname = "host-b".to_string();
        assert_eq!(n.all_labels()["hostname"], "host-b");
    }

    #[test]
    fn test_search_hits_dynamic_values() {
        let n = node(&[("env", "prod")], "host-a");
        assert!(n.match_search(&["host-a".to_string()]));
        assert!(n.match_search(&["node-1".to_string(), "prod".to_string()]));
        assert!(!n.match_search(&["host-b".to_string()]));
    }

    #[test]
    fn test_static_labels_mut_aliases_resource() {
        let mut n = node(&[], "host-a");
        n.static_labels_mut()
            .insert("team".to_string(), "net".to_string());
        assert_eq!(n.static_labels()["team"], "net");
    }

    #[test]
    fn test_origin_default_and_overwrite() {
        let mut n = node(&[], "host-a");
        assert_eq!(n.origin(), "");
        n.set_origin("cloud");
        assert_eq!(n.origin(), "cloud");
        n.set_origin("dynamic");
        assert_eq!(n.origin(), "dynamic");
        assert_eq!(n.static_labels()[ORIGIN_LABEL], "dynamic");
    }
}
