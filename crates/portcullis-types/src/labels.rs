//! Static and dynamic label handling.
//!
//! Static labels are stored on the resource header. Dynamic labels are
//! produced by periodically running a command; only the last result is
//! read here. `combine_labels` merges the two, with dynamic values winning
//! on key collision.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::header::Labels;

/// A label whose value is the output of a periodically executed command.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommandLabel {
    /// Command and arguments.
    pub command: Vec<String>,

    /// How often the command is re-run.
    pub period: Duration,

    /// Output of the most recent run.
    #[serde(default)]
    pub result: String,
}

impl CommandLabel {
    pub fn new(command: Vec<String>, period: Duration) -> Self {
        Self {
            command,
            period,
            result: String::new(),
        }
    }

    pub fn with_result(mut self, result: impl Into<String>) -> Self {
        self.result = result.into();
        self
    }
}

/// Dynamic labels keyed by label name.
pub type DynamicLabels = BTreeMap<String, CommandLabel>;

/// Merge static labels with the current results of dynamic labels.
///
/// Always returns a fresh map. A key present in both sources takes the
/// dynamic result.
pub fn combine_labels(static_labels: &Labels, dynamic: &DynamicLabels) -> Labels {
    let mut combined = static_labels.clone();
    for (key, label) in dynamic {
        combined.insert(key.clone(), label.result.clone());
    }
    combined
}

/// Label values in key order.
pub fn label_values(labels: &Labels) -> Vec<String> {
    labels.values().cloned().collect()
}
