use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Business-rule anomalies collected across one run: value sets skipped for
/// missing or out-of-package metadata, and code-system OIDs with no URL
/// mapping. Owned by the run that accumulates it and passed down by mutable
/// reference; the sets deduplicate and keep lexicographic order so the
/// report files are stable across reruns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnomalyLog {
    pub unknown_names: BTreeSet<String>,
    pub unknown_oids: BTreeSet<String>,
}

impl AnomalyLog {
    pub fn record_unknown_name(&mut self, name: &str) {
        self.unknown_names.insert(name.to_string());
    }

    pub fn record_unknown_oid(&mut self, oid: &str) {
        self.unknown_oids.insert(oid.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.unknown_names.is_empty() && self.unknown_oids.is_empty()
    }
}
