use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::sheet::PACKAGE_INCLUDED;

/// Publication metadata for one value set, keyed by value-set name in
/// [`MvcMetadata::value_sets`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueSetMeta {
    pub title: String,
    /// Free-text description; double quotes are normalized to single quotes
    /// at load time so the text can sit inside a quoted FSH field.
    pub description: String,
    pub package: i64,
}

impl ValueSetMeta {
    /// A value set is converted only when its package flag marks it as part
    /// of the current batch.
    pub fn in_package(&self) -> bool {
        self.package == PACKAGE_INCLUDED
    }
}

/// The two lookup tables read from the metadata workbook. Built once per run
/// and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MvcMetadata {
    /// Value-set name (trimmed, case-sensitive) to its publication metadata.
    pub value_sets: BTreeMap<String, ValueSetMeta>,
    /// Code-system OID (trimmed) to canonical code-system URL.
    pub code_systems: BTreeMap<String, String>,
}

impl MvcMetadata {
    pub fn value_set(&self, name: &str) -> Option<&ValueSetMeta> {
        self.value_sets.get(name)
    }

    pub fn code_system_url(&self, oid: &str) -> Option<&str> {
        self.code_systems.get(oid).map(String::as_str)
    }

    pub fn value_set_count(&self) -> usize {
        self.value_sets.len()
    }

    pub fn code_system_count(&self) -> usize {
        self.code_systems.len()
    }
}
