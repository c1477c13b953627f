//! Known system metadata field set
//!
//! Membership is an opt-in check for callers. Nothing in the codec calls it.

use std::collections::BTreeSet;

use crate::errors::{DocumentError, DocumentResult};

use super::ingest::IngestDocument;

/// System metadata field names known to the ingest pipeline by default
pub const DEFAULT_SYSTEM_FIELDS: [&str; 7] = [
    "_index",
    "_type",
    "_id",
    "_routing",
    "_parent",
    "_timestamp",
    "_ttl",
];

/// The set of field names allowed in a document's system metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFields {
    names: BTreeSet<String>,
}

impl SystemFields {
    /// Builds a set from the given names
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Field names in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Checks that every system metadata key is a known field.
    ///
    /// Unknown keys are reported in ascending order so the error is the same
    /// for equal documents.
    pub fn validate(&self, document: &IngestDocument) -> DocumentResult<()> {
        let mut unknown: Vec<&str> = document
            .system_metadata()
            .keys()
            .map(String::as_str)
            .filter(|name| !self.contains(name))
            .collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort_unstable();
        Err(DocumentError::invalid_argument(format!(
            "Unknown system metadata field(s): {}",
            unknown.join(", ")
        )))
    }
}

impl Default for SystemFields {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_FIELDS)
    }
}
