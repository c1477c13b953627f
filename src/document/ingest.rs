//! The three-section ingest document

use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::value::{deterministic_hash, unordered_entries_hash, Value, ValueMap};

/// String-to-string metadata section
pub type MetadataMap = HashMap<String, String>;

/// A document as handed over by the ingest pipeline.
///
/// Holds exactly three sections:
/// - system metadata: identity/context fields (`_index`, `_id`, ...)
/// - payload: the free-form document body
/// - local metadata: fields attached by pipeline steps
///
/// Sections sit behind `Arc` and are never mutated here. A document built
/// with [`IngestDocument::new`] owns a snapshot of the entries it was given;
/// one built with [`IngestDocument::from_shared`] shares the caller's
/// handles without copying. Either way later caller-side changes cannot be
/// observed, because a shared `Arc` gives no mutable access.
///
/// Equality is order-independent per section and ignores which container
/// type the entries came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestDocument {
    system_metadata: Arc<MetadataMap>,
    payload: Arc<ValueMap>,
    local_metadata: Arc<MetadataMap>,
}

impl IngestDocument {
    /// Builds a document from any iterables of entries.
    ///
    /// Accepts `HashMap`, `BTreeMap`, vectors of pairs, and so on.
    /// Duplicate keys resolve to the last entry, as with `collect()`.
    pub fn new(
        system_metadata: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
        payload: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
        local_metadata: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            system_metadata: Arc::new(collect_metadata(system_metadata)),
            payload: Arc::new(
                payload
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
            local_metadata: Arc::new(collect_metadata(local_metadata)),
        }
    }

    /// Builds a document that shares already-allocated sections.
    pub fn from_shared(
        system_metadata: Arc<MetadataMap>,
        payload: Arc<ValueMap>,
        local_metadata: Arc<MetadataMap>,
    ) -> Self {
        Self {
            system_metadata,
            payload,
            local_metadata,
        }
    }

    /// A document with three empty sections
    pub fn empty() -> Self {
        Self::from_shared(
            Arc::new(MetadataMap::new()),
            Arc::new(ValueMap::new()),
            Arc::new(MetadataMap::new()),
        )
    }

    pub fn system_metadata(&self) -> &MetadataMap {
        &self.system_metadata
    }

    pub fn payload(&self) -> &ValueMap {
        &self.payload
    }

    pub fn local_metadata(&self) -> &MetadataMap {
        &self.local_metadata
    }

    /// Looks up a system metadata field
    pub fn system_field(&self, name: &str) -> Option<&str> {
        self.system_metadata.get(name).map(String::as_str)
    }

    /// Looks up a local metadata field
    pub fn local_field(&self, name: &str) -> Option<&str> {
        self.local_metadata.get(name).map(String::as_str)
    }

    /// Looks up a top-level payload entry
    pub fn payload_field(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// Returns the shared section handles
    pub fn into_shared(self) -> (Arc<MetadataMap>, Arc<ValueMap>, Arc<MetadataMap>) {
        (self.system_metadata, self.payload, self.local_metadata)
    }

    /// Deterministic hash, consistent with `==`
    pub fn hash_code(&self) -> u64 {
        deterministic_hash(self)
    }
}

impl Hash for IngestDocument {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(unordered_entries_hash(self.system_metadata.iter()));
        state.write_u64(unordered_entries_hash(self.payload.iter()));
        state.write_u64(unordered_entries_hash(self.local_metadata.iter()));
    }
}

impl Default for IngestDocument {
    fn default() -> Self {
        Self::empty()
    }
}

fn collect_metadata(
    entries: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
) -> MetadataMap {
    entries
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
