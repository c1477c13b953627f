//! JSON form of an ingest document
//!
//! ```json
//! {
//!   "system_metadata": {"_index": "logs", "_id": "1"},
//!   "payload": {"message": "hello", "tags": ["a", "b"]},
//!   "local_metadata": {"timestamp": "2016-01-01T00:00:00Z"}
//! }
//! ```
//!
//! Missing sections default to empty. Metadata values must be strings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::value::Value;

use super::ingest::IngestDocument;

/// Serde representation of an [`IngestDocument`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentJson {
    #[serde(default)]
    pub system_metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub payload: Map<String, JsonValue>,
    #[serde(default)]
    pub local_metadata: BTreeMap<String, String>,
}

impl From<DocumentJson> for IngestDocument {
    fn from(json: DocumentJson) -> Self {
        IngestDocument::new(
            json.system_metadata,
            json.payload.into_iter().map(|(k, v)| (k, Value::from(v))),
            json.local_metadata,
        )
    }
}

impl From<&IngestDocument> for DocumentJson {
    fn from(document: &IngestDocument) -> Self {
        Self {
            system_metadata: sorted(document.system_metadata().iter()),
            payload: document
                .payload()
                .iter()
                .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                .collect(),
            local_metadata: sorted(document.local_metadata().iter()),
        }
    }
}

fn sorted<'a>(entries: impl Iterator<Item = (&'a String, &'a String)>) -> BTreeMap<String, String> {
    entries.map(|(k, v)| (k.clone(), v.clone())).collect()
}
