//! Ingest documents and their wire form
//!
//! An [`IngestDocument`] is the three-section aggregate the ingest pipeline
//! works on. A [`WriteableDocument`] wraps one so it can be compared,
//! hashed, encoded and decoded.
//!
//! # Invariants
//!
//! - Equality is order-independent in every section
//! - `a == b` implies `a.hash_code() == b.hash_code()`
//! - `WriteableDocument::from_bytes(&d.to_bytes()) == Ok(d)` for every `d`,
//!   at any nesting depth; depth guards are opt-in via `DecodeLimits`
//! - Decoding never yields a partial document

mod fields;
mod ingest;
mod json;
mod writeable;

pub use fields::{SystemFields, DEFAULT_SYSTEM_FIELDS};
pub use ingest::{IngestDocument, MetadataMap};
pub use json::DocumentJson;
pub use writeable::WriteableDocument;
