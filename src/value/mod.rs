//! Value model for document payloads
//!
//! A payload node is one of seven variants: absent, boolean, integer,
//! float, text, list, map. Each variant has a one-byte wire tag, equality is
//! structural, and hashing agrees with equality (maps are hashed
//! independently of their iteration order).

pub mod codec;
mod convert;
mod hash;
mod model;

pub use codec::{read_value, value_from_bytes, value_to_bytes, write_value};
pub use hash::{deterministic_hash, unordered_entries_hash};
pub use model::{Value, ValueMap, ValueTag};
