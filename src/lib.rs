//! ingestdoc - ingest document value model and binary wire format
//!
//! A document travels through an ingest pipeline as three sections: system
//! metadata, payload and local metadata. [`document::WriteableDocument`]
//! gives it structural equality, a consistent hash and a deterministic
//! encoding so it can be shipped between nodes.

pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod observability;
pub mod stream;
pub mod value;
