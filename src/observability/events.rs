//! Observable events
//!
//! Events are explicit and typed. Each carries a default severity.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded
    ConfigLoaded,
    /// A document was written to a sink
    DocumentEncoded,
    /// A document was read from a source
    DocumentDecoded,
    /// A byte stream was rejected as malformed
    DecodeRejected,
    /// System metadata failed the known-field check
    MetadataRejected,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DocumentEncoded => "DOCUMENT_ENCODED",
            Event::DocumentDecoded => "DOCUMENT_DECODED",
            Event::DecodeRejected => "DECODE_REJECTED",
            Event::MetadataRejected => "METADATA_REJECTED",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::ConfigLoaded => Severity::Info,
            Event::DocumentEncoded | Event::DocumentDecoded => Severity::Trace,
            Event::DecodeRejected | Event::MetadataRejected => Severity::Warn,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
