//! Observability for ingestdoc
//!
//! Structured logging of typed events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on encoding or decoding
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use ingestdoc::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Trace);
//! log_event_with_fields(Event::DocumentEncoded, &[("bytes", "128")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Returns true if `event` would be written at the current minimum severity.
///
/// Lets callers skip building fields for filtered events.
pub fn event_enabled(event: Event) -> bool {
    Logger::enabled(event.severity())
}

/// Log a typed event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
