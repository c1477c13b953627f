//! Comparable, hashable, serializable document wrapper
//!
//! Wire layout, sections in fixed order:
//!
//! ```text
//! +------------------+
//! | System Metadata  | (Map-tagged value, Text-tagged values)
//! +------------------+
//! | Payload          | (Map-tagged value, any values)
//! +------------------+
//! | Local Metadata   | (Map-tagged value, Text-tagged values)
//! +------------------+
//! ```
//!
//! There is no version byte and no checksum; integrity belongs to the
//! transport that carries the bytes.

use std::io::{Read, Write};
use std::sync::Arc;

use crate::errors::{DocumentError, DocumentResult};
use crate::observability::{event_enabled, log_event_with_fields, Event};
use crate::stream::{DecodeLimits, StreamInput, StreamOutput};
use crate::value::codec::{expect_tag, read_map_body, read_text, write_map_body, write_text};
use crate::value::{read_value, write_value, Value, ValueTag};

use super::ingest::{IngestDocument, MetadataMap};

/// An [`IngestDocument`] that can be compared, hashed and sent over the wire.
///
/// `decode(encode(d)) == d` holds for every document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WriteableDocument {
    document: IngestDocument,
}

impl WriteableDocument {
    /// Wraps an existing document
    pub fn new(document: IngestDocument) -> Self {
        Self { document }
    }

    /// Builds and wraps a document from its three sections.
    ///
    /// No validation is performed; see [`super::SystemFields`] for the
    /// opt-in system field check.
    pub fn wrap(
        system_metadata: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
        payload: impl IntoIterator<Item = (impl Into<String>, impl Into<Value>)>,
        local_metadata: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self::new(IngestDocument::new(
            system_metadata,
            payload,
            local_metadata,
        ))
    }

    /// Returns the wrapped document
    pub fn document(&self) -> &IngestDocument {
        &self.document
    }

    /// Unwraps the document
    pub fn into_document(self) -> IngestDocument {
        self.document
    }

    /// Deterministic hash, consistent with `==`
    pub fn hash_code(&self) -> u64 {
        self.document.hash_code()
    }

    /// Encodes the document into `out`.
    ///
    /// Fails only if the sink fails; the error carries the I/O source.
    pub fn write_to<W: Write>(&self, out: &mut StreamOutput<W>) -> DocumentResult<()> {
        let start = out.bytes_written();

        write_metadata_section(out, self.document.system_metadata())?;
        out.write_u8(ValueTag::Map.as_u8())?;
        write_map_body(out, self.document.payload(), write_value)?;
        write_metadata_section(out, self.document.local_metadata())?;

        if event_enabled(Event::DocumentEncoded) {
            let written = (out.bytes_written() - start).to_string();
            log_event_with_fields(Event::DocumentEncoded, &[("bytes", written.as_str())]);
        }
        Ok(())
    }

    /// Encodes the document into a fresh buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = StreamOutput::new(Vec::new());
        self.write_to(&mut out).expect("Vec write cannot fail");
        out.into_inner()
    }

    /// Decodes one document, leaving the cursor right after it.
    ///
    /// Nothing is returned unless all three sections decode.
    pub fn read_from(input: &mut StreamInput<'_>) -> DocumentResult<Self> {
        let start = input.position();
        match read_sections(input) {
            Ok(document) => {
                if event_enabled(Event::DocumentDecoded) {
                    let read = (input.position() - start).to_string();
                    log_event_with_fields(Event::DocumentDecoded, &[("bytes", read.as_str())]);
                }
                Ok(Self::new(document))
            }
            Err(err) => {
                log_rejection(&err);
                Err(err)
            }
        }
    }

    /// Decodes a document that must span all of `data`
    pub fn from_bytes(data: &[u8]) -> DocumentResult<Self> {
        Self::from_bytes_with_limits(data, DecodeLimits::default())
    }

    /// Decodes a document that must span all of `data`, with explicit limits
    pub fn from_bytes_with_limits(data: &[u8], limits: DecodeLimits) -> DocumentResult<Self> {
        let mut input = StreamInput::with_limits(data, limits);
        let document = Self::read_from(&mut input)?;
        if !input.is_empty() {
            let err = DocumentError::malformed_at_offset(
                input.position(),
                format!("{} trailing bytes after document", input.remaining()),
            );
            log_rejection(&err);
            return Err(err);
        }
        Ok(document)
    }

    /// Reads `reader` to the end and decodes a single document from it
    pub fn read_from_reader<R: Read>(mut reader: R, limits: DecodeLimits) -> DocumentResult<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| DocumentError::stream_io("Failed to read document source", e))?;
        Self::from_bytes_with_limits(&data, limits)
    }
}

impl From<IngestDocument> for WriteableDocument {
    fn from(document: IngestDocument) -> Self {
        Self::new(document)
    }
}

impl From<WriteableDocument> for IngestDocument {
    fn from(writeable: WriteableDocument) -> Self {
        writeable.document
    }
}

fn write_metadata_section<W: Write>(
    out: &mut StreamOutput<W>,
    section: &MetadataMap,
) -> DocumentResult<()> {
    out.write_u8(ValueTag::Map.as_u8())?;
    write_map_body(out, section, |out, value: &String| write_text(out, value))
}

fn read_sections(input: &mut StreamInput<'_>) -> DocumentResult<IngestDocument> {
    let system_metadata = read_metadata_section(input)?;

    expect_tag(input, ValueTag::Map)?;
    let payload = read_map_body(input, read_value)?;

    let local_metadata = read_metadata_section(input)?;

    Ok(IngestDocument::from_shared(
        Arc::new(system_metadata),
        Arc::new(payload),
        Arc::new(local_metadata),
    ))
}

fn read_metadata_section(input: &mut StreamInput<'_>) -> DocumentResult<MetadataMap> {
    expect_tag(input, ValueTag::Map)?;
    read_map_body(input, read_text)
}

fn log_rejection(err: &DocumentError) {
    log_event_with_fields(
        Event::DecodeRejected,
        &[
            ("code", err.code().code()),
            ("details", err.details().unwrap_or("")),
            ("reason", err.message()),
        ],
    );
}
