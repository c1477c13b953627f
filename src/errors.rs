//! Document error types
//!
//! Error codes:
//! - INGEST_MALFORMED_ENCODING
//! - INGEST_INVALID_ARGUMENT
//! - INGEST_STREAM_IO
//!
//! Decode failures are surfaced immediately. Nothing is retried and no
//! partially decoded value is ever handed back.

use std::fmt;
use std::io;

/// Document error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentErrorCode {
    /// Unknown tag, truncated stream, bad length, bad UTF-8,
    /// or a metadata value that is not Text
    MalformedEncoding,
    /// Section contents rejected by an opt-in check
    InvalidArgument,
    /// The byte sink or source failed
    StreamIo,
}

impl DocumentErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            DocumentErrorCode::MalformedEncoding => "INGEST_MALFORMED_ENCODING",
            DocumentErrorCode::InvalidArgument => "INGEST_INVALID_ARGUMENT",
            DocumentErrorCode::StreamIo => "INGEST_STREAM_IO",
        }
    }
}

impl fmt::Display for DocumentErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Document error with code, message and optional context
#[derive(Debug)]
pub struct DocumentError {
    /// Error code
    code: DocumentErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl DocumentError {
    /// Create a malformed encoding error with byte offset context
    pub fn malformed_at_offset(offset: usize, reason: impl Into<String>) -> Self {
        Self {
            code: DocumentErrorCode::MalformedEncoding,
            message: reason.into(),
            details: Some(format!("byte_offset: {}", offset)),
            source: None,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            code: DocumentErrorCode::InvalidArgument,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a stream I/O error wrapping the sink or source failure
    pub fn stream_io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: DocumentErrorCode::StreamIo,
            message: message.into(),
            details: None,
            source: Some(source),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> DocumentErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns additional error details
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Returns true for decode-time encoding failures
    pub fn is_malformed(&self) -> bool {
        self.code == DocumentErrorCode::MalformedEncoding
    }
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;
