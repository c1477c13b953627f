//! Byte sink used by the encoders

use std::io::Write;

use crate::errors::{DocumentError, DocumentResult};

/// Writes wire primitives to any `io::Write` sink.
///
/// The sink is owned by the caller; `StreamOutput` only borrows it for the
/// duration of an encode and reports how many bytes went through.
pub struct StreamOutput<W: Write> {
    writer: W,
    bytes_written: u64,
}

impl<W: Write> StreamOutput<W> {
    /// Wraps a sink
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bytes_written: 0,
        }
    }

    /// Total bytes written so far
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Returns the wrapped sink
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Flushes the wrapped sink
    pub fn flush(&mut self) -> DocumentResult<()> {
        self.writer
            .flush()
            .map_err(|e| DocumentError::stream_io("Failed to flush sink", e))
    }

    /// Writes raw bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) -> DocumentResult<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| DocumentError::stream_io("Failed to write to sink", e))?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Writes a single byte
    pub fn write_u8(&mut self, value: u8) -> DocumentResult<()> {
        self.write_bytes(&[value])
    }

    /// Writes a boolean as `0` or `1`
    pub fn write_bool(&mut self, value: bool) -> DocumentResult<()> {
        self.write_u8(if value { 1 } else { 0 })
    }

    /// Writes an `i64` as 8 bytes little-endian
    pub fn write_i64(&mut self, value: i64) -> DocumentResult<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Writes the IEEE-754 bit pattern of an `f64`, little-endian
    pub fn write_f64(&mut self, value: f64) -> DocumentResult<()> {
        self.write_bytes(&value.to_bits().to_le_bytes())
    }

    /// Writes an unsigned LEB128 integer
    pub fn write_vlong(&mut self, mut value: u64) -> DocumentResult<()> {
        let mut buf = [0u8; super::MAX_VLONG_BYTES];
        let mut len = 0;
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            buf[len] = byte;
            len += 1;
            if value == 0 {
                break;
            }
        }
        self.write_bytes(&buf[..len])
    }

    /// Writes a length-prefixed UTF-8 string
    pub fn write_string(&mut self, value: &str) -> DocumentResult<()> {
        self.write_vlong(value.len() as u64)?;
        self.write_bytes(value.as_bytes())
    }
}
