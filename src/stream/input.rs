//! Byte source used by the decoders

use crate::errors::{DocumentError, DocumentResult};

use super::{DecodeLimits, MAX_VLONG_BYTES};

/// Reads wire primitives from a byte slice with cursor tracking.
///
/// Every read is bounds-checked. A read that would run past the end fails
/// with `INGEST_MALFORMED_ENCODING` at the offset where it started.
pub struct StreamInput<'a> {
    data: &'a [u8],
    pos: usize,
    limits: DecodeLimits,
    depth: usize,
}

impl<'a> StreamInput<'a> {
    /// Creates a source over the given bytes with default limits
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_limits(data, DecodeLimits::default())
    }

    /// Creates a source over the given bytes with explicit limits
    pub fn with_limits(data: &'a [u8], limits: DecodeLimits) -> Self {
        Self {
            data,
            pos: 0,
            limits,
            depth: 0,
        }
    }

    /// Current byte offset
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns true when every byte has been consumed
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Returns the limits in force
    pub fn limits(&self) -> DecodeLimits {
        self.limits
    }

    /// Takes the next `len` bytes
    pub fn read_bytes(&mut self, len: usize) -> DocumentResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(DocumentError::malformed_at_offset(
                self.pos,
                format!(
                    "Truncated stream: need {} bytes, {} remaining",
                    len,
                    self.remaining()
                ),
            ));
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.data[start..self.pos])
    }

    /// Reads a single byte
    pub fn read_u8(&mut self) -> DocumentResult<u8> {
        Ok(self.read_bytes(1)?[0])
    }

    /// Reads a boolean, accepting only `0` and `1`
    pub fn read_bool(&mut self) -> DocumentResult<bool> {
        let offset = self.pos;
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DocumentError::malformed_at_offset(
                offset,
                format!("Invalid boolean byte: {}", other),
            )),
        }
    }

    /// Reads an `i64` stored as 8 bytes little-endian
    pub fn read_i64(&mut self) -> DocumentResult<i64> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.read_bytes(8)?);
        Ok(i64::from_le_bytes(buf))
    }

    /// Reads an `f64` from its little-endian bit pattern
    pub fn read_f64(&mut self) -> DocumentResult<f64> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.read_bytes(8)?);
        Ok(f64::from_bits(u64::from_le_bytes(buf)))
    }

    /// Reads an unsigned LEB128 integer
    pub fn read_vlong(&mut self) -> DocumentResult<u64> {
        let offset = self.pos;
        let mut value: u64 = 0;
        for i in 0..MAX_VLONG_BYTES {
            let byte = self.read_u8()?;
            let group = (byte & 0x7F) as u64;
            // The tenth group only has room for the top bit of a u64
            if i == MAX_VLONG_BYTES - 1 && group > 1 {
                return Err(DocumentError::malformed_at_offset(
                    offset,
                    "VLong overflows 64 bits",
                ));
            }
            value |= group << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(DocumentError::malformed_at_offset(
            offset,
            format!("VLong longer than {} bytes", MAX_VLONG_BYTES),
        ))
    }

    /// Reads a length or count prefix.
    ///
    /// `min_item_size` is the fewest bytes one counted item can occupy; the
    /// declared count is rejected if the remaining bytes cannot hold it.
    pub fn read_length(&mut self, what: &str, min_item_size: usize) -> DocumentResult<usize> {
        let offset = self.pos;
        let declared = self.read_vlong()?;
        let available = (self.remaining() / min_item_size.max(1)) as u64;
        if declared > available {
            return Err(DocumentError::malformed_at_offset(
                offset,
                format!(
                    "Declared {} {} exceeds remaining stream ({} bytes)",
                    what,
                    declared,
                    self.remaining()
                ),
            ));
        }
        Ok(declared as usize)
    }

    /// Reads a length-prefixed UTF-8 string
    pub fn read_string(&mut self) -> DocumentResult<String> {
        let len = self.read_length("string length", 1)?;
        let offset = self.pos;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            DocumentError::malformed_at_offset(offset, format!("Invalid UTF-8: {}", e))
        })
    }

    /// Enters one level of List/Map nesting
    pub fn enter_nested(&mut self) -> DocumentResult<()> {
        if self.depth >= self.limits.max_depth {
            return Err(DocumentError::malformed_at_offset(
                self.pos,
                format!("Nesting deeper than {} levels", self.limits.max_depth),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of nesting
    pub fn leave_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
