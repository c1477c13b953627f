//! Byte stream primitives for the document wire format
//!
//! Every multi-byte fixed-width field is little-endian. Lengths and counts
//! are VLongs: unsigned LEB128, seven bits per byte, low group first,
//! at most ten bytes.
//!
//! # Guarantees
//!
//! - Encoding never fails except when the underlying sink fails
//! - Decoding checks every declared length against the remaining bytes
//!   before allocating
//! - Decoding fails on the first malformed byte, with its offset

mod input;
mod output;

pub use input::StreamInput;
pub use output::StreamOutput;

/// Maximum number of bytes a VLong may occupy
pub const MAX_VLONG_BYTES: usize = 10;

/// Limits enforced by [`StreamInput`] while decoding.
///
/// The default is unlimited, so anything the encoder writes decodes again.
/// Callers reading untrusted bytes opt in to a depth guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Maximum List/Map nesting depth
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self::unlimited()
    }
}

impl DecodeLimits {
    /// No nesting limit
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
        }
    }

    /// Create limits with the given nesting depth
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_vlong(value: u64) -> Vec<u8> {
        let mut out = StreamOutput::new(Vec::new());
        out.write_vlong(value).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_vlong_single_byte_boundary() {
        assert_eq!(encode_vlong(0), vec![0x00]);
        assert_eq!(encode_vlong(127), vec![0x7F]);
        assert_eq!(encode_vlong(128), vec![0x80, 0x01]);
        assert_eq!(encode_vlong(300), vec![0xAC, 0x02]);
    }

    #[test]
    fn test_vlong_max_uses_ten_bytes() {
        let bytes = encode_vlong(u64::MAX);
        assert_eq!(bytes.len(), MAX_VLONG_BYTES);

        let mut input = StreamInput::new(&bytes);
        assert_eq!(input.read_vlong().unwrap(), u64::MAX);
        assert!(input.is_empty());
    }

    #[test]
    fn test_vlong_overflow_rejected() {
        // Ten continuation groups with the last one carrying more than one bit
        let mut bytes = vec![0xFF; 9];
        bytes.push(0x02);
        let mut input = StreamInput::new(&bytes);
        assert!(input.read_vlong().unwrap_err().is_malformed());
    }

    #[test]
    fn test_vlong_too_long_rejected() {
        let bytes = vec![0x80; 11];
        let mut input = StreamInput::new(&bytes);
        assert!(input.read_vlong().unwrap_err().is_malformed());
    }

    #[test]
    fn test_default_limits() {
        assert_eq!(DecodeLimits::default(), DecodeLimits::unlimited());
        assert_eq!(DecodeLimits::with_max_depth(4).max_depth, 4);
    }
}
