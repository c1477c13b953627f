//! Binary codec for `Value`
//!
//! ```text
//! +-----+------------------------------------------------+
//! | tag | body                                           |
//! +-----+------------------------------------------------+
//! |  0  | (absent, no body)                              |
//! |  1  | u8: 0 or 1                                     |
//! |  2  | i64 LE                                         |
//! |  3  | f64 bit pattern LE                             |
//! |  4  | VLong byte length, UTF-8 bytes                 |
//! |  5  | VLong count, encoded values                    |
//! |  6  | VLong count, (VLong key length, key, value)... |
//! +-----+------------------------------------------------+
//! ```
//!
//! Map keys are written in ascending byte order, so equal values always
//! encode to identical bytes. Decoding accepts pairs in any order.

use std::collections::HashMap;
use std::io::Write;

use crate::errors::{DocumentError, DocumentResult};
use crate::stream::{StreamInput, StreamOutput};

use super::model::{Value, ValueTag};

/// Smallest encoded map pair: empty key length plus an Absent tag
const MIN_MAP_ENTRY_SIZE: usize = 2;

/// Smallest encoded list element: an Absent tag
const MIN_LIST_ENTRY_SIZE: usize = 1;

/// Writes a tagged value
pub fn write_value<W: Write>(out: &mut StreamOutput<W>, value: &Value) -> DocumentResult<()> {
    out.write_u8(value.tag().as_u8())?;
    match value {
        Value::Absent => Ok(()),
        Value::Boolean(b) => out.write_bool(*b),
        Value::Integer(i) => out.write_i64(*i),
        Value::Float(f) => out.write_f64(*f),
        Value::Text(s) => out.write_string(s),
        Value::List(items) => {
            out.write_vlong(items.len() as u64)?;
            for item in items {
                write_value(out, item)?;
            }
            Ok(())
        }
        Value::Map(map) => write_map_body(out, map, write_value),
    }
}

/// Writes a Text-tagged string without building a `Value`
pub fn write_text<W: Write>(out: &mut StreamOutput<W>, text: &str) -> DocumentResult<()> {
    out.write_u8(ValueTag::Text.as_u8())?;
    out.write_string(text)
}

/// Writes the count and the `(key, value)` pairs of a map, keys ascending.
pub fn write_map_body<W, V, F>(
    out: &mut StreamOutput<W>,
    map: &HashMap<String, V>,
    mut write_entry: F,
) -> DocumentResult<()>
where
    W: Write,
    F: FnMut(&mut StreamOutput<W>, &V) -> DocumentResult<()>,
{
    let mut entries: Vec<(&String, &V)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));

    out.write_vlong(entries.len() as u64)?;
    for (key, value) in entries {
        out.write_string(key)?;
        write_entry(out, value)?;
    }
    Ok(())
}

/// Reads a tagged value
pub fn read_value(input: &mut StreamInput<'_>) -> DocumentResult<Value> {
    let tag = read_tag(input)?;
    match tag {
        ValueTag::Absent => Ok(Value::Absent),
        ValueTag::Boolean => Ok(Value::Boolean(input.read_bool()?)),
        ValueTag::Integer => Ok(Value::Integer(input.read_i64()?)),
        ValueTag::Float => Ok(Value::Float(input.read_f64()?)),
        ValueTag::Text => Ok(Value::Text(input.read_string()?)),
        ValueTag::List => {
            let count = input.read_length("list size", MIN_LIST_ENTRY_SIZE)?;
            input.enter_nested()?;
            let mut items = Vec::with_capacity(count);
            for _ in 0..count {
                items.push(read_value(input)?);
            }
            input.leave_nested();
            Ok(Value::List(items))
        }
        ValueTag::Map => Ok(Value::Map(read_map_body(input, read_value)?)),
    }
}

/// Reads a value that must be Text-tagged
pub fn read_text(input: &mut StreamInput<'_>) -> DocumentResult<String> {
    expect_tag(input, ValueTag::Text)?;
    input.read_string()
}

/// Reads a tag byte, rejecting unknown tags
pub fn read_tag(input: &mut StreamInput<'_>) -> DocumentResult<ValueTag> {
    let offset = input.position();
    let byte = input.read_u8()?;
    ValueTag::from_u8(byte).ok_or_else(|| {
        DocumentError::malformed_at_offset(offset, format!("Unknown value tag: {}", byte))
    })
}

/// Reads a tag byte and requires it to be `expected`
pub fn expect_tag(input: &mut StreamInput<'_>, expected: ValueTag) -> DocumentResult<()> {
    let offset = input.position();
    let tag = read_tag(input)?;
    if tag != expected {
        return Err(DocumentError::malformed_at_offset(
            offset,
            format!("Expected {} value, found {}", expected.name(), tag.name()),
        ));
    }
    Ok(())
}

/// Reads the count and `(key, value)` pairs of a map.
///
/// Duplicate keys are malformed: the encoder never produces them and
/// keeping either one would silently drop data.
pub fn read_map_body<'a, T, F>(
    input: &mut StreamInput<'a>,
    mut read_entry: F,
) -> DocumentResult<HashMap<String, T>>
where
    F: FnMut(&mut StreamInput<'a>) -> DocumentResult<T>,
{
    let count = input.read_length("map size", MIN_MAP_ENTRY_SIZE)?;
    input.enter_nested()?;
    let mut map = HashMap::with_capacity(count);
    for _ in 0..count {
        let key_offset = input.position();
        let key = input.read_string()?;
        if map.contains_key(&key) {
            return Err(DocumentError::malformed_at_offset(
                key_offset,
                format!("Duplicate map key: '{}'", key),
            ));
        }
        let value = read_entry(input)?;
        map.insert(key, value);
    }
    input.leave_nested();
    Ok(map)
}

/// Encodes a value into a fresh buffer
pub fn value_to_bytes(value: &Value) -> Vec<u8> {
    let mut out = StreamOutput::new(Vec::new());
    write_value(&mut out, value).expect("Vec write cannot fail");
    out.into_inner()
}

/// Decodes exactly one value from `data`; trailing bytes are malformed.
pub fn value_from_bytes(data: &[u8]) -> DocumentResult<Value> {
    let mut input = StreamInput::new(data);
    let value = read_value(&mut input)?;
    if !input.is_empty() {
        return Err(DocumentError::malformed_at_offset(
            input.position(),
            format!("{} trailing bytes after value", input.remaining()),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::DecodeLimits;
    use crate::value::ValueMap;

    fn sample_nested() -> Value {
        let mut inner = ValueMap::new();
        inner.insert("flag".to_string(), Value::Boolean(true));
        inner.insert("ratio".to_string(), Value::Float(-0.25));
        inner.insert("nothing".to_string(), Value::Absent);

        let mut outer = ValueMap::new();
        outer.insert("name".to_string(), Value::Text("ünïcode ✓".to_string()));
        outer.insert("count".to_string(), Value::Integer(i64::MIN));
        outer.insert(
            "items".to_string(),
            Value::List(vec![Value::Map(inner), Value::List(vec![]), Value::Integer(7)]),
        );
        outer.insert("empty".to_string(), Value::Map(ValueMap::new()));
        Value::Map(outer)
    }

    #[test]
    fn test_nested_value_roundtrip() {
        let value = sample_nested();
        let bytes = value_to_bytes(&value);
        assert_eq!(value_from_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn test_scalar_layouts() {
        assert_eq!(value_to_bytes(&Value::Absent), vec![0]);
        assert_eq!(value_to_bytes(&Value::Boolean(true)), vec![1, 1]);
        assert_eq!(
            value_to_bytes(&Value::Integer(-1)),
            vec![2, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]
        );
        assert_eq!(value_to_bytes(&Value::Text("hi".into())), vec![4, 2, b'h', b'i']);
    }

    #[test]
    fn test_map_encoding_is_deterministic() {
        let mut a = ValueMap::new();
        let mut b = ValueMap::new();
        for i in 0..32 {
            a.insert(format!("key{}", i), Value::Integer(i));
        }
        for i in (0..32).rev() {
            b.insert(format!("key{}", i), Value::Integer(i));
        }
        assert_eq!(value_to_bytes(&Value::Map(a)), value_to_bytes(&Value::Map(b)));
    }

    #[test]
    fn test_map_pairs_accepted_in_any_order() {
        // {"b": 1, "a": true} written with keys descending
        let bytes = vec![
            6, 2, //
            1, b'b', 2, 1, 0, 0, 0, 0, 0, 0, 0, //
            1, b'a', 1, 1,
        ];
        let value = value_from_bytes(&bytes).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(map.get("a"), Some(&Value::Boolean(true)));
        assert_eq!(map.get("b"), Some(&Value::Integer(1)));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = value_from_bytes(&[42]).unwrap_err();
        assert!(err.is_malformed());
        assert!(err.message().contains("Unknown value tag: 42"));
    }

    #[test]
    fn test_truncated_value_rejected() {
        let bytes = value_to_bytes(&sample_nested());
        for cut in 0..bytes.len() {
            let result = value_from_bytes(&bytes[..cut]);
            assert!(result.is_err(), "prefix of {} bytes must not decode", cut);
        }
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let bytes = vec![6, 2, 1, b'k', 0, 1, b'k', 0];
        let err = value_from_bytes(&bytes).unwrap_err();
        assert!(err.message().contains("Duplicate map key"));
    }

    #[test]
    fn test_oversized_list_count_rejected() {
        // Claims a million elements with nothing behind it
        let mut out = StreamOutput::new(Vec::new());
        out.write_u8(ValueTag::List.as_u8()).unwrap();
        out.write_vlong(1_000_000).unwrap();
        let err = value_from_bytes(&out.into_inner()).unwrap_err();
        assert!(err.message().contains("exceeds remaining stream"));
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let err = value_from_bytes(&[0, 0]).unwrap_err();
        assert!(err.message().contains("trailing"));
    }

    #[test]
    fn test_depth_limit_enforced() {
        let mut value = Value::Integer(1);
        for _ in 0..10 {
            value = Value::List(vec![value]);
        }
        let bytes = value_to_bytes(&value);

        let mut shallow = StreamInput::with_limits(&bytes, DecodeLimits::with_max_depth(5));
        assert!(read_value(&mut shallow).unwrap_err().message().contains("Nesting"));

        let mut deep = StreamInput::with_limits(&bytes, DecodeLimits::with_max_depth(10));
        assert_eq!(read_value(&mut deep).unwrap(), value);
    }

    #[test]
    fn test_read_text_requires_text_tag() {
        let bytes = value_to_bytes(&Value::Integer(3));
        let mut input = StreamInput::new(&bytes);
        let err = read_text(&mut input).unwrap_err();
        assert!(err.message().contains("Expected text value, found integer"));
    }
}
