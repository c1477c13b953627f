//! The `Value` sum type and its equality rules

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use super::hash::{deterministic_hash, unordered_entries_hash};

/// String-keyed mapping of values. Iteration order carries no meaning.
pub type ValueMap = HashMap<String, Value>;

/// One-byte wire tag identifying a [`Value`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ValueTag {
    /// No payload
    Absent = 0,
    /// One byte, 0 or 1
    Boolean = 1,
    /// 8 bytes, signed, little-endian
    Integer = 2,
    /// 8 bytes, IEEE-754 binary64 bit pattern
    Float = 3,
    /// Length-prefixed UTF-8
    Text = 4,
    /// Count-prefixed sequence of values
    List = 5,
    /// Count-prefixed sequence of (key, value) pairs
    Map = 6,
}

impl ValueTag {
    /// Convert from u8, returns None for unknown tags
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(ValueTag::Absent),
            1 => Some(ValueTag::Boolean),
            2 => Some(ValueTag::Integer),
            3 => Some(ValueTag::Float),
            4 => Some(ValueTag::Text),
            5 => Some(ValueTag::List),
            6 => Some(ValueTag::Map),
            _ => None,
        }
    }

    /// Convert to u8
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Lowercase variant name, used in error messages
    pub fn name(self) -> &'static str {
        match self {
            ValueTag::Absent => "absent",
            ValueTag::Boolean => "boolean",
            ValueTag::Integer => "integer",
            ValueTag::Float => "float",
            ValueTag::Text => "text",
            ValueTag::List => "list",
            ValueTag::Map => "map",
        }
    }
}

/// Any value that can appear in a document payload.
///
/// Equality is structural:
/// - `Map` compares key sets and per-key values, ignoring iteration order
/// - `List` compares element by element, in order
/// - `Float` compares bit patterns with every NaN folded to one, so any two
///   NaNs are equal and `0.0 != -0.0`
/// - numeric variants never compare across tags: `Integer(1) != Float(1.0)`
#[derive(Debug, Clone)]
pub enum Value {
    /// Null / missing
    Absent,
    /// Boolean
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit IEEE float
    Float(f64),
    /// UTF-8 text
    Text(String),
    /// Ordered sequence
    List(Vec<Value>),
    /// Unordered string-keyed mapping
    Map(ValueMap),
}

impl Value {
    /// Returns the wire tag of this value
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Absent => ValueTag::Absent,
            Value::Boolean(_) => ValueTag::Boolean,
            Value::Integer(_) => ValueTag::Integer,
            Value::Float(_) => ValueTag::Float,
            Value::Text(_) => ValueTag::Text,
            Value::List(_) => ValueTag::List,
            Value::Map(_) => ValueTag::Map,
        }
    }

    /// Lowercase variant name
    pub fn type_name(&self) -> &'static str {
        self.tag().name()
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Deterministic hash of this value, consistent with `==`.
    pub fn hash_code(&self) -> u64 {
        deterministic_hash(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => float_bits(*a) == float_bits(*b),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // HashMap equality is key-set plus per-key lookup
            (Value::Map(a), Value::Map(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

/// Bit pattern used for equality and hashing; all NaNs share one pattern
fn float_bits(f: f64) -> u64 {
    if f.is_nan() {
        f64::NAN.to_bits()
    } else {
        f.to_bits()
    }
}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.tag().as_u8());
        match self {
            Value::Absent => {}
            Value::Boolean(b) => b.hash(state),
            Value::Integer(i) => i.hash(state),
            Value::Float(f) => float_bits(*f).hash(state),
            Value::Text(s) => s.hash(state),
            Value::List(items) => {
                // Slice hashing feeds the length then each element in order
                items.hash(state);
            }
            Value::Map(map) => {
                state.write_usize(map.len());
                state.write_u64(unordered_entries_hash(map.iter()));
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<ValueMap> for Value {
    fn from(map: ValueMap) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Absent)
    }
}
