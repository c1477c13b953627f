//! Conversions between `Value` and `serde_json::Value`
//!
//! JSON numbers that fit an `i64` become `Integer`, all others `Float`.
//! Going back, non-finite floats become `null` because JSON has no
//! representation for them.

use serde_json::Number;

use super::model::Value;

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Value::Integer)
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Absent),
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Map(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(v: &Value) -> Self {
        match v {
            Value::Absent => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number((*i).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(serde_json::Value::from).collect())
            }
            Value::Map(map) => {
                serde_json::Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), serde_json::Value::from(v)))
                        .collect(),
                )
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        serde_json::Value::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json() {
        let value = Value::from(json!({
            "int": 42,
            "float": 1.5,
            "big": 18446744073709551615u64,
            "text": "hello",
            "list": [true, null],
        }));
        let map = value.as_map().unwrap();
        assert_eq!(map["int"], Value::Integer(42));
        assert_eq!(map["float"], Value::Float(1.5));
        assert_eq!(map["big"], Value::Float(18446744073709551615u64 as f64));
        assert_eq!(map["text"], Value::Text("hello".to_string()));
        assert_eq!(
            map["list"],
            Value::List(vec![Value::Boolean(true), Value::Absent])
        );
    }

    #[test]
    fn test_json_roundtrip_for_json_native_values() {
        let original = json!({"a": [1, 2.5, "x", {"b": false}], "c": null});
        let back = serde_json::Value::from(Value::from(original.clone()));
        assert_eq!(back, original);
    }

    #[test]
    fn test_non_finite_float_becomes_null() {
        assert_eq!(
            serde_json::Value::from(Value::Float(f64::INFINITY)),
            serde_json::Value::Null
        );
    }
}
