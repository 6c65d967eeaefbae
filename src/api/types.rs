// Request field handling shared by the lookup endpoints
//
// Request fields are kept as raw JSON values: echoed fields go back to the
// caller exactly as sent, and lookup keys are coerced the way a JavaScript
// client expects (`String(value)`, truthiness).

use serde::{Serialize, Serializer};
use serde_json::Value;

pub const DEFAULT_CURRENCY: &str = "EUR";
pub const DEFAULT_COUNTRY_FILTER: &str = "all";

/// Label used in messages when a key field is absent from the body
pub const UNSPECIFIED: &str = "unspecified";

pub fn default_currency() -> Value {
    Value::from(DEFAULT_CURRENCY)
}

pub fn default_country_filter() -> Value {
    Value::from(DEFAULT_COUNTRY_FILTER)
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are falsy
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// String form of a value as used for table lookups and messages
pub fn key_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        // null items render as empty strings when joined
        Value::Array(items) => items
            .iter()
            .map(|v| if v.is_null() { String::new() } else { key_string(v) })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Lookup key of an optional field; absent fields read as `UNSPECIFIED`
pub fn key_or_unspecified(value: Option<&Value>) -> String {
    value.map_or_else(|| UNSPECIFIED.to_string(), key_string)
}

/// Serialize `(key, value)` pairs as a JSON object in their stored order
#[allow(clippy::ptr_arg)]
pub fn serialize_pairs<K, V, S>(pairs: &Vec<(K, V)>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize,
    V: Serialize,
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthy() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!truthy(&falsy), "{falsy}");
        }
        for value in [json!(true), json!(1), json!("no"), json!([]), json!({})] {
            assert!(truthy(&value), "{value}");
        }
    }

    #[test]
    fn test_key_string() {
        assert_eq!(key_string(&json!("BMW")), "BMW");
        assert_eq!(key_string(&json!(123)), "123");
        assert_eq!(key_string(&json!(false)), "false");
        assert_eq!(key_string(&json!(null)), "null");
        assert_eq!(key_string(&json!(["BE", null, 3])), "BE,,3");
        assert_eq!(key_string(&json!({ "a": 1 })), "[object Object]");
    }

    #[test]
    fn test_serialize_pairs_keeps_order() {
        #[derive(Serialize)]
        struct Ordered {
            #[serde(serialize_with = "serialize_pairs")]
            map: Vec<(&'static str, u8)>,
        }
        let text = serde_json::to_string(&Ordered {
            map: vec![("zeta", 1), ("alpha", 2)],
        })
        .unwrap();
        assert_eq!(text, r#"{"map":{"zeta":1,"alpha":2}}"#);
    }

    #[test]
    fn test_key_or_unspecified() {
        assert_eq!(key_or_unspecified(None), UNSPECIFIED);
        assert_eq!(key_or_unspecified(Some(&json!("fashion"))), "fashion");
    }
}
