// File: src/value.rs
// Purpose: Field value types handed to checks

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// An uploaded file part of a multi-value form submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileValue {
    pub name: String,
    pub content_type: Option<String>,
    pub size: u64,
}

impl FileValue {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            size,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Supported value types in data sources
///
/// Objects and arrays make up the nested-path record shape; a multi-value
/// submission only ever holds `String` and `File` values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(BTreeMap<String, Value>),
    File(FileValue),
}

impl Value {
    /// Borrow the string contents, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileValue> {
        match self {
            Value::File(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Look up a direct child of a keyed structure.
    ///
    /// Objects are keyed by name, arrays by decimal position. Every other
    /// variant has no children.
    pub fn child(&self, segment: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => array_index(segment).and_then(|i| items.get(i)),
            _ => None,
        }
    }
}

/// Plain decimal index: `"0"`, or digits without a leading zero or sign
fn array_index(segment: &str) -> Option<usize> {
    let digits_only = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
    if !digits_only || (segment.len() > 1 && segment.starts_with('0')) {
        return None;
    }
    segment.parse().ok()
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<FileValue> for Value {
    fn from(f: FileValue) -> Self {
        Value::File(f)
    }
}

impl From<Vec<Value>> for Value {
    fn from(arr: Vec<Value>) -> Self {
        Value::Array(arr)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(obj: BTreeMap<String, Value>) -> Self {
        Value::Object(obj)
    }
}

impl From<HashMap<String, Value>> for Value {
    fn from(obj: HashMap<String, Value>) -> Self {
        Value::Object(obj.into_iter().collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            // Every JSON number fits an f64, possibly with precision loss
            serde_json::Value::Number(n) => n.as_f64().map(Value::Number).unwrap_or(Value::Null),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_nested() {
        let value = Value::from(json!({
            "user": { "name": "Alice", "age": 30, "tags": ["a", "b"] }
        }));

        let user = value.child("user").unwrap();
        assert_eq!(user.child("name"), Some(&Value::from("Alice")));
        assert_eq!(user.child("age"), Some(&Value::Number(30.0)));
        assert_eq!(
            user.child("tags").and_then(|t| t.child("1")),
            Some(&Value::from("b"))
        );
    }

    #[test]
    fn test_child_of_scalars_is_none() {
        assert!(Value::Null.child("a").is_none());
        assert!(Value::from("text").child("0").is_none());
        assert!(Value::from(3).child("x").is_none());
        assert!(Value::Array(vec![]).child("not-a-number").is_none());
    }

    #[test]
    fn test_array_index_is_plain_decimal() {
        let list = Value::Array(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(list.child("0"), Some(&Value::from("a")));
        assert_eq!(list.child("1"), Some(&Value::from("b")));
        assert!(list.child("+1").is_none());
        assert!(list.child("01").is_none());
        assert!(list.child("00").is_none());
        assert!(list.child("-0").is_none());
        assert!(list.child("").is_none());
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
