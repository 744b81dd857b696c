//! Dynamic dashboard record

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by a [`Record`] field.
///
/// Covers the field shapes the dashboard displays. Anything a table cell or
/// filter needs to show is reachable through [`Value::display`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Text value.
    String(String),
    /// List of values, displayed comma-joined.
    List(Vec<Value>),
}

impl Value {
    /// Stringify the value for display and filtering.
    ///
    /// Never fails: `Null` becomes the empty string, lists join their
    /// elements with `", "`.
    pub fn display(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::String(s) => s.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::display)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// One data row displayed by the dashboard widgets.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. Records are owned by the caller; widgets only borrow
/// them and never mutate them.
///
/// # Example
///
/// ```
/// use edgeboard_widgets::Record;
///
/// let record = Record::new()
///     .set("name", "heat-mapper")
///     .set("description", "Thermal overlay service");
///
/// assert_eq!(record.display_string("name"), "heat-mapper");
/// assert_eq!(record.display_string("missing"), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value, builder style.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns the field as a string slice, if it is a `String` value.
    pub fn get_string(&self, field: &str) -> Option<&str> {
        match self.fields.get(field) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Stringifies a field for display.
    ///
    /// Fail-soft: a missing or null field yields the empty string rather
    /// than an error, so a malformed record can never break rendering or
    /// filtering.
    pub fn display_string(&self, field: &str) -> String {
        self.fields.get(field).map(Value::display).unwrap_or_default()
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_lists() {
        let v = Value::from(vec!["api", "worker"]);
        assert_eq!(v.display(), "api, worker");
    }

    #[test]
    fn display_string_defaults_to_empty() {
        let record = Record::new().set("name", "a").set("gone", Value::Null);
        assert_eq!(record.display_string("name"), "a");
        assert_eq!(record.display_string("gone"), "");
        assert_eq!(record.display_string("never-set"), "");
    }

    #[test]
    fn records_decode_from_json_objects() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"name": "a", "replicas": 3, "tags": ["x", "y"]}]"#,
        )
        .unwrap();
        assert_eq!(records[0].display_string("replicas"), "3");
        assert_eq!(records[0].display_string("tags"), "x, y");
    }
}
