//! Conversions between [`Value`] and `serde_json::Value`.
//!
//! Services and callers usually speak JSON. Converting a record back to JSON
//! drops its annotations.

use crate::{Record, Value};

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        match src {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(v) => Value::Bool(v),
            serde_json::Value::Number(v) => Value::Number(v),
            serde_json::Value::String(v) => Value::String(v),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(Record::from(fields)),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Record {
    fn from(src: serde_json::Map<String, serde_json::Value>) -> Self {
        src.into_iter().collect()
    }
}

impl From<Value> for serde_json::Value {
    fn from(src: Value) -> Self {
        match src {
            Value::Null => serde_json::Value::Null,
            Value::Bool(v) => serde_json::Value::Bool(v),
            Value::Number(v) => serde_json::Value::Number(v),
            Value::String(v) => serde_json::Value::String(v),
            Value::List(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Record(record) => serde_json::Value::Object(record.into()),
        }
    }
}

impl From<Record> for serde_json::Map<String, serde_json::Value> {
    fn from(src: Record) -> Self {
        src.into_fields()
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect()
    }
}
