//! CMS response envelopes.
//!
//! Collections arrive as `{"data": [...], "meta": {"pagination": {...}}}`.
//! Items are either flat objects or the older `{"id", "attributes": {...}}`
//! shape; both decode into the same record types.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CmsError;

#[derive(Debug, Deserialize)]
pub struct Envelope {
    /// Required; CMS error payloads arrive as 200s without it.
    pub data: Vec<Value>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Meta {
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub page_count: Option<u32>,
    pub total: Option<u32>,
}

impl Envelope {
    pub fn pagination(&self) -> Option<&Pagination> {
        self.meta.as_ref().and_then(|m| m.pagination.as_ref())
    }
}

/// Decode envelope items into records, unwrapping `attributes` when present.
pub fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, CmsError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(flatten_item(item))
                .map_err(|e| CmsError::Parse(format!("item {index}: {e}")))
        })
        .collect()
}

fn flatten_item(item: Value) -> Value {
    let Value::Object(mut outer) = item else {
        return item;
    };
    match outer.remove("attributes") {
        Some(Value::Object(mut attrs)) => {
            if let Some(id) = outer.remove("id") {
                attrs.insert("id".to_string(), id);
            }
            Value::Object(attrs)
        }
        Some(other) => {
            outer.insert("attributes".to_string(), other);
            Value::Object(outer)
        }
        None => Value::Object(outer),
    }
}

/// Parse a whole collection from JSON text: either a bare array of records or
/// a CMS envelope.
pub fn parse_collection<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, CmsError> {
    match serde_json::from_str::<Value>(text)? {
        Value::Array(items) => decode_items(items),
        value @ Value::Object(_) => {
            let envelope: Envelope = serde_json::from_value(value)?;
            decode_items(envelope.data)
        }
        other => Err(CmsError::Parse(format!(
            "expected an array or an object with `data`, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
