//! Conversion between JSON documents and DynamoDB attribute values.
//!
//! The walker is total over `serde_json::Value`, so it handles any nesting
//! depth, not just the shape the current forecast payload happens to have.

use aws_sdk_dynamodb::types::AttributeValue;
use common::StoreError;
use serde_json::{Map, Number, Value};

/// Convert a JSON value into the store's native attribute representation.
pub fn to_attribute_value(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(items) => AttributeValue::L(items.iter().map(to_attribute_value).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .iter()
                .map(|(key, value)| (key.clone(), to_attribute_value(value)))
                .collect(),
        ),
    }
}

/// Convert an attribute value back into a JSON value.
///
/// Inverse of [`to_attribute_value`] for the six JSON-representable
/// variants. Binary and set attributes have no JSON counterpart and fail
/// with [`StoreError::UnsupportedAttribute`].
pub fn from_attribute_value(attr: &AttributeValue) -> Result<Value, StoreError> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(raw) => raw
            .parse::<Number>()
            .map(Value::Number)
            .map_err(|_| StoreError::InvalidNumber(raw.clone())),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(items) => items
            .iter()
            .map(from_attribute_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        AttributeValue::M(fields) => {
            let mut map = Map::with_capacity(fields.len());
            for (key, value) in fields {
                map.insert(key.clone(), from_attribute_value(value)?);
            }
            Ok(Value::Object(map))
        }
        AttributeValue::B(_) => Err(StoreError::UnsupportedAttribute("B")),
        AttributeValue::Bs(_) => Err(StoreError::UnsupportedAttribute("BS")),
        AttributeValue::Ns(_) => Err(StoreError::UnsupportedAttribute("NS")),
        AttributeValue::Ss(_) => Err(StoreError::UnsupportedAttribute("SS")),
        _ => Err(StoreError::UnsupportedAttribute("unknown")),
    }
}
