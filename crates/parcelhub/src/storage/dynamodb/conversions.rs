//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between SDK attribute maps and the
//! backend-neutral `AttributeMap` of `parcelhub_core`. Testable without
//! DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::AttributeValue as DynamoValue;
use parcelhub_core::storage::{AttributeMap, AttributeValue};

pub type DynamoItem = HashMap<String, DynamoValue>;

pub fn to_dynamo_value(value: &AttributeValue) -> DynamoValue {
    match value {
        AttributeValue::S(s) => DynamoValue::S(s.clone()),
        AttributeValue::N(n) => DynamoValue::N(n.clone()),
        AttributeValue::Bool(b) => DynamoValue::Bool(*b),
        AttributeValue::Null => DynamoValue::Null(true),
        AttributeValue::B(bytes) => DynamoValue::B(Blob::new(bytes.clone())),
    }
}

/// Converts a scalar SDK value. Sets, lists and maps have no counterpart and
/// yield `None`.
pub fn from_dynamo_value(value: &DynamoValue) -> Option<AttributeValue> {
    match value {
        DynamoValue::S(s) => Some(AttributeValue::S(s.clone())),
        DynamoValue::N(n) => Some(AttributeValue::N(n.clone())),
        DynamoValue::Bool(b) => Some(AttributeValue::Bool(*b)),
        DynamoValue::Null(_) => Some(AttributeValue::Null),
        DynamoValue::B(blob) => Some(AttributeValue::B(blob.as_ref().to_vec())),
        _ => None,
    }
}

pub fn to_item(map: &AttributeMap) -> DynamoItem {
    map.iter()
        .map(|(name, value)| (name.clone(), to_dynamo_value(value)))
        .collect()
}

/// Converts an SDK item, leaving out attributes that are not scalars.
///
/// A resource attribute stored with a non-scalar type therefore reads as
/// missing, which the codec reports as a malformed record.
pub fn from_item(item: &DynamoItem) -> AttributeMap {
    item.iter()
        .filter_map(|(name, value)| from_dynamo_value(value).map(|v| (name.clone(), v)))
        .collect()
}
