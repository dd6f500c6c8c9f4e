//! DynamoDB storage backend.
//!
//! Implements `parcelhub_core::storage::TableClient` with `aws-sdk-dynamodb`.
//! Each resource lives in its own table whose only key is a string partition
//! key named after the resource identifier attribute.

mod client;
mod conversions;
mod error;

pub use client::DynamoDbTableClient;
