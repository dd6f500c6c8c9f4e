//! Table client backends.
//!
//! This module provides concrete implementations of the `TableClient` trait
//! defined in `parcelhub_core::storage`. The implementation is selected at
//! compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): process-local tables, both pre-created on startup
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p parcelhub --no-default-features --features dynamodb
//! ```

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbTableClient;
