use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::types::{AttributeMap, PutCondition, ScanOutput};

/// Failure signals raised by a [`TableClient`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table itself does not exist.
    #[error("Table not found")]
    TableNotFound,
    /// A conditional write was rejected.
    #[error("Conditional check failed")]
    ConditionalCheckFailed,
    /// Any other failure reported by the table service.
    #[error("{0}")]
    Service(String),
}

/// Access to a key-value table with a single string partition key.
#[async_trait]
pub trait TableClient: Send + Sync {
    /// Looks up one item by its exact key.
    async fn get_item(
        &self,
        table: &str,
        key: AttributeMap,
    ) -> Result<Option<AttributeMap>, TableError>;

    /// Writes an item, optionally guarded by `condition`.
    async fn put_item(
        &self,
        table: &str,
        item: AttributeMap,
        condition: Option<PutCondition>,
    ) -> Result<(), TableError>;

    /// Scans up to `limit` items, starting after `exclusive_start_key`.
    async fn scan(
        &self,
        table: &str,
        limit: u32,
        exclusive_start_key: Option<AttributeMap>,
    ) -> Result<ScanOutput, TableError>;
}

/// Source of fresh resource identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Random 128-bit identifiers in canonical UUID form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
