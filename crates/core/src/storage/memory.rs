//! In-memory table client.
//!
//! Tables are ordered maps keyed by the partition key value, wrapped in
//! `Arc<RwLock<_>>` for shared async access. Data is not persisted and is lost
//! when the last clone is dropped. Scans walk the partition keys in ascending
//! order, which is this backend's internal scan order.

use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::traits::{TableClient, TableError};
use super::types::{AttributeMap, AttributeValue, PutCondition, ScanOutput};

#[derive(Debug)]
struct MemoryTable {
    partition_key: String,
    items: BTreeMap<String, AttributeMap>,
}

impl MemoryTable {
    fn key_of(&self, item: &AttributeMap, what: &str) -> Result<String, TableError> {
        match item.get(&self.partition_key) {
            Some(AttributeValue::S(key)) if !key.is_empty() => Ok(key.clone()),
            _ => Err(TableError::Service(format!(
                "One or more parameter values were invalid: {what} is missing string key {}",
                self.partition_key
            ))),
        }
    }
}

/// Table client that keeps every table in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTableClient {
    tables: Arc<RwLock<HashMap<String, MemoryTable>>>,
}

impl InMemoryTableClient {
    /// Creates a client with no tables. Every call fails with `TableNotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a client with the given `(table name, partition key)` tables.
    pub fn with_tables<I, N, K>(tables: I) -> Self
    where
        I: IntoIterator<Item = (N, K)>,
        N: Into<String>,
        K: Into<String>,
    {
        let tables = tables
            .into_iter()
            .map(|(name, partition_key)| {
                (
                    name.into(),
                    MemoryTable {
                        partition_key: partition_key.into(),
                        items: BTreeMap::new(),
                    },
                )
            })
            .collect();

        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    /// Number of items currently stored in `table`.
    pub async fn item_count(&self, table: &str) -> Option<usize> {
        let tables = self.tables.read().await;
        tables.get(table).map(|t| t.items.len())
    }
}

#[async_trait]
impl TableClient for InMemoryTableClient {
    async fn get_item(
        &self,
        table: &str,
        key: AttributeMap,
    ) -> Result<Option<AttributeMap>, TableError> {
        let tables = self.tables.read().await;
        let table = tables.get(table).ok_or(TableError::TableNotFound)?;
        let key = table.key_of(&key, "key")?;
        Ok(table.items.get(&key).cloned())
    }

    async fn put_item(
        &self,
        table: &str,
        item: AttributeMap,
        condition: Option<PutCondition>,
    ) -> Result<(), TableError> {
        let mut tables = self.tables.write().await;
        let table = tables.get_mut(table).ok_or(TableError::TableNotFound)?;
        let key = table.key_of(&item, "item")?;

        if let Some(PutCondition::AttributeNotExists(attribute)) = &condition {
            let taken = table
                .items
                .get(&key)
                .is_some_and(|existing| existing.contains_key(attribute));
            if taken {
                return Err(TableError::ConditionalCheckFailed);
            }
        }

        table.items.insert(key, item);
        Ok(())
    }

    async fn scan(
        &self,
        table: &str,
        limit: u32,
        exclusive_start_key: Option<AttributeMap>,
    ) -> Result<ScanOutput, TableError> {
        if limit == 0 {
            return Err(TableError::Service(
                "Limit must be greater than or equal to 1".to_string(),
            ));
        }

        let tables = self.tables.read().await;
        let table = tables.get(table).ok_or(TableError::TableNotFound)?;

        let start = match &exclusive_start_key {
            Some(key) => Bound::Excluded(table.key_of(key, "exclusive start key")?),
            None => Bound::Unbounded,
        };

        let mut window = table
            .items
            .range::<String, _>((start, Bound::Unbounded))
            .take(limit as usize + 1);

        let items: Vec<AttributeMap> = window
            .by_ref()
            .take(limit as usize)
            .map(|(_, item)| item.clone())
            .collect();
        let has_more = window.next().is_some();

        let last_evaluated_key = match (has_more, items.last()) {
            (true, Some(last)) => {
                let key = table.key_of(last, "item")?;
                Some(AttributeMap::from([(
                    table.partition_key.clone(),
                    AttributeValue::S(key),
                )]))
            }
            _ => None,
        };

        Ok(ScanOutput {
            items,
            last_evaluated_key,
        })
    }
}
