//! In-memory storage backend.
//!
//! Wraps `parcelhub_core::storage::InMemoryTableClient` with both configured
//! tables already created, keyed by the identifier attribute of the resource
//! they hold.

use parcelhub_core::resources::{Order, Product};
use parcelhub_core::storage::{InMemoryTableClient, Resource};

use crate::config::Config;

/// Builds a table client holding the products and orders tables.
pub fn table_client(config: &Config) -> InMemoryTableClient {
    InMemoryTableClient::with_tables([
        (config.products_table.clone(), Product::ID_FIELD),
        (config.orders_table.clone(), Order::ID_FIELD),
    ])
}
