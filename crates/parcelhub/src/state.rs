//! Shared application state.
//!
//! Holds one resource store per resource type. Both stores share the same
//! table client, whose implementation is selected via feature flags.

use std::sync::Arc;

use parcelhub_core::resources::{Order, Product};
use parcelhub_core::storage::{ResourceStore, TableClient};

use crate::config::Config;

// ============================================================================
// Compile-time feature validation
// ============================================================================

// Storage features: exactly one must be enabled, they are mutually exclusive
#[cfg(all(feature = "dynamodb", feature = "inmemory"))]
compile_error!("Cannot enable both 'dynamodb' and 'inmemory' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Shared application state.
///
/// Cloned for each request handler. The stores hold no mutable state, so
/// concurrent requests share them without locking.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ResourceStore<Product>>,
    pub orders: Arc<ResourceStore<Order>>,
}

impl AppState {
    /// Creates the stores for both resource types on top of `client`.
    pub fn from_client(client: Arc<dyn TableClient>, config: &Config) -> Self {
        Self {
            products: Arc::new(ResourceStore::new(
                client.clone(),
                config.products_table.clone(),
                config.page_size,
            )),
            orders: Arc::new(ResourceStore::new(
                client,
                config.orders_table.clone(),
                config.page_size,
            )),
        }
    }
}

// ============================================================================
// Factory functions for the different backends
// ============================================================================

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::inmemory;

    impl AppState {
        /// Creates AppState backed by in-process tables.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, data is lost on shutdown");
            let client = Arc::new(inmemory::table_client(config));
            Ok(Self::from_client(client, config))
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb_backend {
    use super::*;
    use crate::storage::DynamoDbTableClient;

    impl AppState {
        /// Creates AppState backed by DynamoDB.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let client = Arc::new(DynamoDbTableClient::from_config(config).await);
            Ok(Self::from_client(client, config))
        }
    }
}

#[cfg(test)]
mod tests {
    use parcelhub_core::resources::NewProduct;
    use parcelhub_core::storage::InMemoryTableClient;

    use super::*;

    #[tokio::test]
    async fn test_stores_use_configured_tables() {
        let config = Config {
            products_table: "p".to_string(),
            orders_table: "o".to_string(),
            ..Config::default()
        };
        let client = Arc::new(InMemoryTableClient::with_tables([
            ("p", "productId"),
            ("o", "orderId"),
        ]));

        let state = AppState::from_client(client.clone(), &config);

        assert_eq!(state.products.table_name(), "p");
        assert_eq!(state.orders.table_name(), "o");
        assert_eq!(state.products.page_size().get(), 10);

        state
            .products
            .create(NewProduct::new("box", "2020-10-08"))
            .await
            .unwrap();
        assert_eq!(client.item_count("p").await, Some(1));
        assert_eq!(client.item_count("o").await, Some(0));
    }
}
