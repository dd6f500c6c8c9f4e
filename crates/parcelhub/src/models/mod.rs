//! Request and response payloads that are not resources themselves.

use serde::{Deserialize, Serialize};

use parcelhub_core::resources::{Order, Product};
use parcelhub_core::storage::Page;

/// Query parameters for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Identifier of the last item of the previous page.
    pub exclusive_start_key: Option<String>,
}

/// Response for GET /api/products.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsResponse {
    pub total: usize,
    pub products: Vec<Product>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<String>,
}

impl From<Page<Product>> for ProductsResponse {
    fn from(page: Page<Product>) -> Self {
        Self {
            total: page.items.len(),
            products: page.items,
            last_evaluated_key: page.cursor,
        }
    }
}

/// Response for GET /api/orders.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersResponse {
    pub total: usize,
    pub orders: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<String>,
}

impl From<Page<Order>> for OrdersResponse {
    fn from(page: Page<Order>) -> Self {
        Self {
            total: page.items.len(),
            orders: page.items,
            last_evaluated_key: page.cursor,
        }
    }
}
