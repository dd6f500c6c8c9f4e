use std::{env, num::NonZeroU32};

use thiserror::Error;

const DEFAULT_PRODUCTS_TABLE: &str = "products_table";
const DEFAULT_ORDERS_TABLE: &str = "orders_table";
const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PAGE_SIZE must be a positive integer, got {0:?}")]
    InvalidPageSize(String),
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Table holding products (default: "products_table")
    pub products_table: String,
    /// Table holding orders (default: "orders_table")
    pub orders_table: String,
    /// Maximum number of items per list page (default: 10)
    pub page_size: NonZeroU32,
    /// Alternative DynamoDB endpoint, e.g. a local DynamoDB.
    /// Only honored by the `dynamodb` backend.
    pub endpoint_override: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PRODUCTS_TABLE_NAME` - Products table (default: "products_table")
    /// - `ORDERS_TABLE_NAME` - Orders table (default: "orders_table")
    /// - `PAGE_SIZE` - Items per list page, positive (default: 10)
    /// - `ENDPOINT_OVERRIDE` - DynamoDB endpoint URL (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let page_size = match non_empty("PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::InvalidPageSize(raw))?,
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            products_table: non_empty("PRODUCTS_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_PRODUCTS_TABLE.to_string()),
            orders_table: non_empty("ORDERS_TABLE_NAME")
                .unwrap_or_else(|| DEFAULT_ORDERS_TABLE.to_string()),
            page_size,
            endpoint_override: non_empty("ENDPOINT_OVERRIDE"),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            products_table: DEFAULT_PRODUCTS_TABLE.to_string(),
            orders_table: DEFAULT_ORDERS_TABLE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            endpoint_override: None,
        }
    }
}
