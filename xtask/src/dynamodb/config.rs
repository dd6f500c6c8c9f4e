//! Table configuration types (Functional Core - pure data).

use parcelhub_core::resources::{Order, Product};
use parcelhub_core::storage::Resource;

/// Table schema configuration.
///
/// Every parcelhub table has a single string partition key, no sort key and
/// no secondary indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

/// Returns the table configuration for resource `R`, keyed by its
/// identifier attribute.
pub fn resource_table_config<R: Resource>(table_name: &str) -> TableConfig {
    TableConfig {
        table_name: table_name.to_string(),
        partition_key: KeyAttribute {
            name: R::ID_FIELD.to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

/// Returns the configuration of every table parcelhub needs.
/// This is a pure function - no I/O.
pub fn parcelhub_table_configs(products_table: &str, orders_table: &str) -> Vec<TableConfig> {
    vec![
        resource_table_config::<Product>(products_table),
        resource_table_config::<Order>(orders_table),
    ]
}
