use thiserror::Error;

use super::codec::MalformedKind;

/// Errors that can occur during resource store operations.
///
/// Every failure path of the store returns exactly one of these; the store
/// never logs or swallows an error.
///
/// The first six variants are the API-level kinds clients see. `Backend` is an
/// addition for table failures that are none of those (throttling, transport,
/// other service errors), so they are not misreported as a missing table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Require {field} to create a new {entity_type}")]
    InvalidRequest {
        entity_type: &'static str,
        field: &'static str,
    },
    #[error("{entity_type} {id} does not exist")]
    ResourceNotFound { entity_type: &'static str, id: String },
    #[error("Table {table_name} does not exist")]
    TableNotFound { table_name: String },
    #[error("Stored {entity_type} has a malformed {field} attribute: {kind}")]
    MalformedRecord {
        entity_type: &'static str,
        field: &'static str,
        kind: MalformedKind,
    },
    #[error("Unable to generate unique {entity_type} id after {attempts} tries")]
    CouldNotCreateResource {
        entity_type: &'static str,
        attempts: u32,
    },
    #[error("Inconsistent scan of table {table_name}: {reason}")]
    InternalConsistency { table_name: String, reason: String },
    /// The table service failed for a reason other than a missing table.
    #[error("Table {table_name} request failed: {message}")]
    Backend { table_name: String, message: String },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let error = StoreError::InvalidRequest {
            entity_type: "product",
            field: "productType",
        };
        assert_eq!(error.to_string(), "Require productType to create a new product");
    }

    #[test]
    fn test_resource_not_found_display() {
        let error = StoreError::ResourceNotFound {
            entity_type: "Product",
            id: "abc-123".to_string(),
        };
        assert_eq!(error.to_string(), "Product abc-123 does not exist");
    }

    #[test]
    fn test_table_not_found_display() {
        let error = StoreError::TableNotFound {
            table_name: "products_table".to_string(),
        };
        assert_eq!(error.to_string(), "Table products_table does not exist");
    }

    #[test]
    fn test_malformed_record_display() {
        let error = StoreError::MalformedRecord {
            entity_type: "order",
            field: "orderId",
            kind: MalformedKind::Missing,
        };
        assert_eq!(
            error.to_string(),
            "Stored order has a malformed orderId attribute: attribute is missing"
        );
    }

    #[test]
    fn test_could_not_create_display() {
        let error = StoreError::CouldNotCreateResource {
            entity_type: "product",
            attempts: 10,
        };
        assert_eq!(
            error.to_string(),
            "Unable to generate unique product id after 10 tries"
        );
    }

    #[test]
    fn test_internal_consistency_display() {
        let error = StoreError::InternalConsistency {
            table_name: "orders_table".to_string(),
            reason: "orderId missing from continuation key".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Inconsistent scan of table orders_table: orderId missing from continuation key"
        );
    }
}
