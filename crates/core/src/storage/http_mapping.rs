//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `InvalidRequest` -> 400 (Bad Request)
/// - `ResourceNotFound` -> 404 (Not Found)
/// - `Backend` -> 503 (Service Unavailable)
/// - `TableNotFound`, `MalformedRecord`, `CouldNotCreateResource`,
///   `InternalConsistency` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use parcelhub_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::ResourceNotFound {
///     entity_type: "Product",
///     id: "abc-123".to_string(),
/// };
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::InvalidRequest { .. } => 400,
        StoreError::ResourceNotFound { .. } => 404,
        StoreError::TableNotFound { .. } => 500,
        StoreError::MalformedRecord { .. } => 500,
        StoreError::CouldNotCreateResource { .. } => 500,
        StoreError::InternalConsistency { .. } => 500,
        StoreError::Backend { .. } => 503,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MalformedKind;

    #[test]
    fn test_invalid_request_maps_to_400() {
        let error = StoreError::InvalidRequest {
            entity_type: "order",
            field: "customerId",
        };
        assert_eq!(store_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = StoreError::ResourceNotFound {
            entity_type: "Order",
            id: "order-1".to_string(),
        };
        assert_eq!(store_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_server_side_failures_map_to_500() {
        let errors = [
            StoreError::TableNotFound {
                table_name: "t".to_string(),
            },
            StoreError::MalformedRecord {
                entity_type: "product",
                field: "productId",
                kind: MalformedKind::Empty,
            },
            StoreError::CouldNotCreateResource {
                entity_type: "product",
                attempts: 10,
            },
            StoreError::InternalConsistency {
                table_name: "t".to_string(),
                reason: "bad key".to_string(),
            },
        ];

        for error in &errors {
            assert_eq!(store_error_to_status_code(error), 500, "{error}");
        }
    }

    #[test]
    fn test_backend_maps_to_503() {
        let error = StoreError::Backend {
            table_name: "t".to_string(),
            message: "Throughput exceeded, please retry".to_string(),
        };
        assert_eq!(store_error_to_status_code(&error), 503);
    }
}
