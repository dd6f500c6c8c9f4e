//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `TableError` from `parcelhub_core::storage`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use parcelhub_core::storage::TableError;

/// Map a GetItem SDK error to TableError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
) -> TableError {
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => TableError::TableNotFound,
        GetItemError::ProvisionedThroughputExceededException(_) => {
            TableError::Service("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            TableError::Service("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to TableError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> TableError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => TableError::ConditionalCheckFailed,
        PutItemError::ResourceNotFoundException(_) => TableError::TableNotFound,
        PutItemError::ProvisionedThroughputExceededException(_) => {
            TableError::Service("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            TableError::Service("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            TableError::Service("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            TableError::Service("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to TableError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(err: SdkError<ScanError, R>) -> TableError {
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => TableError::TableNotFound,
        ScanError::ProvisionedThroughputExceededException(_) => {
            TableError::Service("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            TableError::Service("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            TableError::Service("DynamoDB internal server error".to_string())
        }
        err => TableError::Service(format!("Scan failed: {:?}", err)),
    }
}
