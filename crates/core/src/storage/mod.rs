mod codec;
mod error;
mod http_mapping;
mod memory;
mod resource;
mod store;
mod traits;
mod types;

pub use codec::{
    required_identifier, required_number, required_string, AttributeCodec,
    MalformedAttribute, MalformedKind,
};
pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use memory::InMemoryTableClient;
pub use resource::{require_present, require_text, MissingField, Resource};
pub use store::{ResourceStore, MAX_CREATE_ATTEMPTS};
pub use traits::{IdGenerator, TableClient, TableError, UuidGenerator};
pub use types::{AttributeMap, AttributeValue, Page, PutCondition, ScanOutput};
