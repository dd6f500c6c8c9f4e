//! Generic resource store over a single-key table.
//!
//! One implementation serves every resource type: the per-type knowledge
//! (identifier attribute, required fields, attribute layout) comes from the
//! [`Resource`] implementation.

use std::marker::PhantomData;
use std::num::NonZeroU32;
use std::sync::Arc;

use super::error::{Result, StoreError};
use super::resource::{MissingField, Resource};
use super::traits::{IdGenerator, TableClient, TableError, UuidGenerator};
use super::types::{AttributeMap, AttributeValue, Page, PutCondition};

/// Upper bound on conditional writes issued by a single `create`.
///
/// With random 128-bit identifiers a collision is effectively impossible, so
/// reaching this bound means something other than bad luck is going on.
pub const MAX_CREATE_ATTEMPTS: u32 = 10;

/// Get, create and list operations for one resource type in one table.
///
/// Holds only immutable configuration, so a single instance can be shared
/// across concurrent requests.
pub struct ResourceStore<R> {
    client: Arc<dyn TableClient>,
    ids: Arc<dyn IdGenerator>,
    table_name: String,
    page_size: NonZeroU32,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceStore<R> {
    /// Creates a store that generates random UUID identifiers.
    pub fn new(
        client: Arc<dyn TableClient>,
        table_name: impl Into<String>,
        page_size: NonZeroU32,
    ) -> Self {
        Self {
            client,
            ids: Arc::new(UuidGenerator),
            table_name: table_name.into(),
            page_size,
            _resource: PhantomData,
        }
    }

    /// Replaces the identifier source.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Gets a resource by its identifier.
    pub async fn get(&self, id: &str) -> Result<R> {
        if id.is_empty() {
            return Err(self.not_found(id));
        }

        let item = self
            .client
            .get_item(&self.table_name, key_for::<R>(id))
            .await
            .map_err(|e| self.map_table_error(e))?;

        match item {
            Some(item) if !item.is_empty() => decode::<R>(&item),
            _ => Err(self.not_found(id)),
        }
    }

    /// Validates `draft`, assigns a fresh identifier and writes it.
    ///
    /// The write only succeeds if the identifier is not taken yet. On a
    /// collision a new identifier is drawn and the write retried, up to
    /// [`MAX_CREATE_ATTEMPTS`] writes in total. Returns the entity exactly as
    /// written.
    pub async fn create(&self, draft: R::Draft) -> Result<R> {
        let mut resource =
            R::from_draft(&draft).map_err(|MissingField(field)| StoreError::InvalidRequest {
                entity_type: R::ENTITY_TYPE,
                field,
            })?;

        for _ in 0..MAX_CREATE_ATTEMPTS {
            resource = resource.with_id(self.ids.generate());
            let condition = PutCondition::AttributeNotExists(R::ID_FIELD.to_string());
            match self
                .client
                .put_item(&self.table_name, resource.encode(), Some(condition))
                .await
            {
                Ok(()) => return Ok(resource),
                Err(TableError::ConditionalCheckFailed) => continue,
                Err(err) => return Err(self.map_table_error(err)),
            }
        }

        Err(StoreError::CouldNotCreateResource {
            entity_type: R::ENTITY_TYPE,
            attempts: MAX_CREATE_ATTEMPTS,
        })
    }

    /// Scans one page of at most `page_size` resources.
    ///
    /// `cursor` is the identifier returned by the previous page; absent or
    /// empty starts from the beginning. Any malformed item fails the whole
    /// page.
    pub async fn list(&self, cursor: Option<&str>) -> Result<Page<R>> {
        let exclusive_start_key = cursor.filter(|c| !c.is_empty()).map(key_for::<R>);

        let output = self
            .client
            .scan(&self.table_name, self.page_size.get(), exclusive_start_key)
            .await
            .map_err(|e| self.map_table_error(e))?;

        let items = output
            .items
            .iter()
            .map(decode::<R>)
            .collect::<Result<Vec<_>>>()?;

        let cursor = match output.last_evaluated_key {
            Some(key) if !key.is_empty() => Some(self.cursor_from(&key)?),
            _ => None,
        };

        Ok(Page { items, cursor })
    }

    fn cursor_from(&self, key: &AttributeMap) -> Result<String> {
        let reason = match key.get(R::ID_FIELD) {
            Some(AttributeValue::S(id)) if !id.is_empty() => return Ok(id.clone()),
            Some(AttributeValue::S(_)) => format!("{} in continuation key is empty", R::ID_FIELD),
            Some(other) => format!(
                "{} in continuation key has type {}, expected S",
                R::ID_FIELD,
                other.type_name()
            ),
            None => format!("continuation key has no {} attribute", R::ID_FIELD),
        };

        Err(StoreError::InternalConsistency {
            table_name: self.table_name.clone(),
            reason,
        })
    }

    fn not_found(&self, id: &str) -> StoreError {
        StoreError::ResourceNotFound {
            entity_type: R::ENTITY_TYPE,
            id: id.to_string(),
        }
    }

    fn map_table_error(&self, err: TableError) -> StoreError {
        match err {
            TableError::TableNotFound => StoreError::TableNotFound {
                table_name: self.table_name.clone(),
            },
            TableError::ConditionalCheckFailed => StoreError::Backend {
                table_name: self.table_name.clone(),
                message: "Unexpected conditional check failure".to_string(),
            },
            TableError::Service(message) => StoreError::Backend {
                table_name: self.table_name.clone(),
                message,
            },
        }
    }
}

fn key_for<R: Resource>(id: &str) -> AttributeMap {
    AttributeMap::from([(R::ID_FIELD.to_string(), AttributeValue::S(id.to_string()))])
}

fn decode<R: Resource>(item: &AttributeMap) -> Result<R> {
    R::decode(item).map_err(|e| StoreError::MalformedRecord {
        entity_type: R::ENTITY_TYPE,
        field: e.field,
        kind: e.kind,
    })
}
