use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use parcelhub_core::storage::{AttributeMap, PutCondition, ScanOutput, TableClient, TableError};

use super::conversions::{from_item, to_item};
use super::error::{map_get_item_error, map_put_item_error, map_scan_error};
use crate::config::Config;

/// `TableClient` over a DynamoDB client.
#[derive(Debug, Clone)]
pub struct DynamoDbTableClient {
    client: Client,
}

impl DynamoDbTableClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a client from the AWS SDK default credential chain.
    ///
    /// `ENDPOINT_OVERRIDE` redirects every request, e.g. to a local DynamoDB.
    pub async fn from_config(config: &Config) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(endpoint) = &config.endpoint_override {
            tracing::info!(%endpoint, "Using DynamoDB endpoint override");
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl TableClient for DynamoDbTableClient {
    async fn get_item(
        &self,
        table: &str,
        key: AttributeMap,
    ) -> Result<Option<AttributeMap>, TableError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(to_item(&key)))
            .send()
            .await
            .map_err(map_get_item_error)?;

        Ok(output.item.map(|item| from_item(&item)))
    }

    async fn put_item(
        &self,
        table: &str,
        item: AttributeMap,
        condition: Option<PutCondition>,
    ) -> Result<(), TableError> {
        let mut request = self
            .client
            .put_item()
            .table_name(table)
            .set_item(Some(to_item(&item)));

        if let Some(PutCondition::AttributeNotExists(attribute)) = condition {
            request = request
                .condition_expression("attribute_not_exists(#key)")
                .expression_attribute_names("#key", attribute);
        }

        request.send().await.map_err(map_put_item_error)?;
        Ok(())
    }

    async fn scan(
        &self,
        table: &str,
        limit: u32,
        exclusive_start_key: Option<AttributeMap>,
    ) -> Result<ScanOutput, TableError> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .limit(i32::try_from(limit).unwrap_or(i32::MAX))
            .set_exclusive_start_key(exclusive_start_key.as_ref().map(to_item))
            .send()
            .await
            .map_err(map_scan_error)?;

        Ok(ScanOutput {
            items: output
                .items
                .unwrap_or_default()
                .iter()
                .map(from_item)
                .collect(),
            last_evaluated_key: output.last_evaluated_key.map(|key| from_item(&key)),
        })
    }
}
