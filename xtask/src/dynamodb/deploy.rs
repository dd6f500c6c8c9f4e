//! Table deployment operations (Imperative Shell).

use std::time::Duration;

use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode as SdkBillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::client;
use super::config::{AttributeType, BillingMode, TableConfig};
use super::error::{DynamodbError, Result};
use super::planning::{DeployPlan, DestroyPlan, TableStatus};

/// Execute a deploy plan.
pub async fn execute_deploy_plan(client: &Client, plan: &DeployPlan) -> Result<()> {
    match plan {
        DeployPlan::CreateTable { config } => {
            create_table(client, config).await?;
            wait_for_table_active(client, &config.table_name).await?;
        }
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => {
            return Err(DynamodbError::KeyMismatch {
                table_name: table_name.clone(),
                expected: expected.clone(),
                found: found.clone(),
            });
        }
        DeployPlan::NoChanges { .. } => {}
    }
    Ok(())
}

/// Execute a destroy plan.
pub async fn execute_destroy_plan(client: &Client, plan: &DestroyPlan) -> Result<()> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => delete_table(client, table_name).await,
        DestroyPlan::AlreadyGone { .. } => Ok(()),
    }
}

async fn create_table(client: &Client, config: &TableConfig) -> Result<()> {
    let key_schema = KeySchemaElement::builder()
        .attribute_name(&config.partition_key.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(&config.partition_key.name)
        .attribute_type(to_scalar_type(config.partition_key.attribute_type))
        .build()
        .map_err(|e| DynamodbError::AwsSdk(e.to_string()))?;

    client
        .create_table()
        .table_name(&config.table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(to_billing_mode(config.billing_mode))
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;
    Ok(())
}

async fn delete_table(client: &Client, table_name: &str) -> Result<()> {
    client
        .delete_table()
        .table_name(table_name)
        .send()
        .await
        .map_err(|e| DynamodbError::AwsSdk(DisplayErrorContext(&e).to_string()))?;
    Ok(())
}

async fn wait_for_table_active(client: &Client, table_name: &str) -> Result<()> {
    let max_attempts = 60;
    let delay = Duration::from_secs(2);

    for _ in 0..max_attempts {
        let status = client::get_table_state(client, table_name)
            .await?
            .map(|state| state.status);
        if activation_check(table_name, status.as_ref())? {
            return Ok(());
        }
        tokio::time::sleep(delay).await;
    }

    Err(DynamodbError::TableActivationTimeout {
        table_name: table_name.to_string(),
    })
}

/// `Ok(true)` once the table is active, `Ok(false)` while it may still get
/// there, an error when it never will.
fn activation_check(table_name: &str, status: Option<&TableStatus>) -> Result<bool> {
    match status {
        Some(TableStatus::Active) => Ok(true),
        Some(TableStatus::Unusable(status)) => Err(DynamodbError::TableUnusable {
            table_name: table_name.to_string(),
            status: status.clone(),
        }),
        _ => Ok(false),
    }
}

fn to_scalar_type(attr_type: AttributeType) -> ScalarAttributeType {
    match attr_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(mode: BillingMode) -> SdkBillingMode {
    match mode {
        BillingMode::PayPerRequest => SdkBillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_check_waits_for_active() {
        assert!(activation_check("orders_table", Some(&TableStatus::Active)).unwrap());
        assert!(!activation_check("orders_table", Some(&TableStatus::Creating)).unwrap());
        assert!(!activation_check("orders_table", None).unwrap());
    }

    #[test]
    fn test_activation_check_fails_on_archived_table() {
        let err = activation_check(
            "orders_table",
            Some(&TableStatus::Unusable("ARCHIVED".to_string())),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Table 'orders_table' is ARCHIVED and cannot become active"
        );
    }
}
