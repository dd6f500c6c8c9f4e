//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the HASH key attribute, if the description reported one.
    pub partition_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Archived, inaccessible, or a status this tool does not know. Holds the
    /// status as DynamoDB reported it.
    Unusable(String),
}

/// Planned changes for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with the wrong partition key. Needs a manual migration.
    KeyMismatch {
        table_name: String,
        expected: String,
        found: String,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

impl DeployPlan {
    pub fn is_noop(&self) -> bool {
        matches!(self, DeployPlan::NoChanges { .. })
    }
}

impl DestroyPlan {
    pub fn is_noop(&self) -> bool {
        matches!(self, DestroyPlan::AlreadyGone { .. })
    }
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    match &state.partition_key {
        Some(found) if *found != desired.partition_key.name => DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.name.clone(),
            found: found.clone(),
        },
        _ => DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!("  Partition key: {} (S)", config.partition_key.name),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        } => vec![
            format!("~ Table '{}' is keyed by {}", table_name, found),
            format!("  Expected partition key: {} (migrate manually)", expected),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::resource_table_config;
    use parcelhub_core::resources::Product;

    fn active(partition_key: &str) -> TableState {
        TableState {
            status: TableStatus::Active,
            partition_key: Some(partition_key.to_string()),
        }
    }

    #[test]
    fn test_missing_table_is_created() {
        let desired = resource_table_config::<Product>("products_table");

        let plan = calculate_deploy_plan(None, &desired);

        assert_eq!(
            plan,
            DeployPlan::CreateTable {
                config: desired.clone()
            }
        );
        assert_eq!(
            format_deploy_plan(&plan),
            vec![
                "+ Create table: products_table",
                "  Partition key: productId (S)",
                "  Billing: PAY_PER_REQUEST",
            ]
        );
    }

    #[test]
    fn test_existing_table_is_up_to_date() {
        let desired = resource_table_config::<Product>("products_table");

        let plan = calculate_deploy_plan(Some(&active("productId")), &desired);

        assert!(plan.is_noop());
    }

    #[test]
    fn test_wrong_key_is_reported() {
        let desired = resource_table_config::<Product>("products_table");

        let plan = calculate_deploy_plan(Some(&active("PK")), &desired);

        assert_eq!(
            plan,
            DeployPlan::KeyMismatch {
                table_name: "products_table".to_string(),
                expected: "productId".to_string(),
                found: "PK".to_string(),
            }
        );
        assert!(!plan.is_noop());
    }

    #[test]
    fn test_destroy_plans() {
        let plan = calculate_destroy_plan(Some(&active("orderId")), "orders_table");
        assert_eq!(
            format_destroy_plan(&plan),
            vec!["- Delete table: orders_table (ALL DATA WILL BE LOST)"]
        );

        let plan = calculate_destroy_plan(None, "orders_table");
        assert!(plan.is_noop());
        assert_eq!(
            format_destroy_plan(&plan),
            vec!["= Table 'orders_table' does not exist"]
        );
    }
}
