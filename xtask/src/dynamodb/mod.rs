//! DynamoDB infrastructure management commands.

mod client;
mod config;
mod deploy;
mod error;
mod planning;

pub use error::{DynamodbError, Result};

use crate::prelude::*;
use dialoguer::Confirm;

/// DynamoDB infrastructure management commands.
#[derive(Debug, clap::Parser)]
pub struct DynamodbCommand {
    #[command(subcommand)]
    pub action: DynamodbAction,
}

/// Available DynamoDB actions.
#[derive(Debug, clap::Subcommand)]
pub enum DynamodbAction {
    /// Deploy or destroy the products and orders tables.
    Deploy(DeployCommand),
}

/// Deploy or destroy the parcelhub tables.
#[derive(Debug, clap::Parser)]
#[command(long_about = "Deploy or destroy the parcelhub DynamoDB tables.

By default, this command creates the products and orders tables if they do
not exist yet. Each table has a single string partition key named after the
identifier attribute of the resource it holds.

The command shows a plan of changes before applying and asks for confirmation.

Environment variables:
  AWS_ENDPOINT_URL    - Use local DynamoDB (e.g., http://localhost:8000)
  AWS_REGION          - AWS region (defaults to us-east-1)
  AWS_PROFILE         - AWS profile to use for credentials")]
pub struct DeployCommand {
    /// Skip confirmation prompts.
    #[arg(long)]
    pub force: bool,

    /// Destroy the tables instead of creating them.
    #[arg(long)]
    pub destroy: bool,

    /// Name of the products table.
    #[arg(long, default_value = "products_table", env = "PRODUCTS_TABLE_NAME")]
    pub products_table: String,

    /// Name of the orders table.
    #[arg(long, default_value = "orders_table", env = "ORDERS_TABLE_NAME")]
    pub orders_table: String,
}

/// Main entry point for dynamodb command.
pub async fn run(command: DynamodbCommand, global: crate::Global) -> Result<()> {
    match command.action {
        DynamodbAction::Deploy(deploy_cmd) => run_deploy(deploy_cmd, &global).await,
    }
}

async fn run_deploy(cmd: DeployCommand, global: &crate::Global) -> Result<()> {
    let aws_config = client::AwsConfig::default();

    if !global.is_silent() {
        aprintln!("{} {}", p_b("Target:"), aws_config.target_display());
        aprintln!();
    }

    let dynamo_client = client::create_client(&aws_config).await;
    let tables = config::parcelhub_table_configs(&cmd.products_table, &cmd.orders_table);

    if cmd.destroy {
        let mut plans = Vec::with_capacity(tables.len());
        for table in &tables {
            let current = client::get_table_state(&dynamo_client, &table.table_name).await?;
            plans.push(planning::calculate_destroy_plan(
                current.as_ref(),
                &table.table_name,
            ));
        }

        if !global.is_silent() {
            aprintln!("{}", p_y("Destroy Plan:"));
            for line in plans.iter().flat_map(planning::format_destroy_plan) {
                aprintln!("  {}", p_r(&line));
            }
            aprintln!();
        }

        if plans.iter().all(planning::DestroyPlan::is_noop) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Nothing to destroy."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Are you sure you want to delete these tables? ALL DATA WILL BE LOST")
                .default(false)
                .interact()?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        if !global.is_silent() {
            aprintln!("{}", p_b("Deleting tables..."));
        }

        for plan in &plans {
            deploy::execute_destroy_plan(&dynamo_client, plan).await?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_g("Tables destroyed successfully."));
        }
    } else {
        let mut plans = Vec::with_capacity(tables.len());
        for table in &tables {
            let current = client::get_table_state(&dynamo_client, &table.table_name).await?;
            plans.push(planning::calculate_deploy_plan(current.as_ref(), table));
        }

        if !global.is_silent() {
            aprintln!("{}", p_c("Deploy Plan:"));
            for line in plans.iter().flat_map(planning::format_deploy_plan) {
                if line.starts_with('+') {
                    aprintln!("  {}", p_g(&line));
                } else if line.starts_with('~') {
                    aprintln!("  {}", p_y(&line));
                } else {
                    aprintln!("  {}", line);
                }
            }
            aprintln!();
        }

        // A table with the wrong key cannot be fixed here; fail before touching anything.
        if let Some(planning::DeployPlan::KeyMismatch {
            table_name,
            expected,
            found,
        }) = plans
            .iter()
            .find(|p| matches!(p, planning::DeployPlan::KeyMismatch { .. }))
        {
            return Err(DynamodbError::KeyMismatch {
                table_name: table_name.clone(),
                expected: expected.clone(),
                found: found.clone(),
            });
        }

        if plans.iter().all(planning::DeployPlan::is_noop) {
            if !global.is_silent() {
                aprintln!("{}", p_g("Infrastructure is up to date."));
            }
            return Ok(());
        }

        if !cmd.force {
            let confirmed = Confirm::new()
                .with_prompt("Apply these changes?")
                .default(true)
                .interact()?;

            if !confirmed {
                return Err(DynamodbError::UserCancelled);
            }
        }

        for plan in &plans {
            if global.is_verbose() {
                if let planning::DeployPlan::CreateTable { config } = plan {
                    aprintln!("{} {}", p_b("Creating"), config.table_name);
                }
            }
            deploy::execute_deploy_plan(&dynamo_client, plan).await?;
        }

        if !global.is_silent() {
            aprintln!("{}", p_g("Infrastructure deployed successfully."));
        }
    }

    Ok(())
}
