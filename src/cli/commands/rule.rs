//! `rule-*` command handlers.

use anyhow::{Context, Result};
use serde_json::{json, Value};

use crate::cli::display::{detail_table, members_table, print_json, render_list};
use crate::cli::types::{
    Commands, RuleCreateArgs, RuleDeleteArgs, RuleListArgs, RuleShowArgs, RuleUpdateArgs,
};
use crate::domain::models::rule::RULE_LIST_COLUMNS;
use crate::domain::models::{CreateRuleRequest, ListQuery, UpdateRuleRequest};
use crate::services::RuleService;

/// Dispatch a parsed command.
pub async fn execute(command: Commands, service: &RuleService, json: bool) -> Result<()> {
    match command {
        Commands::RuleList(args) => handle_list(service, args, json).await,
        Commands::RuleShow(args) => handle_show(service, args, json).await,
        Commands::RuleCreate(args) => handle_create(service, args, json).await,
        Commands::RuleUpdate(args) => handle_update(service, args, json).await,
        Commands::RuleDelete(args) => handle_delete(service, args, json).await,
    }
}

pub fn list_query(args: &RuleListArgs) -> Result<ListQuery> {
    let query = ListQuery {
        page_size: args.page_size,
        fields: args.fields.clone(),
        filters: args.filters.clone(),
        ..Default::default()
    };
    Ok(query.with_sort(&args.sort_key, &args.sort_dir)?)
}

/// Columns to display: the default list columns, restricted to the
/// requested fields when any were given.
pub fn list_columns(fields: &[String]) -> Vec<&str> {
    if fields.is_empty() {
        return RULE_LIST_COLUMNS.to_vec();
    }
    let mut columns: Vec<&str> = RULE_LIST_COLUMNS
        .iter()
        .copied()
        .filter(|c| fields.iter().any(|f| f.as_str() == *c))
        .collect();
    for field in fields {
        if !columns.contains(&field.as_str()) {
            columns.push(field.as_str());
        }
    }
    columns
}

pub fn create_request(args: &RuleCreateArgs) -> CreateRuleRequest {
    CreateRuleRequest {
        admin_state_up: !args.admin_state_down,
        rule: args.rule_str.clone(),
        name: args.name.clone(),
        description: args.description.clone(),
        tenant_id: args.tenant_id.clone(),
    }
}

/// Only flags the user gave end up in the body.
pub fn update_request(args: &RuleUpdateArgs) -> UpdateRuleRequest {
    UpdateRuleRequest {
        rule: args.rule_str.clone(),
        name: args.name.clone(),
        description: args.description.clone(),
        admin_state_up: args.admin_state_down.then_some(false),
    }
}

/// Handle rule-list command
pub async fn handle_list(service: &RuleService, args: RuleListArgs, json: bool) -> Result<()> {
    let query = list_query(&args)?;
    let rules = service
        .list(&args.listener.listener, &query)
        .await
        .context("Failed to list rules")?;

    if json {
        print_json(&rules)?;
    } else {
        let columns = list_columns(&args.fields);
        let table = members_table(&columns, &rules);
        println!("{}", render_list("rule", &table, rules.len()));
    }

    Ok(())
}

/// Handle rule-show command
pub async fn handle_show(service: &RuleService, args: RuleShowArgs, json: bool) -> Result<()> {
    let rule = service
        .show(&args.listener.listener, &args.rule, &args.fields)
        .await
        .context("Failed to retrieve rule")?;

    if json {
        print_json(&rule)?;
    } else {
        println!("{}", detail_table(&rule));
    }

    Ok(())
}

/// Handle rule-create command
pub async fn handle_create(service: &RuleService, args: RuleCreateArgs, json: bool) -> Result<()> {
    let rule = service
        .create(&args.listener, create_request(&args))
        .await
        .context("Failed to create rule")?;

    if json {
        print_json(&rule)?;
    } else {
        println!("Created a new rule:");
        println!("{}", detail_table(&serde_json::to_value(&rule)?));
    }

    Ok(())
}

/// Handle rule-update command
pub async fn handle_update(service: &RuleService, args: RuleUpdateArgs, json: bool) -> Result<()> {
    let rule = service
        .update(&args.listener.listener, &args.rule, update_request(&args))
        .await
        .context("Failed to update rule")?;

    if json {
        print_json(&rule)?;
    } else {
        println!("Updated rule: {}", args.rule);
    }

    Ok(())
}

/// Handle rule-delete command
pub async fn handle_delete(service: &RuleService, args: RuleDeleteArgs, json: bool) -> Result<()> {
    let rule_id = service
        .delete(&args.listener.listener, &args.rule)
        .await
        .context("Failed to delete rule")?;

    if json {
        let output: Value = json!({ "deleted": rule_id });
        print_json(&output)?;
    } else {
        println!("Deleted rule: {}", args.rule);
    }

    Ok(())
}
