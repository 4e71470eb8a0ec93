//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::models::query::{parse_filter, SortDir};
use crate::infrastructure::config::loader::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "lbaas-rule")]
#[command(about = "Manage LBaaS v2 listener rules", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Networking service URL
    #[arg(long = "os-url", env = "OS_URL", global = true)]
    pub os_url: Option<String>,

    /// Pre-issued authentication token
    #[arg(long = "os-token", env = "OS_TOKEN", global = true, hide_env_values = true)]
    pub os_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List rules that belong to a given listener
    #[command(name = "rule-list")]
    RuleList(RuleListArgs),

    /// Show information of a given rule
    #[command(name = "rule-show")]
    RuleShow(RuleShowArgs),

    /// Create a rule
    #[command(name = "rule-create")]
    RuleCreate(RuleCreateArgs),

    /// Update a given rule
    #[command(name = "rule-update")]
    RuleUpdate(RuleUpdateArgs),

    /// Delete a given rule
    #[command(name = "rule-delete")]
    RuleDelete(RuleDeleteArgs),
}

/// Owning listener, shared by commands that address existing rules
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListenerArg {
    /// ID or name of the listener that this rule belongs to
    #[arg(long, value_name = "LISTENER")]
    pub listener: String,
}

#[derive(Args, Debug)]
pub struct RuleListArgs {
    #[command(flatten)]
    pub listener: ListenerArg,

    /// Fetch results in pages of this size
    #[arg(long, value_name = "SIZE", value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Sort by this attribute; repeatable, paired with --sort-dir in order
    #[arg(long, value_name = "FIELD")]
    pub sort_key: Vec<String>,

    /// Sort direction (asc or desc); repeatable
    #[arg(long, value_name = "DIR")]
    pub sort_dir: Vec<SortDir>,

    /// Only return this attribute; repeatable
    #[arg(short = 'F', long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,

    /// Server-side filter as key=value; repeatable
    #[arg(long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, String)>,
}

#[derive(Args, Debug)]
pub struct RuleShowArgs {
    /// ID or name of the rule
    #[arg(value_name = "RULE")]
    pub rule: String,

    #[command(flatten)]
    pub listener: ListenerArg,

    /// Only show this attribute; repeatable
    #[arg(short = 'F', long = "field", value_name = "FIELD")]
    pub fields: Vec<String>,
}

#[derive(Args, Debug)]
pub struct RuleCreateArgs {
    /// Set admin state up to false
    #[arg(long)]
    pub admin_state_down: bool,

    /// Description of the rule
    #[arg(long)]
    pub description: Option<String>,

    /// The name of the rule
    #[arg(long)]
    pub name: Option<String>,

    /// The haproxy rule string
    #[arg(long = "rule-str", value_name = "RULE_STR")]
    pub rule_str: String,

    /// Owner tenant ID (admin only)
    #[arg(long, value_name = "TENANT_ID")]
    pub tenant_id: Option<String>,

    /// ID or name of the listener that this rule belongs to
    #[arg(value_name = "LISTENER")]
    pub listener: String,
}

#[derive(Args, Debug)]
pub struct RuleUpdateArgs {
    /// ID or name of the rule
    #[arg(value_name = "RULE")]
    pub rule: String,

    #[command(flatten)]
    pub listener: ListenerArg,

    /// Set admin state up to false
    #[arg(long)]
    pub admin_state_down: bool,

    /// Description of the rule
    #[arg(long)]
    pub description: Option<String>,

    /// The name of the rule
    #[arg(long)]
    pub name: Option<String>,

    /// The haproxy rule string
    #[arg(long = "rule-str", value_name = "RULE_STR")]
    pub rule_str: Option<String>,
}

#[derive(Args, Debug)]
pub struct RuleDeleteArgs {
    /// ID or name of the rule
    #[arg(value_name = "RULE")]
    pub rule: String,

    #[command(flatten)]
    pub listener: ListenerArg,
}
