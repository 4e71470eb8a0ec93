//! lbaas-rule - command-line client for LBaaS v2 listener rules
//!
//! Binds the `rule-list`, `rule-show`, `rule-create`, `rule-update` and
//! `rule-delete` subcommands to the rule resource nested under a
//! listener of the networking REST API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): resource models, errors and the client port
//! - **Service Layer** (`services`): name-or-id resolution and rule operations
//! - **Infrastructure Layer** (`infrastructure`): HTTP adapter, config, logging
//! - **CLI Layer** (`cli`): command-line interface

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::errors::{ClientError, ClientResult};
pub use domain::models::{
    Config, CreateRuleRequest, ListQuery, Rule, RuleBody, SortDir, UpdateRuleRequest,
};
pub use domain::ports::NetworkClient;
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ListenerScope, RuleService};
