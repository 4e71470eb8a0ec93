pub mod config;
pub mod query;
pub mod resource;
pub mod rule;

pub use config::{Config, EndpointConfig, LoggingConfig};
pub use query::{ListQuery, SortDir};
pub use resource::{ResourceKind, LISTENER, RULE};
pub use rule::{CreateRuleRequest, Rule, RuleBody, UpdateRuleRequest};
