//! Service layer: resource resolution and rule operations.

pub mod resource_resolver;
pub mod rule_service;

pub use resource_resolver::find_resource_id_by_name_or_id;
pub use rule_service::{ListenerScope, RuleService};
