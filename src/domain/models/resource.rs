//! Resource naming and REST paths.

/// Member and collection keys for a REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Member key, e.g. `listener`
    pub resource: &'static str,
    /// Collection key, e.g. `listeners`
    pub collection: &'static str,
}

impl ResourceKind {
    /// Key of the pagination links array in a collection response.
    pub fn links_key(&self) -> String {
        format!("{}_links", self.collection)
    }
}

pub const LISTENER: ResourceKind = ResourceKind {
    resource: "listener",
    collection: "listeners",
};

pub const RULE: ResourceKind = ResourceKind {
    resource: super::rule::RULE_RESOURCE,
    collection: super::rule::RULE_COLLECTION,
};

/// Collection path of listeners.
pub const LISTENERS_PATH: &str = "/lbaas/listeners";

/// Collection path of the rules owned by `listener_id` (the `lbaas_rule`
/// resource).
pub fn rules_path(listener_id: &str) -> String {
    format!("{LISTENERS_PATH}/{listener_id}/rules")
}

/// Member path of one rule.
pub fn rule_path(listener_id: &str, rule_id: &str) -> String {
    format!("{}/{rule_id}", rules_path(listener_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_paths() {
        assert_eq!(rules_path("l1"), "/lbaas/listeners/l1/rules");
        assert_eq!(rule_path("l1", "r9"), "/lbaas/listeners/l1/rules/r9");
    }

    #[test]
    fn test_links_key() {
        assert_eq!(RULE.links_key(), "rules_links");
        assert_eq!(LISTENER.links_key(), "listeners_links");
    }
}
