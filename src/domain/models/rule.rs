//! Rule resource and its request bodies.
//!
//! A rule is an opaque traffic-matching expression (typically HAProxy ACL
//! syntax) attached to exactly one listener.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Member key wrapping a single rule in request and response bodies.
pub const RULE_RESOURCE: &str = "rule";

/// Collection key wrapping a list of rules.
pub const RULE_COLLECTION: &str = "rules";

/// Columns shown by `rule-list`, in display order.
pub const RULE_LIST_COLUMNS: [&str; 5] = ["id", "name", "description", "rule", "admin_state_up"];

/// A rule as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Server-assigned identifier
    pub id: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// The rule expression
    #[serde(default)]
    pub rule: String,

    #[serde(default = "default_admin_state_up")]
    pub admin_state_up: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,

    /// Any additional attributes the server reports
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const fn default_admin_state_up() -> bool {
    true
}

/// Body of a create request.
///
/// `admin_state_up` and `rule` are always sent; the optional attributes
/// are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateRuleRequest {
    pub admin_state_up: bool,

    pub rule: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

impl CreateRuleRequest {
    /// Build a request for `rule` with the admin state up.
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            admin_state_up: true,
            rule: rule.into(),
            name: None,
            description: None,
            tenant_id: None,
        }
    }
}

/// Body of an update request. Only supplied fields are serialized, so
/// omitted attributes keep their server-side value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRuleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_state_up: Option<bool>,
}

impl UpdateRuleRequest {
    /// True when no attribute would be sent.
    pub fn is_empty(&self) -> bool {
        self.rule.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.admin_state_up.is_none()
    }
}

/// Wraps a member payload under its resource key, e.g. `{"rule": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBody<T> {
    pub rule: T,
}

impl<T> RuleBody<T> {
    pub const fn new(rule: T) -> Self {
        Self { rule }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_body_minimal() {
        let body = RuleBody::new(CreateRuleRequest::new("acl is_https"));
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"rule": {"admin_state_up": true, "rule": "acl is_https"}})
        );
    }

    #[test]
    fn test_create_body_with_optionals() {
        let request = CreateRuleRequest {
            admin_state_up: false,
            rule: "acl host_www hdr(host) -i www".to_string(),
            name: Some("www".to_string()),
            description: Some("route www".to_string()),
            tenant_id: Some("t-1".to_string()),
        };
        let value = serde_json::to_value(RuleBody::new(request)).unwrap();
        assert_eq!(value["rule"]["admin_state_up"], json!(false));
        assert_eq!(value["rule"]["name"], json!("www"));
        assert_eq!(value["rule"]["description"], json!("route www"));
        assert_eq!(value["rule"]["tenant_id"], json!("t-1"));
    }

    #[test]
    fn test_update_body_only_name() {
        let request = UpdateRuleRequest {
            name: Some("renamed".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
        assert_eq!(
            serde_json::to_value(RuleBody::new(request)).unwrap(),
            json!({"rule": {"name": "renamed"}})
        );
    }

    #[test]
    fn test_update_default_is_empty() {
        assert!(UpdateRuleRequest::default().is_empty());
    }

    #[test]
    fn test_rule_keeps_unknown_fields() {
        let rule: Rule = serde_json::from_value(json!({
            "id": "r1",
            "rule": "acl a",
            "listener_id": "l1",
            "admin_state_up": false
        }))
        .unwrap();
        assert_eq!(rule.id, "r1");
        assert!(!rule.admin_state_up);
        assert_eq!(rule.name, None);
        assert_eq!(rule.extra.get("listener_id"), Some(&json!("l1")));
    }

    #[test]
    fn test_rule_admin_state_defaults_up() {
        let rule: Rule = serde_json::from_value(json!({"id": "r1", "rule": "acl a"})).unwrap();
        assert!(rule.admin_state_up);
    }
}
