//! Rule operations scoped to a parent listener.

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, instrument};

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::resource::{self, LISTENERS_PATH};
use crate::domain::models::{
    CreateRuleRequest, ListQuery, Rule, RuleBody, UpdateRuleRequest, LISTENER, RULE,
};
use crate::domain::ports::NetworkClient;
use crate::services::resource_resolver::find_resource_id_by_name_or_id;

/// A resolved parent listener.
///
/// Every rule request is built from a scope, so no request can be sent
/// without a resolved listener id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerScope {
    listener_id: String,
}

impl ListenerScope {
    /// Resolve a listener name or id.
    pub async fn resolve(client: &dyn NetworkClient, listener: &str) -> ClientResult<Self> {
        let listener_id =
            find_resource_id_by_name_or_id(client, LISTENER, LISTENERS_PATH, listener).await?;
        Ok(Self { listener_id })
    }

    pub fn listener_id(&self) -> &str {
        &self.listener_id
    }

    pub fn rules_path(&self) -> String {
        resource::rules_path(&self.listener_id)
    }

    pub fn rule_path(&self, rule_id: &str) -> String {
        resource::rule_path(&self.listener_id, rule_id)
    }

    /// Resolve a rule name or id among this listener's rules.
    pub async fn resolve_rule(&self, client: &dyn NetworkClient, rule: &str) -> ClientResult<String> {
        find_resource_id_by_name_or_id(client, RULE, &self.rules_path(), rule).await
    }
}

/// Rule CRUD over a [`NetworkClient`].
#[derive(Clone)]
pub struct RuleService {
    client: Arc<dyn NetworkClient>,
}

impl RuleService {
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }

    async fn scope(&self, listener: &str) -> ClientResult<ListenerScope> {
        ListenerScope::resolve(self.client.as_ref(), listener).await
    }

    /// List the rules of a listener. Items are raw so field selection
    /// can drop attributes.
    #[instrument(skip(self, query))]
    pub async fn list(&self, listener: &str, query: &ListQuery) -> ClientResult<Vec<Value>> {
        let scope = self.scope(listener).await?;
        self.client.list(&scope.rules_path(), RULE, query).await
    }

    /// Show one rule, optionally restricted to `fields`.
    #[instrument(skip(self))]
    pub async fn show(&self, listener: &str, rule: &str, fields: &[String]) -> ClientResult<Value> {
        let scope = self.scope(listener).await?;
        let rule_id = scope.resolve_rule(self.client.as_ref(), rule).await?;
        self.client.show(&scope.rule_path(&rule_id), RULE, fields).await
    }

    #[instrument(skip(self, request), fields(rule = %request.rule))]
    pub async fn create(&self, listener: &str, request: CreateRuleRequest) -> ClientResult<Rule> {
        let scope = self.scope(listener).await?;
        let body = serde_json::to_value(RuleBody::new(request))?;
        let created = self.client.create(&scope.rules_path(), RULE, &body).await?;
        let rule: Rule = serde_json::from_value(created)?;
        info!(rule_id = %rule.id, listener_id = scope.listener_id(), "created rule");
        Ok(rule)
    }

    /// Apply a partial update. An empty request is rejected before any
    /// lookup is made.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        listener: &str,
        rule: &str,
        request: UpdateRuleRequest,
    ) -> ClientResult<Rule> {
        if request.is_empty() {
            return Err(ClientError::Validation(format!(
                "Must specify new values to update {}",
                RULE.resource
            )));
        }
        let scope = self.scope(listener).await?;
        let rule_id = scope.resolve_rule(self.client.as_ref(), rule).await?;
        let body = serde_json::to_value(RuleBody::new(request))?;
        let updated = self
            .client
            .update(&scope.rule_path(&rule_id), RULE, &body)
            .await?;
        info!(rule_id = %rule_id, listener_id = scope.listener_id(), "updated rule");
        Ok(serde_json::from_value(updated)?)
    }

    /// Delete a rule and return the id that was removed.
    #[instrument(skip(self))]
    pub async fn delete(&self, listener: &str, rule: &str) -> ClientResult<String> {
        let scope = self.scope(listener).await?;
        let rule_id = scope.resolve_rule(self.client.as_ref(), rule).await?;
        self.client.delete(&scope.rule_path(&rule_id)).await?;
        info!(rule_id = %rule_id, listener_id = scope.listener_id(), "deleted rule");
        Ok(rule_id)
    }
}
