//! In-memory networking API for testing
//!
//! Stores members per collection path, applies equality filters and
//! field selection like the real service, and records every call.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::resource::LISTENERS_PATH;
use crate::domain::models::{ListQuery, ResourceKind};
use crate::domain::ports::NetworkClient;

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

/// Mock networking client backed by maps
#[derive(Default)]
pub struct MockNetworkClient {
    collections: Mutex<BTreeMap<String, Vec<Value>>>,
    calls: Mutex<Vec<RecordedCall>>,
    pending_error: Mutex<Option<ClientError>>,
}

impl MockNetworkClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a listener.
    pub fn insert_listener(&self, id: &str, name: &str) {
        self.insert(LISTENERS_PATH, serde_json::json!({"id": id, "name": name}));
    }

    /// Seed an arbitrary member into a collection.
    pub fn insert(&self, collection_path: &str, member: Value) {
        self.lock_collections()
            .entry(collection_path.to_string())
            .or_default()
            .push(member);
    }

    /// Fail the next mutating call (create, update, delete) with `error`.
    pub fn fail_next_mutation(&self, error: ClientError) {
        *self
            .pending_error
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(error);
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls().pop()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(RecordedCall {
                method,
                path: path.to_string(),
                body: body.cloned(),
            });
    }

    fn take_pending_error(&self) -> ClientResult<()> {
        match self
            .pending_error
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .take()
        {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn lock_collections(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, Vec<Value>>> {
        self.collections
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn unwrap_member(kind: ResourceKind, body: &Value) -> ClientResult<Map<String, Value>> {
        body.get(kind.resource)
            .and_then(Value::as_object)
            .cloned()
            .ok_or_else(|| {
                ClientError::Validation(format!("Request body must contain '{}'", kind.resource))
            })
    }
}

fn split_member_path(path: &str) -> ClientResult<(&str, &str)> {
    path.rsplit_once('/')
        .ok_or_else(|| ClientError::NotFound(format!("No resource at {path}")))
}

fn not_found(kind: ResourceKind, id: &str) -> ClientError {
    ClientError::NotFound(format!("{} {} could not be found.", kind.resource, id))
}

fn matches_filters(member: &Value, filters: &[(String, String)]) -> bool {
    filters.iter().all(|(key, expected)| match member.get(key) {
        Some(Value::String(s)) => s == expected,
        Some(other) => other.to_string() == *expected,
        None => false,
    })
}

fn select_fields(member: &Value, fields: &[String]) -> Value {
    if fields.is_empty() {
        return member.clone();
    }
    let selected: Map<String, Value> = fields
        .iter()
        .filter_map(|f| member.get(f).map(|v| (f.clone(), v.clone())))
        .collect();
    Value::Object(selected)
}

#[async_trait]
impl NetworkClient for MockNetworkClient {
    async fn list(&self, path: &str, _kind: ResourceKind, query: &ListQuery) -> ClientResult<Vec<Value>> {
        self.record("GET", path, None);
        let collections = self.lock_collections();
        let members = collections.get(path).map(Vec::as_slice).unwrap_or_default();
        Ok(members
            .iter()
            .filter(|m| matches_filters(m, &query.filters))
            .map(|m| select_fields(m, &query.fields))
            .collect())
    }

    async fn show(&self, path: &str, kind: ResourceKind, fields: &[String]) -> ClientResult<Value> {
        self.record("GET", path, None);
        let (collection, id) = split_member_path(path)?;
        let collections = self.lock_collections();
        collections
            .get(collection)
            .and_then(|members| members.iter().find(|m| m["id"] == id))
            .map(|m| select_fields(m, fields))
            .ok_or_else(|| not_found(kind, id))
    }

    async fn create(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value> {
        self.record("POST", path, Some(body));
        self.take_pending_error()?;
        let mut member = Self::unwrap_member(kind, body)?;
        member.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        member
            .entry("admin_state_up".to_string())
            .or_insert(Value::Bool(true));
        for key in ["name", "description"] {
            member
                .entry(key.to_string())
                .or_insert_with(|| Value::String(String::new()));
        }
        let member = Value::Object(member);
        self.insert(path, member.clone());
        Ok(member)
    }

    async fn update(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value> {
        self.record("PUT", path, Some(body));
        self.take_pending_error()?;
        let changes = Self::unwrap_member(kind, body)?;
        let (collection, id) = split_member_path(path)?;
        let mut collections = self.lock_collections();
        let member = collections
            .get_mut(collection)
            .and_then(|members| members.iter_mut().find(|m| m["id"] == id))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| not_found(kind, id))?;
        member.extend(changes);
        Ok(Value::Object(member.clone()))
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        self.record("DELETE", path, None);
        self.take_pending_error()?;
        let (collection, id) = split_member_path(path)?;
        let mut collections = self.lock_collections();
        let members = collections
            .get_mut(collection)
            .ok_or_else(|| ClientError::NotFound(format!("No resource at {path}")))?;
        let before = members.len();
        members.retain(|m| m["id"] != id);
        if members.len() == before {
            return Err(ClientError::NotFound(format!("No resource at {path}")));
        }
        Ok(())
    }
}
