//! Name-or-id resolution for REST resources.
//!
//! A user may name a resource either by its id or by its `name`
//! attribute. UUID-shaped input is tried as an id first; anything that
//! does not match by id is then looked up by name.

use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{ListQuery, ResourceKind};
use crate::domain::ports::NetworkClient;

/// Resolve `name_or_id` within the collection at `path` to a canonical id.
///
/// Fails with `NotFound` when nothing matches and `Ambiguous` when more
/// than one resource carries the name.
pub async fn find_resource_id_by_name_or_id(
    client: &dyn NetworkClient,
    kind: ResourceKind,
    path: &str,
    name_or_id: &str,
) -> ClientResult<String> {
    if name_or_id.is_empty() {
        return Err(ClientError::Validation(format!(
            "{} name or id must not be empty",
            kind.resource
        )));
    }

    if Uuid::parse_str(name_or_id).is_ok() {
        let ids = lookup_ids(client, kind, path, "id", name_or_id).await?;
        if let [id] = ids.as_slice() {
            return Ok(id.clone());
        }
        debug!(resource = kind.resource, value = name_or_id, "no match by id, trying name");
    }

    let ids = lookup_ids(client, kind, path, "name", name_or_id).await?;
    match ids.len() {
        0 => Err(ClientError::NotFound(format!(
            "Unable to find {} with name or id '{}'",
            kind.resource, name_or_id
        ))),
        1 => Ok(ids[0].clone()),
        _ => Err(ClientError::Ambiguous(format!(
            "Multiple {} matches found for name '{}', use an ID to be more specific.",
            kind.resource, name_or_id
        ))),
    }
}

async fn lookup_ids(
    client: &dyn NetworkClient,
    kind: ResourceKind,
    path: &str,
    attribute: &str,
    value: &str,
) -> ClientResult<Vec<String>> {
    let query = ListQuery {
        fields: vec!["id".to_string()],
        filters: vec![(attribute.to_string(), value.to_string())],
        ..Default::default()
    };
    client
        .list(path, kind, &query)
        .await?
        .iter()
        .map(|item| extract_id(kind, item))
        .collect()
}

fn extract_id(kind: ResourceKind, item: &Value) -> ClientResult<String> {
    item.get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ClientError::Decode(format!("{} entry without an id", kind.resource)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::resource::LISTENERS_PATH;
    use crate::domain::models::LISTENER;
    use crate::infrastructure::neutron::MockNetworkClient;
    use serde_json::json;

    const ID_A: &str = "3f2a9c1e-8b7d-4e6f-a5c4-1b2d3e4f5a6b";
    const ID_B: &str = "9d8c7b6a-5f4e-4d3c-b2a1-0f9e8d7c6b5a";

    async fn resolve(client: &MockNetworkClient, value: &str) -> ClientResult<String> {
        find_resource_id_by_name_or_id(client, LISTENER, LISTENERS_PATH, value).await
    }

    #[tokio::test]
    async fn test_resolves_by_id() {
        let client = MockNetworkClient::new();
        client.insert_listener(ID_A, "web");
        assert_eq!(resolve(&client, ID_A).await.unwrap(), ID_A);

        let call = client.last_call().unwrap();
        assert_eq!(call.path, LISTENERS_PATH);
    }

    #[tokio::test]
    async fn test_resolves_by_name() {
        let client = MockNetworkClient::new();
        client.insert_listener(ID_A, "web");
        client.insert_listener(ID_B, "api");
        assert_eq!(resolve(&client, "api").await.unwrap(), ID_B);
        // Non-UUID input skips the id lookup
        assert_eq!(client.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_uuid_shaped_name_falls_back_to_name() {
        let client = MockNetworkClient::new();
        client.insert_listener(ID_A, ID_B);
        assert_eq!(resolve(&client, ID_B).await.unwrap(), ID_A);
        assert_eq!(client.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_no_match_is_not_found() {
        let client = MockNetworkClient::new();
        client.insert_listener(ID_A, "web");
        let err = resolve(&client, "db").await.unwrap_err();
        assert!(matches!(err, ClientError::NotFound(_)));
        assert_eq!(err.to_string(), "Unable to find listener with name or id 'db'");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_ambiguous() {
        let client = MockNetworkClient::new();
        client.insert_listener(ID_A, "web");
        client.insert_listener(ID_B, "web");
        let err = resolve(&client, "web").await.unwrap_err();
        assert!(matches!(err, ClientError::Ambiguous(_)));
        assert!(err.to_string().contains("use an ID to be more specific"));
    }

    #[tokio::test]
    async fn test_empty_value_is_rejected() {
        let client = MockNetworkClient::new();
        let err = resolve(&client, "").await.unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn test_entry_without_id_is_decode_error() {
        let client = MockNetworkClient::new();
        client.insert(LISTENERS_PATH, json!({"name": "web"}));
        let err = resolve(&client, "web").await.unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
