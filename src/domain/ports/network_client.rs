use async_trait::async_trait;
use serde_json::Value;

use crate::domain::errors::ClientResult;
use crate::domain::models::{ListQuery, ResourceKind};

/// Port trait for the networking REST API.
///
/// Paths are relative to the versioned endpoint (e.g. `/lbaas/listeners`).
/// Implementations map HTTP failures onto [`ClientError`] variants;
/// a missing resource is always `NotFound`.
///
/// [`ClientError`]: crate::domain::errors::ClientError
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Fetch every item of a collection.
    ///
    /// Implementations follow the `<collection>_links` `next` link until
    /// the server stops returning one, concatenating the pages in order.
    /// This holds with or without `query.page_size`, since servers can
    /// apply their own page limit. A link to an already fetched page
    /// ends the walk.
    async fn list(&self, path: &str, kind: ResourceKind, query: &ListQuery) -> ClientResult<Vec<Value>>;

    /// Fetch one member, unwrapped from its resource key.
    async fn show(&self, path: &str, kind: ResourceKind, fields: &[String]) -> ClientResult<Value>;

    /// POST `body` to a collection and return the created member, unwrapped.
    async fn create(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value>;

    /// PUT `body` to a member path and return the updated member, unwrapped.
    async fn update(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value>;

    /// DELETE a member.
    async fn delete(&self, path: &str) -> ClientResult<()>;
}
