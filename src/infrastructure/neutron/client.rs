//! HTTP client for the networking (Neutron v2.0) REST API.
//!
//! Authenticates with a pre-issued token sent as `X-Auth-Token`. Every
//! call is a single request except `list`, which follows pagination
//! links until the server stops sending them.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde_json::Value;
use tracing::{debug, warn};

use super::errors::{error_from_reqwest, error_from_status};
use crate::domain::errors::{ClientError, ClientResult};
use crate::domain::models::{EndpointConfig, ListQuery, ResourceKind};
use crate::domain::ports::NetworkClient;

const USER_AGENT: &str = concat!("lbaas-rule/", env!("CARGO_PKG_VERSION"));

/// Configuration for the networking HTTP client
#[derive(Debug, Clone)]
pub struct NeutronClientConfig {
    /// Service root, e.g. `http://controller:9696`
    pub base_url: String,
    pub token: String,
    pub api_version: String,
    pub timeout_secs: u64,
}

impl NeutronClientConfig {
    /// Build from the endpoint section of the loaded configuration.
    ///
    /// `ConfigLoader::validate` already rejects a missing token for the
    /// CLI; this guard covers library callers that build an
    /// `EndpointConfig` themselves.
    pub fn from_endpoint(endpoint: &EndpointConfig) -> ClientResult<Self> {
        let token = endpoint
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                ClientError::Unauthorized(
                    "No auth token configured; pass --os-token or set OS_TOKEN".to_string(),
                )
            })?;
        Ok(Self {
            base_url: endpoint.url.clone(),
            token,
            api_version: endpoint.api_version.clone(),
            timeout_secs: endpoint.timeout_secs,
        })
    }
}

/// `reqwest`-backed [`NetworkClient`]
#[derive(Debug, Clone)]
pub struct NeutronClient {
    http: Client,
    token: String,
    /// Versioned endpoint, e.g. `http://controller:9696/v2.0`
    endpoint: String,
}

impl NeutronClient {
    pub fn with_config(config: NeutronClientConfig) -> ClientResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to build HTTP client: {e}")))?;

        let endpoint = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            config.api_version.trim_matches('/')
        );

        Ok(Self {
            http,
            token: config.token,
            endpoint,
        })
    }

    fn url(&self, path: &str, pairs: &[(String, String)]) -> ClientResult<Url> {
        let mut url = Url::parse(&format!("{}{path}", self.endpoint))
            .map_err(|e| ClientError::Validation(format!("Invalid endpoint URL: {e}")))?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, %url, "sending request");
        self.http
            .request(method, url)
            .header("X-Auth-Token", &self.token)
            .header("Accept", "application/json")
    }

    /// Send and return the body, or the classified error.
    async fn execute(&self, request: RequestBuilder) -> ClientResult<String> {
        let response = request.send().await.map_err(|e| error_from_reqwest(&e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| error_from_reqwest(&e))?;

        if !status.is_success() {
            warn!(%status, "request failed");
            return Err(error_from_status(status, &body));
        }
        Ok(body)
    }

    async fn execute_json(&self, request: RequestBuilder) -> ClientResult<Value> {
        let body = self.execute(request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn unwrap_member(kind: ResourceKind, mut response: Value) -> ClientResult<Value> {
    response
        .get_mut(kind.resource)
        .map(Value::take)
        .ok_or_else(|| ClientError::Decode(format!("Response has no '{}' key", kind.resource)))
}

fn next_link(kind: ResourceKind, page: &Value) -> Option<String> {
    page.get(kind.links_key())?
        .as_array()?
        .iter()
        .find(|link| link.get("rel").and_then(Value::as_str) == Some("next"))
        .and_then(|link| link.get("href"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[async_trait]
impl NetworkClient for NeutronClient {
    async fn list(&self, path: &str, kind: ResourceKind, query: &ListQuery) -> ClientResult<Vec<Value>> {
        let mut url = self.url(path, &query.to_pairs())?;
        let mut items = Vec::new();
        let mut visited = HashSet::new();

        loop {
            let mut page = self.execute_json(self.request(Method::GET, url.clone())).await?;
            let batch = page
                .get_mut(kind.collection)
                .map(Value::take)
                .and_then(|v| match v {
                    Value::Array(values) => Some(values),
                    _ => None,
                })
                .ok_or_else(|| {
                    ClientError::Decode(format!("Response has no '{}' list", kind.collection))
                })?;
            items.extend(batch);
            visited.insert(url.clone());

            // Servers may paginate on their own limit, so `next` is
            // followed whether or not a page size was asked for.
            let Some(href) = next_link(kind, &page) else {
                break;
            };
            let next = Url::parse(&href)
                .map_err(|e| ClientError::Decode(format!("Invalid next link '{href}': {e}")))?;
            if visited.contains(&next) {
                warn!(%next, "pagination link revisits a fetched page");
                break;
            }
            url = next;
        }

        debug!(collection = kind.collection, count = items.len(), "listed");
        Ok(items)
    }

    async fn show(&self, path: &str, kind: ResourceKind, fields: &[String]) -> ClientResult<Value> {
        let pairs: Vec<(String, String)> = fields
            .iter()
            .map(|f| ("fields".to_string(), f.clone()))
            .collect();
        let url = self.url(path, &pairs)?;
        let response = self.execute_json(self.request(Method::GET, url)).await?;
        unwrap_member(kind, response)
    }

    async fn create(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value> {
        let url = self.url(path, &[])?;
        let response = self
            .execute_json(self.request(Method::POST, url).json(body))
            .await?;
        unwrap_member(kind, response)
    }

    async fn update(&self, path: &str, kind: ResourceKind, body: &Value) -> ClientResult<Value> {
        let url = self.url(path, &[])?;
        let response = self
            .execute_json(self.request(Method::PUT, url).json(body))
            .await?;
        unwrap_member(kind, response)
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let url = self.url(path, &[])?;
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
