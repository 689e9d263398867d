// src/infrastructure/pocket.rs
use crate::application::ArticleSource;
use crate::config::PocketCredentials;
use crate::constants::POCKET_GET_URL;
use crate::domain::{Article, ServiceError};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use super::{ensure_success, transport_error};

pub struct PocketClient {
    endpoint: String,
    credentials: PocketCredentials,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    /// Object keyed by item id; Pocket sends `[]` instead of `{}` when nothing matches
    #[serde(default)]
    list: Value,
}

#[derive(Debug, Deserialize)]
struct PocketItem {
    #[serde(default)]
    item_id: Option<String>,
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    resolved_title: String,
    #[serde(default)]
    given_title: String,
    #[serde(default)]
    resolved_url: String,
    #[serde(default)]
    given_url: String,
}

fn first_non_empty(preferred: String, fallback: String) -> String {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}

impl PocketItem {
    fn into_article(self, key: String) -> Article {
        let id = [self.item_id, self.id]
            .into_iter()
            .flatten()
            .find(|id| !id.is_empty())
            .unwrap_or(key);
        Article {
            id,
            title: first_non_empty(self.resolved_title, self.given_title),
            url: first_non_empty(self.resolved_url, self.given_url),
        }
    }
}

/// Flatten a retrieve response body into articles. Order is unspecified.
pub fn parse_unread_articles(body: &str) -> Result<Vec<Article>, ServiceError> {
    let response: RetrieveResponse =
        serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))?;

    match response.list {
        Value::Object(items) => items
            .into_iter()
            .map(|(key, raw)| {
                let item: PocketItem = serde_json::from_value(raw).map_err(|e| {
                    ServiceError::Decode(format!("item '{}': {}", key, e))
                })?;
                Ok(item.into_article(key))
            })
            .collect(),
        Value::Null => Ok(Vec::new()),
        Value::Array(rest) if rest.is_empty() => Ok(Vec::new()),
        other => Err(ServiceError::Decode(format!(
            "expected 'list' to be an object keyed by item id, got {}",
            other
        ))),
    }
}

impl PocketClient {
    pub fn new(credentials: PocketCredentials) -> Self {
        Self::with_http_client(POCKET_GET_URL, credentials, Client::new())
    }

    pub fn with_http_client(endpoint: &str, credentials: PocketCredentials, client: Client) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            credentials,
            client,
        }
    }
}

impl ArticleSource for PocketClient {
    #[instrument(level = "debug", skip(self))]
    fn fetch_unread_articles(&mut self) -> Result<Vec<Article>, ServiceError> {
        debug!(endpoint = %self.endpoint, "Requesting unread articles");
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("consumer_key", self.credentials.consumer_key.as_str()),
                ("access_token", self.credentials.access_token.as_str()),
                ("state", "unread"),
                ("detailType", "simple"),
            ])
            .send()
            // the query string carries credentials
            .map_err(|e| transport_error(e.without_url()))?;

        let body = ensure_success(resp)?
            .text()
            .map_err(|e| transport_error(e.without_url()))?;
        parse_unread_articles(&body)
    }
}
