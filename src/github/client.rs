//! GitHub REST client for user search

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use thiserror::Error;

use super::models::{SearchResponse, SuggestionItem};
use crate::config::{Credentials, SearchConfig};
use crate::error::GhSuggestError;

const USER_AGENT_VALUE: &str = concat!("ghsuggest/", env!("CARGO_PKG_VERSION"));
const ACCEPT_VALUE: &str = "application/vnd.github.v3+json";

/// Errors that can occur during a user lookup
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("GitHub API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Something that can search GitHub users.
///
/// Returns a boxed future so implementations can be shared as
/// `Arc<dyn UserLookup>` between the pipeline task and the user list.
pub trait UserLookup: Send + Sync {
    fn search_users<'a>(
        &'a self,
        query: &'a str,
        per_page: u8,
    ) -> BoxFuture<'a, Result<Vec<SuggestionItem>, LookupError>>;
}

/// HTTP client for `GET /search/users`
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl GitHubClient {
    /// Create a client with the GitHub headers and configured timeout
    pub fn new(credentials: Credentials, config: &SearchConfig) -> Result<Self, GhSuggestError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| GhSuggestError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// Build the search request without sending it
    pub fn search_request(&self, query: &str, per_page: u8) -> Result<reqwest::Request, LookupError> {
        let per_page = per_page.to_string();
        self.http
            .get(format!("{}/search/users", self.base_url))
            .query(&[
                ("q", query),
                ("per_page", per_page.as_str()),
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
            ])
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))
    }

    async fn fetch(&self, query: &str, per_page: u8) -> Result<Vec<SuggestionItem>, LookupError> {
        let request = self.search_request(query, per_page)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LookupError::Api {
                code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;
        parse_search_body(&body)
    }
}

impl UserLookup for GitHubClient {
    fn search_users<'a>(
        &'a self,
        query: &'a str,
        per_page: u8,
    ) -> BoxFuture<'a, Result<Vec<SuggestionItem>, LookupError>> {
        Box::pin(self.fetch(query, per_page))
    }
}

/// Decode a `/search/users` body into its items
pub fn parse_search_body(body: &str) -> Result<Vec<SuggestionItem>, LookupError> {
    serde_json::from_str::<SearchResponse>(body)
        .map(|response| response.items)
        .map_err(|e| LookupError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
