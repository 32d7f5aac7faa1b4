use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::failure::{FailureCounters, FailureKind};

pub const DOMAIN_HINT: &str = " travel destination";
pub const RELEVANCE_KEYWORD: &str = "hotel";
pub const NO_RESULTS_MESSAGE: &str = "No results found on Google for your query.";
pub const SEARCH_ERROR_MESSAGE: &str =
    "There was an error fetching results from Google. Please try again later.";

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Search API returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchItem {
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    pub link: String,
}

/// Raw web search: query in, ranked items out.
#[async_trait]
pub trait SearchEngine: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError>;
}

pub struct GoogleSearchClient {
    client: Client,
    url: String,
    api_key: String,
    cse_id: String,
}

#[derive(Serialize)]
struct GoogleQuery<'a> {
    q: &'a str,
    key: &'a str,
    cx: &'a str,
}

#[derive(Deserialize)]
struct GoogleResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

impl GoogleSearchClient {
    pub fn new(url: String, api_key: String, cse_id: String) -> Self {
        GoogleSearchClient {
            client: Client::new(),
            url,
            api_key,
            cse_id,
        }
    }
}

#[async_trait]
impl SearchEngine for GoogleSearchClient {
    async fn search(&self, query: &str) -> Result<Vec<SearchItem>, SearchError> {
        let res = self
            .client
            .get(&self.url)
            .query(&GoogleQuery {
                q: query,
                key: &self.api_key,
                cx: &self.cse_id,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let response = res.json::<GoogleResponse>().await?;
        log::debug!("Google returned {} items for {:?}", response.items.len(), query);

        Ok(response.items)
    }
}

#[derive(Clone)]
pub struct WebSearchFallback {
    engine: Arc<dyn SearchEngine>,
    failures: Arc<FailureCounters>,
}

impl WebSearchFallback {
    pub fn new(engine: Arc<dyn SearchEngine>, failures: Arc<FailureCounters>) -> Self {
        WebSearchFallback { engine, failures }
    }

    /// Always answers with something the user can read.
    pub async fn search(&self, query: &str) -> String {
        let search_query = format!("{}{}", query, DOMAIN_HINT);
        log::info!("Falling back to Google search with query: {:?}", search_query);

        match self.engine.search(&search_query).await {
            Ok(items) => match pick_top_result(&items) {
                Some(item) => format!("{}: {}", item.title, item.link),
                None => NO_RESULTS_MESSAGE.to_string(),
            },
            Err(e) => {
                self.failures.record(FailureKind::FallbackFailure);
                log::error!("[{}] Error fetching Google results: {}", FailureKind::FallbackFailure, e);
                SEARCH_ERROR_MESSAGE.to_string()
            }
        }
    }
}

/// First item mentioning the relevance keyword, else the first item.
pub fn pick_top_result(items: &[SearchItem]) -> Option<&SearchItem> {
    items
        .iter()
        .find(|item| {
            item.title.to_lowercase().contains(RELEVANCE_KEYWORD)
                || item.snippet.to_lowercase().contains(RELEVANCE_KEYWORD)
        })
        .or_else(|| items.first())
}
