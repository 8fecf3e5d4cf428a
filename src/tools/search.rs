//! Search tool implementation backed by the Tavily Search API.
//!
//! The observation shape is a JSON array of `{title, url, content}`
//! objects. `max_results` defaults to 1, so the agent usually sees a
//! single result per search.

use crate::config::SearchConfig;
use crate::tools::registry::Tool;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

/// Transient failures are retried this many extra times. Search is a
/// read-only call, so retrying is safe.
const MAX_RETRIES: u32 = 2;

pub struct TavilySearchTool {
    client: Client,
    config: SearchConfig,
}

impl TavilySearchTool {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    fn api_url(&self) -> String {
        format!("{}/search", self.config.base_url.trim_end_matches('/'))
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<TavilyResult>> {
        let request = TavilyRequest {
            api_key: &self.config.api_key,
            query,
            max_results,
        };
        let url = self.api_url();

        let mut attempt = 0;
        loop {
            match self.try_search(&url, &request).await {
                Ok(results) => return Ok(results),
                Err(e) if attempt < MAX_RETRIES => {
                    attempt += 1;
                    let backoff = Duration::from_millis(250 * 2u64.pow(attempt));
                    tracing::warn!(error = %e, attempt, "search failed, retrying");
                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn try_search(&self, url: &str, request: &TavilyRequest<'_>) -> Result<Vec<TavilyResult>> {
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::Tool(format!("Tavily request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Tool(format!("Tavily HTTP {}: {}", status, body)));
        }

        let parsed: TavilyResponse = response
            .json()
            .await
            .map_err(|e| AppError::Tool(format!("Tavily response parse error: {}", e)))?;

        Ok(parsed.results)
    }
}

#[async_trait]
impl Tool for TavilySearchTool {
    fn name(&self) -> &str {
        "tavily_search_results"
    }

    fn description(&self) -> &str {
        "Search the web for current information and return relevant results"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        // The model sometimes sends a bare string instead of an object
        let query = match &args {
            Value::String(s) => s.as_str(),
            _ => args
                .get("query")
                .and_then(|v| v.as_str())
                .ok_or_else(|| AppError::InvalidInput("Missing 'query' parameter".to_string()))?,
        };

        tracing::info!(%query, "executing web search");
        let results = self.search(query, self.config.max_results).await?;

        let observation: Vec<Value> = results
            .iter()
            .map(|r| {
                json!({
                    "title": r.title,
                    "url": r.url,
                    "content": r.content
                })
            })
            .collect();

        Ok(Value::Array(observation))
    }
}

// ============= Wire Types =============

#[derive(Serialize)]
struct TavilyRequest<'a> {
    api_key: &'a str,
    query: &'a str,
    max_results: usize,
}

#[derive(Deserialize)]
struct TavilyResponse {
    #[serde(default)]
    results: Vec<TavilyResult>,
}

#[derive(Deserialize)]
struct TavilyResult {
    #[serde(default)]
    title: String,
    url: String,
    #[serde(default)]
    content: String,
}
