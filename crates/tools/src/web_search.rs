//! Web search tool backed by the Serper Google Search API.
//!
//! Sends `POST {base_url}/search` with the `X-API-KEY` header and turns the
//! organic results into a compact text block the model can read.

use async_trait::async_trait;
use jobcrew_core::error::ToolError;
use jobcrew_core::tool::{Tool, ToolResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name the web search tool is registered under.
pub const WEB_SEARCH: &str = "web_search";

const MAX_RESULTS: u64 = 20;

pub struct SerperSearchTool {
    base_url: String,
    api_key: String,
    default_results: u32,
    client: reqwest::Client,
}

impl SerperSearchTool {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>, default_results: u32) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            default_results,
            client,
        }
    }
}

#[async_trait]
impl Tool for SerperSearchTool {
    fn name(&self) -> &str {
        WEB_SEARCH
    }

    fn description(&self) -> &str {
        "Search the internet with a Google query. Returns titles, links, and snippets of the \
         top results. Use it to find current job listings, salary data, and company information."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "num_results": {
                    "type": "integer",
                    "description": "Number of results to return (default 10, max 20)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<ToolResult, ToolError> {
        let query = arguments["query"]
            .as_str()
            .filter(|q| !q.trim().is_empty())
            .ok_or_else(|| ToolError::InvalidArguments("Missing 'query' argument".into()))?;

        let num = arguments["num_results"]
            .as_u64()
            .unwrap_or(u64::from(self.default_results))
            .clamp(1, MAX_RESULTS);

        debug!(query, num, "Running web search");

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("X-API-KEY", &self.api_key)
            .json(&serde_json::json!({ "q": query, "num": num }))
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(failed(format!("search API returned {status}: {body}")));
        }

        let payload: SerperResponse = response
            .json()
            .await
            .map_err(|e| failed(format!("unreadable search response: {e}")))?;

        let results = payload.into_results(num as usize);
        let output = format_results(&results);
        let data = serde_json::to_value(&results).ok();

        Ok(ToolResult {
            call_id: String::new(),
            success: true,
            output,
            data,
        })
    }
}

fn failed(reason: String) -> ToolError {
    ToolError::ExecutionFailed {
        tool_name: WEB_SEARCH.into(),
        reason,
    }
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<SerperOrganic>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganic {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

/// One search hit as shown to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SerperResponse {
    fn into_results(self, limit: usize) -> Vec<SearchResult> {
        self.organic
            .into_iter()
            .filter(|o| !o.link.is_empty())
            .take(limit)
            .map(|o| SearchResult {
                title: o.title,
                url: o.link,
                snippet: o.snippet,
            })
            .collect()
    }
}

fn format_results(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return "No results found.".into();
    }

    results
        .iter()
        .map(|r| format!("Title: {}\nLink: {}\nSnippet: {}", r.title, r.url, r.snippet))
        .collect::<Vec<_>>()
        .join("\n---\n")
}
