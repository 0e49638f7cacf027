pub mod error;

pub use error::{Result, SuggestError};

use std::time::Duration;

use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://suggestqueries.google.com/complete/search";

/// Client for the search-suggestion completion endpoint.
///
/// The service answers with a JSON array whose second element is the list
/// of suggested completion strings.
pub struct SuggestClient {
    client: reqwest::Client,
    base_url: String,
}

impl SuggestClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch suggested completions for a query.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("client", "firefox"), ("ds", "yt"), ("q", query)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(SuggestError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| SuggestError::Malformed(e.to_string()))?;

        let suggestions = payload
            .get(1)
            .and_then(|v| v.as_array())
            .ok_or_else(|| {
                SuggestError::Malformed("expected an array at position 1".to_string())
            })?;

        let completions: Vec<String> = suggestions
            .iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect();
        debug!(query, count = completions.len(), "Fetched suggestion completions");
        Ok(completions)
    }
}

impl Default for SuggestClient {
    fn default() -> Self {
        Self::new()
    }
}
