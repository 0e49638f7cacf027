use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use trendcast_common::{KeywordCluster, ScoredKeyword, TrendcastError};

use crate::traits::{CompetitionSource, KeywordClusterer};

/// Curated substrings marking high-value topics; matching titles get the
/// score multiplier.
const HIGH_VALUE_KEYWORDS: [&str; 4] = [
    "make money online",
    "investing for beginners",
    "best software tools",
    "business tips",
];

const HIGH_VALUE_MULTIPLIER: f64 = 1.5;

const CLUSTER_MAX_ATTEMPTS: u32 = 3;
/// Linear backoff base; attempt n waits `base * n` (5s, 10s).
const CLUSTER_RETRY_BASE: Duration = Duration::from_secs(5);

/// Maximum number of scored keywords kept after ranking.
const TOP_K: usize = 20;

pub fn is_high_value(title: &str) -> bool {
    let lower = title.to_lowercase();
    HIGH_VALUE_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

/// Clusters raw queries, scores each cluster title against a competition
/// signal, and keeps the top 20.
pub struct Analyzer {
    clusterer: Arc<dyn KeywordClusterer>,
    competition: Arc<dyn CompetitionSource>,
    retry_base: Duration,
}

impl Analyzer {
    pub fn new(clusterer: Arc<dyn KeywordClusterer>, competition: Arc<dyn CompetitionSource>) -> Self {
        Self {
            clusterer,
            competition,
            retry_base: CLUSTER_RETRY_BASE,
        }
    }

    /// Shrink the retry backoff; tests use `Duration::ZERO`.
    pub fn with_retry_base(mut self, retry_base: Duration) -> Self {
        self.retry_base = retry_base;
        self
    }

    /// Cluster with bounded retries. Exhausting the retries degrades to an
    /// identity passthrough (each query its own cluster, no tags) so the
    /// pipeline never stalls on this stage.
    pub async fn cluster(&self, queries: &[String]) -> Vec<KeywordCluster> {
        for attempt in 1..=CLUSTER_MAX_ATTEMPTS {
            match self.clusterer.cluster(queries).await {
                Ok(clusters) => return clusters,
                Err(e) => {
                    warn!(attempt, error = %e, "clustering attempt failed");
                    if attempt < CLUSTER_MAX_ATTEMPTS {
                        tokio::time::sleep(self.retry_base * attempt).await;
                    }
                }
            }
        }

        warn!("clustering unavailable, falling back to passthrough clusters");
        queries
            .iter()
            .map(|q| KeywordCluster::passthrough(q))
            .collect()
    }

    /// Map a raw competition count into [0, 100]; lower competition scores
    /// higher. Any failure scores 0 instead of propagating.
    pub async fn score(&self, title: &str) -> f64 {
        let total = match self.competition.total_results(title).await {
            Ok(total) => total,
            Err(e) => {
                warn!(title = %title, error = %e, "competition lookup failed");
                return 0.0;
            }
        };

        (100.0 - total as f64 / 10_000.0).clamp(0.0, 100.0)
    }

    /// Cluster, score, rank, truncate. Empty input short-circuits without
    /// touching any external service.
    pub async fn filter_keywords(&self, queries: &[String]) -> Vec<ScoredKeyword> {
        if queries.is_empty() {
            return Vec::new();
        }

        let clusters = self.cluster(queries).await;

        let mut scored = Vec::with_capacity(clusters.len());
        for cluster in clusters {
            let mut score = self.score(&cluster.title).await;

            // Multiplier applies after clamping, so boosted scores may
            // exceed 100.
            if is_high_value(&cluster.title) {
                score *= HIGH_VALUE_MULTIPLIER;
            }

            scored.push(ScoredKeyword {
                query: cluster.title.clone(),
                title: cluster.title,
                tags: cluster.tags,
                score,
            });
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(TOP_K);

        info!(count = scored.len(), "keywords scored and ranked");
        scored
    }
}

// ---------------------------------------------------------------------------
// Real collaborator impls
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ClusterReply {
    #[serde(default)]
    clusters: Vec<KeywordCluster>,
}

/// LLM-backed clustering: one JSON-object completion with a strict
/// response-shape contract (`{"clusters": [{"title", "tags"}]}`).
pub struct LlmClusterer {
    ai: ai_client::OpenAi,
}

impl LlmClusterer {
    pub fn new(ai: ai_client::OpenAi) -> Self {
        Self { ai }
    }
}

#[async_trait]
impl KeywordClusterer for LlmClusterer {
    async fn cluster(&self, queries: &[String]) -> Result<Vec<KeywordCluster>> {
        let prompt = format!(
            "Group these queries into clusters. For each:\n\
             - \"title\": Best representative title (60 chars max)\n\
             - \"tags\": 5-10 relevant tags\n\
             Return JSON format like: {{\"clusters\": [{{\"title\": \"...\", \"tags\": [...]}}]}}\n\n\
             Queries: {queries:?}"
        );

        let reply: ClusterReply = self
            .ai
            .extract(prompt)
            .await
            .map_err(|e| TrendcastError::Clustering(e.to_string()))?;
        Ok(reply.clusters)
    }
}

#[derive(Debug, Deserialize)]
struct SearchListReply {
    #[serde(rename = "pageInfo", default)]
    page_info: PageInfo,
}

#[derive(Debug, Default, Deserialize)]
struct PageInfo {
    #[serde(rename = "totalResults", default)]
    total_results: u64,
}

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";

/// Competition signal from the YouTube search API's total result count.
pub struct YouTubeCompetition {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeCompetition {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, YOUTUBE_SEARCH_URL)
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            api_key: api_key.to_string(),
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl CompetitionSource for YouTubeCompetition {
    async fn total_results(&self, query: &str) -> Result<u64> {
        if self.api_key.is_empty() {
            return Err(TrendcastError::Scoring("YouTube API key not configured".into()).into());
        }

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("maxResults", "5"),
                ("key", &self.api_key),
            ])
            .send()
            .await
            .map_err(|e| TrendcastError::Scoring(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(
                TrendcastError::Scoring(format!("YouTube search error ({status}): {message}"))
                    .into(),
            );
        }

        let reply: SearchListReply = resp
            .json()
            .await
            .map_err(|e| TrendcastError::Scoring(e.to_string()))?;
        Ok(reply.page_info.total_results)
    }
}
