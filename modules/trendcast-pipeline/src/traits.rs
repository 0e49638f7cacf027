// Trait abstractions for the pipeline's external collaborators.
//
// Every third-party service sits behind one of these seams, so each stage
// can be exercised with HashMap-backed mocks: no network, no credentials.
// `cargo test` in seconds.

use std::path::PathBuf;

use anyhow::Result;
use async_trait::async_trait;

use trendcast_common::{KeywordCluster, TrendcastError, VideoMetadata};

/// Search-suggestion completions for a query.
#[async_trait]
pub trait SuggestionFetcher: Send + Sync {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl SuggestionFetcher for suggest_client::SuggestClient {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        self.suggestions(query)
            .await
            .map_err(|e| TrendcastError::Suggest(e.to_string()).into())
    }
}

/// Batch grouping of raw queries into titled clusters (language model).
#[async_trait]
pub trait KeywordClusterer: Send + Sync {
    async fn cluster(&self, queries: &[String]) -> Result<Vec<KeywordCluster>>;
}

/// Search-volume-like competition signal: total result count for a query.
#[async_trait]
pub trait CompetitionSource: Send + Sync {
    async fn total_results(&self, query: &str) -> Result<u64>;
}

/// Per-keyword video metadata in one call.
#[async_trait]
pub trait MetadataGenerator: Send + Sync {
    async fn generate(&self, keyword: &str) -> Result<VideoMetadata>;
}

/// Voiceover synthesis; returns the path of the written audio file.
#[async_trait]
pub trait VoiceoverSynth: Send + Sync {
    async fn synthesize(&self, title: &str, script: &str) -> Result<PathBuf>;
}

/// Thumbnail rendering; returns the path of the written image file.
#[async_trait]
pub trait ThumbnailRenderer: Send + Sync {
    async fn render(&self, thumbnail_text: &str, tags: &[String]) -> Result<PathBuf>;
}

/// Remote row storage (the spreadsheet). The sink wraps this with the
/// local-backup fallback.
#[async_trait]
pub trait RowSink: Send + Sync {
    async fn append_rows(&self, rows: &[Vec<String>]) -> Result<()>;
}
