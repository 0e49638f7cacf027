// Test mocks for the pipeline trait seams.
//
// One mock per collaborator, HashMap-backed, builder-style registration:
// - MockSuggestions (SuggestionFetcher) — query → suggestion list, call log
// - MockClusterer (KeywordClusterer) — scripted failures then clusters
// - FixedCompetition (CompetitionSource) — fixed total or failure
// - MockMetadata (MetadataGenerator) — keyword → metadata or failure
// - MockVoiceover / MockThumbnails — fixed path or failure
// - CollectingSink / FailingSink (RowSink)

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use trendcast_common::{KeywordCluster, VideoMetadata};

use crate::traits::{
    CompetitionSource, KeywordClusterer, MetadataGenerator, RowSink, SuggestionFetcher,
    ThumbnailRenderer, VoiceoverSynth,
};

// ---------------------------------------------------------------------------
// MockSuggestions
// ---------------------------------------------------------------------------

/// Suggestion fetcher with a shared call log. Unregistered queries return
/// zero suggestions; `fanout(n)` mode instead invents `n` fresh children
/// per query for unbounded-branching tests.
#[derive(Clone)]
pub struct MockSuggestions {
    responses: Arc<Mutex<HashMap<String, Vec<String>>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<String>>>,
    fanout: Option<usize>,
}

impl MockSuggestions {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fanout: None,
        }
    }

    pub fn fanout(n: usize) -> Self {
        let mut mock = Self::new();
        mock.fanout = Some(n);
        mock
    }

    pub fn on(self, query: &str, suggestions: &[&str]) -> Self {
        self.responses.lock().unwrap().insert(
            query.to_string(),
            suggestions.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn failing(self, query: &str) -> Self {
        self.failures.lock().unwrap().insert(query.to_string());
        self
    }

    /// A handle sharing this mock's call log, usable after the mock itself
    /// has been moved into the pipeline.
    pub fn clone_handle(&self) -> Self {
        self.clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SuggestionFetcher for MockSuggestions {
    async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(query.to_string());

        if self.failures.lock().unwrap().contains(query) {
            return Err(anyhow!("scripted suggestion failure for '{query}'"));
        }

        if let Some(n) = self.fanout {
            return Ok((0..n).map(|i| format!("{query}-{i}")).collect());
        }

        Ok(self
            .responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_default())
    }
}

// ---------------------------------------------------------------------------
// MockClusterer
// ---------------------------------------------------------------------------

pub struct MockClusterer {
    fail_first: usize,
    clusters: Option<Vec<KeywordCluster>>,
    calls: Arc<AtomicUsize>,
}

impl MockClusterer {
    /// Every attempt fails; the analyzer must fall back to passthrough.
    pub fn always_failing() -> Self {
        Self {
            fail_first: usize::MAX,
            clusters: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn returning(clusters: Vec<KeywordCluster>) -> Self {
        Self::failing_then(0, clusters)
    }

    /// Fail the first `fail_first` attempts, then return `clusters`.
    pub fn failing_then(fail_first: usize, clusters: Vec<KeywordCluster>) -> Self {
        Self {
            fail_first,
            clusters: Some(clusters),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl KeywordClusterer for MockClusterer {
    async fn cluster(&self, _queries: &[String]) -> Result<Vec<KeywordCluster>> {
        let attempt = self.calls.fetch_add(1, Ordering::SeqCst);

        if attempt < self.fail_first {
            return Err(anyhow!("scripted clustering failure (attempt {attempt})"));
        }

        self.clusters
            .clone()
            .ok_or_else(|| anyhow!("no clusters scripted"))
    }
}

// ---------------------------------------------------------------------------
// FixedCompetition
// ---------------------------------------------------------------------------

pub struct FixedCompetition {
    total: Option<u64>,
}

impl FixedCompetition {
    pub fn new(total: u64) -> Self {
        Self { total: Some(total) }
    }

    pub fn failing() -> Self {
        Self { total: None }
    }
}

#[async_trait]
impl CompetitionSource for FixedCompetition {
    async fn total_results(&self, _query: &str) -> Result<u64> {
        self.total
            .ok_or_else(|| anyhow!("scripted competition failure"))
    }
}

// ---------------------------------------------------------------------------
// MockMetadata
// ---------------------------------------------------------------------------

pub struct MockMetadata {
    responses: HashMap<String, VideoMetadata>,
    failures: HashSet<String>,
    placeholder_all: bool,
}

impl MockMetadata {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            failures: HashSet::new(),
            placeholder_all: false,
        }
    }

    /// Return placeholder metadata for every keyword.
    pub fn placeholder_all() -> Self {
        let mut mock = Self::new();
        mock.placeholder_all = true;
        mock
    }

    pub fn on(mut self, keyword: &str, metadata: VideoMetadata) -> Self {
        self.responses.insert(keyword.to_string(), metadata);
        self
    }

    pub fn failing(mut self, keyword: &str) -> Self {
        self.failures.insert(keyword.to_string());
        self
    }
}

#[async_trait]
impl MetadataGenerator for MockMetadata {
    async fn generate(&self, keyword: &str) -> Result<VideoMetadata> {
        if self.failures.contains(keyword) {
            return Err(anyhow!("scripted metadata failure for '{keyword}'"));
        }
        if let Some(metadata) = self.responses.get(keyword) {
            return Ok(metadata.clone());
        }
        if self.placeholder_all {
            return Ok(VideoMetadata::placeholder(keyword));
        }
        Err(anyhow!("no metadata registered for '{keyword}'"))
    }
}

// ---------------------------------------------------------------------------
// Media mocks
// ---------------------------------------------------------------------------

pub struct MockVoiceover {
    succeed: bool,
}

impl MockVoiceover {
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }

    pub fn failing() -> Self {
        Self { succeed: false }
    }
}

#[async_trait]
impl VoiceoverSynth for MockVoiceover {
    async fn synthesize(&self, title: &str, _script: &str) -> Result<PathBuf> {
        if self.succeed {
            Ok(PathBuf::from(format!("voiceovers/{title}.mp3")))
        } else {
            Err(anyhow!("scripted voiceover failure"))
        }
    }
}

pub struct MockThumbnails {
    succeed: bool,
}

impl MockThumbnails {
    pub fn succeeding() -> Self {
        Self { succeed: true }
    }

    pub fn failing() -> Self {
        Self { succeed: false }
    }
}

#[async_trait]
impl ThumbnailRenderer for MockThumbnails {
    async fn render(&self, thumbnail_text: &str, _tags: &[String]) -> Result<PathBuf> {
        if self.succeed {
            Ok(PathBuf::from(format!("thumbnails/{thumbnail_text}.png")))
        } else {
            Err(anyhow!("scripted thumbnail failure"))
        }
    }
}

// ---------------------------------------------------------------------------
// Sinks
// ---------------------------------------------------------------------------

pub struct CollectingSink {
    rows: Mutex<Vec<Vec<String>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl RowSink for CollectingSink {
    async fn append_rows(&self, rows: &[Vec<String>]) -> Result<()> {
        self.rows.lock().unwrap().extend(rows.iter().cloned());
        Ok(())
    }
}

pub struct FailingSink;

#[async_trait]
impl RowSink for FailingSink {
    async fn append_rows(&self, _rows: &[Vec<String>]) -> Result<()> {
        Err(anyhow!("scripted sink failure"))
    }
}
