use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use trendcast_common::{ResultRow, ScoredKeyword, TopicsFile};

use crate::analyzer::Analyzer;
use crate::explorer::KeywordExplorer;
use crate::seeds::seed_queries;
use crate::sink::ResultSink;
use crate::traits::{MetadataGenerator, SuggestionFetcher, ThumbnailRenderer, VoiceoverSynth};

/// Success/failure counters for one run. Reported at the end; never used
/// for control flow.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub scraped: usize,
    pub filtered: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub saved: usize,
}

/// One full pipeline run: SCRAPE → FILTER → PROCESS_KEYWORD* → SAVE.
///
/// Per-keyword failures are contained to that keyword; sink failures fall
/// back to local backup inside `ResultSink`. No error escapes `run`.
pub struct Pipeline {
    suggestions: Arc<dyn SuggestionFetcher>,
    explorer: KeywordExplorer,
    analyzer: Analyzer,
    metadata: Arc<dyn MetadataGenerator>,
    voiceover: Arc<dyn VoiceoverSynth>,
    thumbnails: Arc<dyn ThumbnailRenderer>,
    sink: ResultSink,
    topics_file: PathBuf,
    keyword_limit: usize,
}

impl Pipeline {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        suggestions: Arc<dyn SuggestionFetcher>,
        explorer: KeywordExplorer,
        analyzer: Analyzer,
        metadata: Arc<dyn MetadataGenerator>,
        voiceover: Arc<dyn VoiceoverSynth>,
        thumbnails: Arc<dyn ThumbnailRenderer>,
        sink: ResultSink,
        topics_file: PathBuf,
        keyword_limit: usize,
    ) -> Self {
        Self {
            suggestions,
            explorer,
            analyzer,
            metadata,
            voiceover,
            thumbnails,
            sink,
            topics_file,
            keyword_limit,
        }
    }

    pub async fn run(&self) -> RunReport {
        let mut report = RunReport::default();

        info!("starting pipeline run");

        let raw_keywords = self.scrape().await;
        report.scraped = raw_keywords.len();
        info!(count = raw_keywords.len(), "scrape complete");

        let keywords = self.analyzer.filter_keywords(&raw_keywords).await;
        report.filtered = keywords.len();
        if keywords.is_empty() {
            info!("no keywords to process, run finished");
            return report;
        }

        let mut rows = Vec::new();
        for (i, keyword) in keywords.iter().enumerate() {
            info!(n = i + 1, total = keywords.len(), query = %keyword.query, "processing keyword");

            match self.process_keyword(keyword).await {
                Some(row) => {
                    rows.push(row);
                    report.succeeded += 1;
                }
                None => report.failed += 1,
            }
        }

        if rows.is_empty() {
            warn!("no rows produced, skipping save");
        } else {
            report.saved = rows.len();
            self.sink.save(rows).await;
        }

        info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "pipeline run finished"
        );
        report
    }

    /// Explore every seed query, accumulating a deduplicated keyword set.
    /// The limit is checked only between seed explorations, so the set can
    /// overshoot by one exploration's worth before the final truncation.
    async fn scrape(&self) -> Vec<String> {
        let topics = TopicsFile::load(&self.topics_file);
        if topics.is_empty() {
            warn!("cannot scrape without topics and prefixes");
            return Vec::new();
        }

        let seeds = seed_queries(&topics);
        info!(count = seeds.len(), "generated seed queries");

        let mut all_keywords: HashSet<String> = HashSet::new();
        for (i, seed) in seeds.iter().enumerate() {
            info!(n = i + 1, total = seeds.len(), seed = %seed, "exploring seed");
            let keywords = self.explorer.explore(self.suggestions.as_ref(), seed).await;
            all_keywords.extend(keywords);

            if all_keywords.len() >= self.keyword_limit {
                info!(limit = self.keyword_limit, "reached keyword limit");
                break;
            }
        }

        all_keywords.into_iter().take(self.keyword_limit).collect()
    }

    /// Process one keyword. Metadata failure skips the row entirely; a
    /// failed voiceover or thumbnail writes the sentinel and continues.
    async fn process_keyword(&self, keyword: &ScoredKeyword) -> Option<ResultRow> {
        let metadata = match self.metadata.generate(&keyword.query).await {
            Ok(metadata) => metadata,
            Err(e) => {
                error!(query = %keyword.query, error = %e, "metadata generation failed");
                return None;
            }
        };

        let voiceover_path = match self
            .voiceover
            .synthesize(&metadata.title, &metadata.script)
            .await
        {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => {
                warn!(query = %keyword.query, error = %e, "voiceover generation failed");
                None
            }
        };

        let thumbnail_path = match self
            .thumbnails
            .render(&metadata.thumbnail_text, &metadata.tags)
            .await
        {
            Ok(path) => Some(path.display().to_string()),
            Err(e) => {
                warn!(query = %keyword.query, error = %e, "thumbnail generation failed");
                None
            }
        };

        Some(ResultRow::from_parts(
            &keyword.query,
            &metadata,
            voiceover_path,
            thumbnail_path,
        ))
    }
}
