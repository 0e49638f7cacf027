// Real collaborator impls for per-keyword content: metadata (LLM),
// voiceover (ElevenLabs), thumbnail (Canva).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::warn;

use trendcast_common::{TrendcastError, VideoMetadata};

use crate::traits::{MetadataGenerator, ThumbnailRenderer, VoiceoverSynth};

/// Sanitize text for filename usage: lowercase, separators to underscores,
/// question marks dropped, 100-char cap.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .replace([' ', '/', ':'], "_")
        .replace('?', "")
        .chars()
        .take(100)
        .collect()
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// One LLM call producing the full metadata bundle. Any failure degrades to
/// placeholder metadata so a reachable keyword always yields a row.
pub struct LlmMetadata {
    ai: ai_client::OpenAi,
}

impl LlmMetadata {
    pub fn new(ai: ai_client::OpenAi) -> Self {
        Self { ai }
    }
}

#[async_trait]
impl MetadataGenerator for LlmMetadata {
    async fn generate(&self, keyword: &str) -> Result<VideoMetadata> {
        let prompt = format!(
            "Create complete YouTube video metadata for: \"{keyword}\"\n\n\
             Return JSON with:\n\
             - title (SEO-optimized, 60 chars max)\n\
             - thumbnail_text (4-6 attention-grabbing words)\n\
             - description (3-4 lines with CTA)\n\
             - tags (5-10 relevant keywords)\n\
             - script (250 words with hook/steps/CTA)"
        );

        match self.ai.extract::<VideoMetadata>(prompt).await {
            Ok(metadata) => Ok(metadata),
            Err(e) => {
                warn!(keyword, error = %e, "metadata generation failed, using placeholder");
                Ok(VideoMetadata::placeholder(keyword))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Voiceover
// ---------------------------------------------------------------------------

pub struct ElevenLabsVoiceover {
    client: elevenlabs_client::ElevenLabsClient,
    voice_id: String,
    output_dir: PathBuf,
}

impl ElevenLabsVoiceover {
    pub fn new(
        client: elevenlabs_client::ElevenLabsClient,
        voice_id: &str,
        output_dir: &Path,
    ) -> Self {
        Self {
            client,
            voice_id: voice_id.to_string(),
            output_dir: output_dir.join("voiceovers"),
        }
    }
}

#[async_trait]
impl VoiceoverSynth for ElevenLabsVoiceover {
    async fn synthesize(&self, title: &str, script: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .context("creating voiceover output dir")?;

        let audio = self
            .client
            .synthesize(&self.voice_id, script)
            .await
            .map_err(|e| TrendcastError::Voiceover(e.to_string()))?;

        let path = self.output_dir.join(format!("{}.mp3", slugify(title)));
        tokio::fs::write(&path, &audio)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Thumbnail
// ---------------------------------------------------------------------------

/// App logo lookup by substring of the thumbnail text.
const LOGO_URLS: [(&str, &str); 3] = [
    ("instagram", "https://yourcdn.com/logos/instagram.png"),
    ("tiktok", "https://yourcdn.com/logos/tiktok.png"),
    ("notion", "https://yourcdn.com/logos/notion.png"),
];

const DEFAULT_LOGO_URL: &str = "https://yourcdn.com/logos/default.png";

pub fn logo_url_for(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    LOGO_URLS
        .iter()
        .find(|(app, _)| lower.contains(app))
        .map(|(_, url)| *url)
        .unwrap_or(DEFAULT_LOGO_URL)
}

pub struct CanvaThumbnails {
    client: canva_client::CanvaClient,
    template_id: String,
    output_dir: PathBuf,
}

impl CanvaThumbnails {
    pub fn new(client: canva_client::CanvaClient, template_id: &str, output_dir: &Path) -> Self {
        Self {
            client,
            template_id: template_id.to_string(),
            output_dir: output_dir.join("thumbnails"),
        }
    }
}

#[async_trait]
impl ThumbnailRenderer for CanvaThumbnails {
    async fn render(&self, thumbnail_text: &str, _tags: &[String]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .context("creating thumbnail output dir")?;

        let logo_url = logo_url_for(thumbnail_text);
        let png = self
            .client
            .render(&self.template_id, thumbnail_text, logo_url)
            .await
            .map_err(|e| TrendcastError::Thumbnail(e.to_string()))?;

        let path = self
            .output_dir
            .join(format!("{}.png", slugify(thumbnail_text)));
        tokio::fs::write(&path, &png)
            .await
            .with_context(|| format!("writing {}", path.display()))?;

        Ok(path)
    }
}
