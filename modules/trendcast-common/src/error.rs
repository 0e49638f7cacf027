use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendcastError {
    #[error("Suggestion fetch error: {0}")]
    Suggest(String),

    #[error("Clustering error: {0}")]
    Clustering(String),

    #[error("Scoring error: {0}")]
    Scoring(String),

    #[error("Metadata generation error: {0}")]
    Metadata(String),

    #[error("Voiceover synthesis error: {0}")]
    Voiceover(String),

    #[error("Thumbnail rendering error: {0}")]
    Thumbnail(String),

    #[error("Result sink error: {0}")]
    Sink(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
