use thiserror::Error;

pub type Result<T> = std::result::Result<T, ElevenLabsError>;

#[derive(Debug, Error)]
pub enum ElevenLabsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for ElevenLabsError {
    fn from(err: reqwest::Error) -> Self {
        ElevenLabsError::Network(err.to_string())
    }
}
