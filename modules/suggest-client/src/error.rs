use thiserror::Error;

pub type Result<T> = std::result::Result<T, SuggestError>;

#[derive(Debug, Error)]
pub enum SuggestError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed suggestion payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for SuggestError {
    fn from(err: reqwest::Error) -> Self {
        SuggestError::Network(err.to_string())
    }
}
