use thiserror::Error;

pub type Result<T> = std::result::Result<T, CanvaError>;

#[derive(Debug, Error)]
pub enum CanvaError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Design creation failed: {0}")]
    DesignFailed(String),

    #[error("Design export failed: {0}")]
    ExportFailed(String),
}

impl From<reqwest::Error> for CanvaError {
    fn from(err: reqwest::Error) -> Self {
        CanvaError::Network(err.to_string())
    }
}
