use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("invalid endpoint url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid album collection body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ViewError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ViewError::Decode(_))
    }
}
