use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No entry found for \"{0}\"")]
    NotFound(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl LexiconError {
    /// True when the provider answered but had nothing for the word.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LexiconError::NotFound(_))
    }
}

impl From<reqwest::Error> for LexiconError {
    fn from(err: reqwest::Error) -> Self {
        LexiconError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for LexiconError {
    fn from(err: serde_json::Error) -> Self {
        LexiconError::Parse(err.to_string())
    }
}

impl From<url::ParseError> for LexiconError {
    fn from(err: url::ParseError) -> Self {
        LexiconError::InvalidUrl(err.to_string())
    }
}
