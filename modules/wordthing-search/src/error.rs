use lexicon_client::LexiconError;
use thiserror::Error;
use wordthing_common::QueryError;

/// Failure of a single lexical provider call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("No entry for \"{0}\"")]
    NotFound(String),

    #[error("Lookup failed: {0}")]
    Transport(String),
}

impl From<LexiconError> for LookupError {
    fn from(err: LexiconError) -> Self {
        match err {
            LexiconError::NotFound(word) => LookupError::NotFound(word),
            other => LookupError::Transport(other.to_string()),
        }
    }
}

/// Failure of a single augmentation call, scoped to its panel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AugmentError {
    #[error("Proxy reported: {0}")]
    Proxy(String),

    #[error("Proxy request failed: {0}")]
    Transport(String),

    #[error("Unexpected proxy response: {0}")]
    Malformed(String),

    #[error("Augmentation task ended without a result: {0}")]
    Aborted(String),
}

impl From<reqwest::Error> for AugmentError {
    fn from(err: reqwest::Error) -> Self {
        AugmentError::Transport(err.to_string())
    }
}

/// Why a search produced no results view.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    Input(#[from] QueryError),

    #[error("Word not found. Please try another word.")]
    NotFound,

    #[error("Lookup services are unavailable. Please try again.")]
    Unavailable,

    #[error("No synonym at position {0}")]
    NoSuchSynonym(usize),
}
