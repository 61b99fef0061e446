use thiserror::Error;

use crate::query::MAX_WORD_CHARS;

/// Why a raw search string was refused before any lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Please enter a word")]
    Empty,

    #[error("Words are limited to {MAX_WORD_CHARS} characters")]
    TooLong,

    #[error("Unsupported character {0:?} in word")]
    InvalidCharacter(char),
}
