use std::fmt;

use crate::error::QueryError;

/// Longest word (in characters) the proxy will embed in a prompt.
pub const MAX_WORD_CHARS: usize = 64;

/// A trimmed, non-empty search word.
///
/// This is the only rule the front-end applies: whatever a provider renders
/// (digits, symbols, "covid-19") can be searched again.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let word = raw.trim();
        if word.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(word.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A word that is safe to quote inside a model prompt.
///
/// On top of the [`SearchQuery`] rules it is capped at [`MAX_WORD_CHARS`] and
/// may not contain `"`, `\` or control characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptWord(SearchQuery);

impl PromptWord {
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let query = SearchQuery::parse(raw)?;
        if query.as_str().chars().count() > MAX_WORD_CHARS {
            return Err(QueryError::TooLong);
        }
        if let Some(bad) = query.as_str().chars().find(|c| breaks_prompt(*c)) {
            return Err(QueryError::InvalidCharacter(bad));
        }
        Ok(Self(query))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn breaks_prompt(c: char) -> bool {
    matches!(c, '"' | '\\') || c.is_control()
}

impl fmt::Display for PromptWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
