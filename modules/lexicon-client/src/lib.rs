pub mod error;
pub mod types;

pub use error::{LexiconError, Result};
pub use types::{Definition, DictionaryEntry, DictionaryMiss, Meaning, Phonetic, RelatedWord};

use reqwest::StatusCode;
use url::Url;

const DICTIONARY_BASE_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
const DATAMUSE_BASE_URL: &str = "https://api.datamuse.com";

/// Error bodies kept in `LexiconError::Api`, in bytes.
const MAX_ERROR_BODY: usize = 2048;

fn api_error(status: StatusCode, body: &str) -> LexiconError {
    let mut end = body.len().min(MAX_ERROR_BODY);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    LexiconError::Api {
        status: status.as_u16(),
        message: body[..end].to_string(),
    }
}

/// Client for the Free Dictionary API.
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DICTIONARY_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch every entry for `word`. A 404 or an empty array is `NotFound`.
    pub async fn lookup(&self, word: &str) -> Result<Vec<DictionaryEntry>> {
        let mut url = Url::parse(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|_| LexiconError::InvalidUrl(self.base_url.clone()))?
            .push(word);

        tracing::debug!(word, "Dictionary lookup");
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            let body = resp.text().await.unwrap_or_default();
            if let Ok(miss) = serde_json::from_str::<DictionaryMiss>(&body) {
                tracing::debug!(word, title = %miss.title, "Dictionary has no entry");
            }
            return Err(LexiconError::NotFound(word.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let bytes = resp.bytes().await?;
        let entries: Vec<DictionaryEntry> = serde_json::from_slice(&bytes)?;
        if entries.is_empty() {
            return Err(LexiconError::NotFound(word.to_string()));
        }
        Ok(entries)
    }
}

impl Default for DictionaryClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the Datamuse word-finding API.
pub struct DatamuseClient {
    client: reqwest::Client,
    base_url: String,
}

impl DatamuseClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DATAMUSE_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Synonyms of `word`, in the provider's ranking order. No match is an empty list.
    pub async fn synonyms(&self, word: &str) -> Result<Vec<RelatedWord>> {
        let url = format!("{}/words", self.base_url);

        tracing::debug!(word, "Synonym lookup");
        let resp = self
            .client
            .get(&url)
            .query(&[("rel_syn", word)])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        let bytes = resp.bytes().await?;
        let words: Vec<RelatedWord> = serde_json::from_slice(&bytes)?;
        Ok(words)
    }
}

impl Default for DatamuseClient {
    fn default() -> Self {
        Self::new()
    }
}
