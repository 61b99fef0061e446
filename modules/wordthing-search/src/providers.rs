//! Lexical provider seams and their implementations over `lexicon-client`.

use async_trait::async_trait;
use lexicon_client::{DatamuseClient, DictionaryClient, DictionaryEntry};
use wordthing_common::{Sense, SenseDefinition};

use crate::error::LookupError;

#[async_trait]
pub trait DictionaryProvider: Send + Sync {
    /// Senses for `word`, in the provider's order.
    async fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError>;
}

#[async_trait]
pub trait ThesaurusProvider: Send + Sync {
    /// Synonyms for `word`, best first. No match is an empty list.
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LookupError>;
}

#[async_trait]
impl DictionaryProvider for DictionaryClient {
    async fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError> {
        let entries = self.lookup(word).await?;
        Ok(senses_from_entries(entries))
    }
}

#[async_trait]
impl ThesaurusProvider for DatamuseClient {
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let related = DatamuseClient::synonyms(self, word).await?;
        Ok(related.into_iter().map(|r| r.word).collect())
    }
}

/// Senses come from the first entry only; later entries are alternate
/// etymologies of the same headword.
pub fn senses_from_entries(entries: Vec<DictionaryEntry>) -> Vec<Sense> {
    let Some(entry) = entries.into_iter().next() else {
        return Vec::new();
    };

    entry
        .meanings
        .into_iter()
        .map(|meaning| Sense {
            part_of_speech: meaning.part_of_speech,
            definitions: meaning
                .definitions
                .into_iter()
                .map(|d| SenseDefinition {
                    text: d.definition,
                    example: d.example.filter(|e| !e.trim().is_empty()),
                    synonyms: d.synonyms,
                })
                .collect(),
        })
        .collect()
}
