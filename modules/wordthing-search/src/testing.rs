// Test mocks for the search session.
//
// One mock per trait boundary:
// - MockDictionary (DictionaryProvider): HashMap-based word -> senses
// - MockThesaurus (ThesaurusProvider): HashMap-based word -> synonyms
// - MockAugmenter (AugmentationSource): canned replies, a call log, and
//   words whose replies are held until released
//
// Plus helpers for building senses and synonym lists.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;
use wordthing_common::{AugmentationKind, Sense, SenseDefinition};

use crate::error::{AugmentError, LookupError};
use crate::providers::{DictionaryProvider, ThesaurusProvider};
use crate::proxy::AugmentationSource;
use crate::session::Session;

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn sense(part_of_speech: &str, definitions: &[&str]) -> Sense {
    Sense {
        part_of_speech: part_of_speech.to_string(),
        definitions: definitions
            .iter()
            .map(|text| SenseDefinition {
                text: text.to_string(),
                example: None,
                synonyms: Vec::new(),
            })
            .collect(),
    }
}

/// `n` distinct synonyms: `syn0`, `syn1`, ...
pub fn synonyms(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("syn{i}")).collect()
}

// ---------------------------------------------------------------------------
// MockDictionary
// ---------------------------------------------------------------------------

/// Unregistered words are `NotFound`.
#[derive(Default)]
pub struct MockDictionary {
    entries: HashMap<String, Result<Vec<Sense>, LookupError>>,
    calls: Mutex<Vec<String>>,
}

impl MockDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_word(mut self, word: &str, senses: Vec<Sense>) -> Self {
        self.entries.insert(word.to_string(), Ok(senses));
        self
    }

    pub fn failing(mut self, word: &str) -> Self {
        self.entries.insert(
            word.to_string(),
            Err(LookupError::Transport("dictionary unreachable".into())),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DictionaryProvider for MockDictionary {
    async fn senses(&self, word: &str) -> Result<Vec<Sense>, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());
        self.entries
            .get(word)
            .cloned()
            .unwrap_or_else(|| Err(LookupError::NotFound(word.to_string())))
    }
}

// ---------------------------------------------------------------------------
// MockThesaurus
// ---------------------------------------------------------------------------

/// Unregistered words have no synonyms.
#[derive(Default)]
pub struct MockThesaurus {
    entries: HashMap<String, Result<Vec<String>, LookupError>>,
    calls: Mutex<Vec<String>>,
}

impl MockThesaurus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_word(mut self, word: &str, synonyms: Vec<String>) -> Self {
        self.entries.insert(word.to_string(), Ok(synonyms));
        self
    }

    pub fn failing(mut self, word: &str) -> Self {
        self.entries.insert(
            word.to_string(),
            Err(LookupError::Transport("thesaurus unreachable".into())),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ThesaurusProvider for MockThesaurus {
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, LookupError> {
        self.calls.lock().unwrap().push(word.to_string());
        self.entries.get(word).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ---------------------------------------------------------------------------
// MockAugmenter
// ---------------------------------------------------------------------------

/// Replies `"<kind> of <word>"` unless a kind is marked failing or panicking.
/// Calls for held words block until [`MockAugmenter::release`].
pub struct MockAugmenter {
    failing: HashSet<AugmentationKind>,
    panicking: HashSet<AugmentationKind>,
    held: HashSet<String>,
    gate: Semaphore,
    calls: Mutex<Vec<(AugmentationKind, String)>>,
}

impl Default for MockAugmenter {
    fn default() -> Self {
        Self {
            failing: HashSet::new(),
            panicking: HashSet::new(),
            held: HashSet::new(),
            gate: Semaphore::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl MockAugmenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, kind: AugmentationKind) -> Self {
        self.failing.insert(kind);
        self
    }

    pub fn panicking(mut self, kind: AugmentationKind) -> Self {
        self.panicking.insert(kind);
        self
    }

    pub fn hold(mut self, word: &str) -> Self {
        self.held.insert(word.to_string());
        self
    }

    /// Let every held call proceed.
    pub fn release(&self) {
        self.gate.add_permits(Semaphore::MAX_PERMITS / 2);
    }

    pub fn calls(&self) -> Vec<(AugmentationKind, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reply_for(kind: AugmentationKind, word: &str) -> String {
        format!("{} of {word}", kind.path())
    }
}

#[async_trait]
impl AugmentationSource for MockAugmenter {
    async fn fetch(&self, kind: AugmentationKind, word: &str) -> Result<String, AugmentError> {
        self.calls.lock().unwrap().push((kind, word.to_string()));
        if self.held.contains(word) {
            let _permit = self
                .gate
                .acquire()
                .await
                .map_err(|e| AugmentError::Transport(e.to_string()))?;
        }
        if self.panicking.contains(&kind) {
            panic!("augmenter crashed on {}", kind.path());
        }
        if self.failing.contains(&kind) {
            return Err(AugmentError::Proxy(kind.server_error_message().to_string()));
        }
        Ok(Self::reply_for(kind, word))
    }
}

// ---------------------------------------------------------------------------
// Session wiring
// ---------------------------------------------------------------------------

pub fn session_with(
    dictionary: Arc<MockDictionary>,
    thesaurus: Arc<MockThesaurus>,
    augmenter: Arc<MockAugmenter>,
) -> Session {
    Session::new(dictionary, thesaurus, augmenter)
}
