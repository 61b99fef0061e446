//! Search orchestrator.
//!
//! A `Session` owns the screen. Each search that passes validation starts a new
//! [`Generation`]; augmentation calls run as detached tasks and report back
//! over a channel tagged with the generation that issued them. Updates from a
//! superseded generation are dropped on arrival, so a slow response for an old
//! word can never overwrite the panels of the current one.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use wordthing_common::{AugmentationKind, SearchQuery};

use crate::error::{AugmentError, LookupError, SearchError};
use crate::providers::{DictionaryProvider, ThesaurusProvider};
use crate::proxy::AugmentationSource;
use crate::render::{render_primary, render_synonyms, Screen, SearchView};

/// Identifies one search. Strictly increasing within a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Generation(self.0 + 1)
    }
}

/// Result of one augmentation call, addressed to the search that issued it.
#[derive(Debug)]
pub struct PanelUpdate {
    pub generation: Generation,
    pub kind: AugmentationKind,
    pub outcome: Result<String, AugmentError>,
}

pub struct Session {
    dictionary: Arc<dyn DictionaryProvider>,
    thesaurus: Arc<dyn ThesaurusProvider>,
    augmenter: Arc<dyn AugmentationSource>,
    generation: Generation,
    screen: Screen,
    updates_tx: mpsc::UnboundedSender<PanelUpdate>,
    updates_rx: mpsc::UnboundedReceiver<PanelUpdate>,
}

impl Session {
    pub fn new(
        dictionary: Arc<dyn DictionaryProvider>,
        thesaurus: Arc<dyn ThesaurusProvider>,
        augmenter: Arc<dyn AugmentationSource>,
    ) -> Self {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        Self {
            dictionary,
            thesaurus,
            augmenter,
            generation: Generation::default(),
            screen: Screen::default(),
            updates_tx,
            updates_rx,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Look up `input` and replace the screen with the outcome.
    ///
    /// Invalid input returns immediately and leaves the screen untouched.
    /// Not-found and unavailable outcomes put an error banner on the screen
    /// and launch no augmentation calls.
    pub async fn search(&mut self, input: &str) -> Result<(), SearchError> {
        let query = SearchQuery::parse(input)?;
        self.generation = self.generation.next();
        let generation = self.generation;
        let word = query.as_str();

        info!(word, generation = generation.0, "Searching");

        let (dictionary, thesaurus) = tokio::join!(
            self.dictionary.senses(word),
            self.thesaurus.synonyms(word)
        );

        let dictionary_unreachable = matches!(dictionary, Err(LookupError::Transport(_)));
        let senses = match dictionary {
            Ok(senses) if !senses.is_empty() => Some(senses),
            Ok(_) | Err(LookupError::NotFound(_)) => None,
            Err(e) => {
                warn!(word, error = %e, "Dictionary lookup failed");
                None
            }
        };
        if let Err(e) = &thesaurus {
            warn!(word, error = %e, "Synonym lookup failed");
        }

        let no_synonyms = thesaurus.as_ref().map_or(true, |s| s.is_empty());
        if senses.is_none() && no_synonyms {
            let err = if dictionary_unreachable && thesaurus.is_err() {
                SearchError::Unavailable
            } else {
                SearchError::NotFound
            };
            info!(word, outcome = %err, "Search produced no results");
            self.screen = Screen::Error(err.to_string());
            return Err(err);
        }

        let view = SearchView::new(
            generation,
            render_primary(word, senses),
            render_synonyms(&thesaurus),
        );
        self.screen = Screen::Results(view);
        self.launch_augmentations(query);
        Ok(())
    }

    /// Re-run a full search for the synonym chip at `index`.
    pub async fn follow_synonym(&mut self, index: usize) -> Result<(), SearchError> {
        let word = self
            .synonym_chip(index)
            .ok_or(SearchError::NoSuchSynonym(index))?
            .to_string();
        self.search(&word).await
    }

    pub fn synonym_chip(&self, index: usize) -> Option<&str> {
        match &self.screen {
            Screen::Results(view) => view.synonyms.chip(index),
            _ => None,
        }
    }

    /// Switch the active part of speech. False when there is nothing to switch.
    pub fn select_part_of_speech(&mut self, index: usize) -> bool {
        match &mut self.screen {
            Screen::Results(view) => view.primary.select(index),
            _ => false,
        }
    }

    /// Panels of the current view still waiting on their call.
    pub fn pending_panels(&self) -> usize {
        match &self.screen {
            Screen::Results(view) => view.pending(),
            _ => 0,
        }
    }

    /// Apply an update if it belongs to the current search. Returns whether it was applied.
    pub fn apply(&mut self, update: PanelUpdate) -> bool {
        if update.generation != self.generation {
            debug!(
                kind = update.kind.path(),
                update_generation = update.generation.0,
                current_generation = self.generation.0,
                "Discarding stale augmentation"
            );
            return false;
        }
        match &mut self.screen {
            Screen::Results(view) => {
                view.render_augmentation(update.kind, update.outcome);
                true
            }
            _ => false,
        }
    }

    /// Apply every update that has already arrived. Returns how many were applied.
    pub fn drain_updates(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(update) = self.updates_rx.try_recv() {
            if self.apply(update) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next update that applies to the current view.
    ///
    /// Returns `None` immediately when no panel is pending.
    pub async fn next_update(&mut self) -> Option<AugmentationKind> {
        while self.pending_panels() > 0 {
            let update = self.updates_rx.recv().await?;
            let kind = update.kind;
            if self.apply(update) {
                return Some(kind);
            }
        }
        None
    }

    fn launch_augmentations(&self, query: SearchQuery) {
        for kind in AugmentationKind::ALL {
            let source = Arc::clone(&self.augmenter);
            let updates = self.updates_tx.clone();
            let word = query.clone();
            let generation = self.generation;

            tokio::spawn(async move {
                let call = tokio::spawn(async move { source.fetch(kind, word.as_str()).await });
                // A call that panics or is aborted still settles its panel.
                let outcome = call.await.unwrap_or_else(|e| {
                    warn!(
                        kind = kind.path(),
                        error = %e,
                        "Augmentation task ended without a result"
                    );
                    Err(AugmentError::Aborted(e.to_string()))
                });
                // The session may be gone by now; nothing left to update then.
                let _ = updates.send(PanelUpdate {
                    generation,
                    kind,
                    outcome,
                });
            });
        }
    }
}
