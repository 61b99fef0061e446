//! Result renderer: turns lexical and augmentation payloads into an explicit
//! view model owned by a single search.

use wordthing_common::{AugmentationKind, Sense};

use crate::error::{AugmentError, LookupError};
use crate::session::Generation;

/// Only the first this-many synonyms become chips.
pub const MAX_SYNONYM_CHIPS: usize = 20;

pub const NO_DEFINITIONS: &str = "No definitions found.";
pub const NO_SYNONYMS: &str = "No synonyms found.";
pub const SYNONYMS_FAILED: &str = "Error fetching synonyms.";

// =============================================================================
// Primary panel
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartOfSpeechControl {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionItem {
    pub text: String,
    pub example: Option<String>,
    /// Inline synonyms joined for display; `None` when there are none.
    pub synonyms: Option<String>,
}

/// Headword, part-of-speech selector, and the active sense's definitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryPanel {
    headword: String,
    senses: Vec<Sense>,
    active: usize,
}

impl PrimaryPanel {
    pub fn headword(&self) -> &str {
        &self.headword
    }

    pub fn has_senses(&self) -> bool {
        !self.senses.is_empty()
    }

    /// Placeholder shown instead of the selector when there are no senses.
    pub fn placeholder(&self) -> Option<&'static str> {
        (!self.has_senses()).then_some(NO_DEFINITIONS)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.has_senses().then_some(self.active)
    }

    pub fn selector(&self) -> Vec<PartOfSpeechControl> {
        self.senses
            .iter()
            .enumerate()
            .map(|(i, sense)| PartOfSpeechControl {
                label: sense.part_of_speech.clone(),
                active: i == self.active,
            })
            .collect()
    }

    /// Definitions of the active sense, or empty when there are no senses.
    pub fn definitions(&self) -> Vec<DefinitionItem> {
        let Some(sense) = self.senses.get(self.active) else {
            return Vec::new();
        };

        sense
            .definitions
            .iter()
            .map(|d| DefinitionItem {
                text: d.text.clone(),
                example: d.example.clone(),
                synonyms: (!d.synonyms.is_empty()).then(|| d.synonyms.join(", ")),
            })
            .collect()
    }

    /// Make `index` the active sense. Only the definitions change; the
    /// selector keeps its controls. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.senses.len() {
            return false;
        }
        self.active = index;
        true
    }
}

pub fn render_primary(word: &str, senses: Option<Vec<Sense>>) -> PrimaryPanel {
    PrimaryPanel {
        headword: word.to_string(),
        senses: senses.unwrap_or_default(),
        active: 0,
    }
}

// =============================================================================
// Synonyms
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynonymPanel {
    Chips(Vec<String>),
    Empty,
    Failed,
}

impl SynonymPanel {
    pub fn chips(&self) -> &[String] {
        match self {
            SynonymPanel::Chips(chips) => chips,
            SynonymPanel::Empty | SynonymPanel::Failed => &[],
        }
    }

    pub fn chip(&self, index: usize) -> Option<&str> {
        self.chips().get(index).map(String::as_str)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            SynonymPanel::Chips(_) => None,
            SynonymPanel::Empty => Some(NO_SYNONYMS),
            SynonymPanel::Failed => Some(SYNONYMS_FAILED),
        }
    }
}

pub fn render_synonyms(synonyms: &Result<Vec<String>, LookupError>) -> SynonymPanel {
    match synonyms {
        Ok(list) if list.is_empty() => SynonymPanel::Empty,
        Ok(list) => SynonymPanel::Chips(list.iter().take(MAX_SYNONYM_CHIPS).cloned().collect()),
        Err(_) => SynonymPanel::Failed,
    }
}

// =============================================================================
// Augmentation panels
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Loading,
    Ready(String),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentationPanel {
    pub kind: AugmentationKind,
    pub state: PanelState,
}

impl AugmentationPanel {
    fn loading(kind: AugmentationKind) -> Self {
        Self {
            kind,
            state: PanelState::Loading,
        }
    }

    /// Text to show in the panel body. Failures show the panel's fixed message.
    pub fn body(&self) -> Option<&str> {
        match &self.state {
            PanelState::Loading => None,
            PanelState::Ready(text) => Some(text),
            PanelState::Failed => Some(self.kind.panel_error_text()),
        }
    }
}

// =============================================================================
// Search view
// =============================================================================

/// Everything one successful search renders. Replaced wholesale by the next search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchView {
    generation: Generation,
    pub primary: PrimaryPanel,
    pub synonyms: SynonymPanel,
    panels: [AugmentationPanel; 3],
}

fn slot(kind: AugmentationKind) -> usize {
    match kind {
        AugmentationKind::Description => 0,
        AugmentationKind::Image => 1,
        AugmentationKind::LatinRoots => 2,
    }
}

impl SearchView {
    pub fn new(generation: Generation, primary: PrimaryPanel, synonyms: SynonymPanel) -> Self {
        Self {
            generation,
            primary,
            synonyms,
            panels: AugmentationKind::ALL.map(AugmentationPanel::loading),
        }
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn panels(&self) -> &[AugmentationPanel] {
        &self.panels
    }

    pub fn panel(&self, kind: AugmentationKind) -> &AugmentationPanel {
        &self.panels[slot(kind)]
    }

    /// Number of panels still waiting on their call.
    pub fn pending(&self) -> usize {
        self.panels
            .iter()
            .filter(|p| p.state == PanelState::Loading)
            .count()
    }

    pub fn render_augmentation(
        &mut self,
        kind: AugmentationKind,
        outcome: Result<String, AugmentError>,
    ) {
        let state = match outcome {
            Ok(value) => PanelState::Ready(value),
            Err(e) => {
                tracing::warn!(kind = kind.path(), error = %e, "Augmentation failed");
                PanelState::Failed
            }
        };
        self.panels[slot(kind)].state = state;
    }
}

/// What the front-end currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Error(String),
    Results(SearchView),
}
