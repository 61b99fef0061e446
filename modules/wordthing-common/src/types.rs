use serde::{Deserialize, Serialize};

// --- Lexical data ---

/// One part-of-speech grouping of definitions for a headword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub part_of_speech: String,
    pub definitions: Vec<SenseDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenseDefinition {
    pub text: String,
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Dictionary senses paired with thesaurus synonyms for one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexicalResult {
    /// `None` when the dictionary had nothing (or could not be reached).
    pub senses: Option<Vec<Sense>>,
    pub synonyms: Vec<String>,
}

impl LexicalResult {
    /// Neither half produced anything.
    pub fn is_empty(&self) -> bool {
        self.senses.as_ref().map_or(true, |s| s.is_empty()) && self.synonyms.is_empty()
    }
}

// --- Augmentation ---

/// The three independent AI panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AugmentationKind {
    Description,
    Image,
    LatinRoots,
}

impl AugmentationKind {
    pub const ALL: [AugmentationKind; 3] = [
        AugmentationKind::Description,
        AugmentationKind::Image,
        AugmentationKind::LatinRoots,
    ];

    /// Final path segment under `/berg/api/`.
    pub fn path(self) -> &'static str {
        match self {
            AugmentationKind::Description => "description",
            AugmentationKind::Image => "image",
            AugmentationKind::LatinRoots => "latin-roots",
        }
    }

    /// Key the proxy places the result under.
    pub fn response_field(self) -> &'static str {
        match self {
            AugmentationKind::Description => "description",
            AugmentationKind::Image => "imageUrl",
            AugmentationKind::LatinRoots => "roots",
        }
    }

    /// Fixed message the proxy returns with a 500.
    pub fn server_error_message(self) -> &'static str {
        match self {
            AugmentationKind::Description => "Failed to get AI description",
            AugmentationKind::Image => "Failed to get AI image",
            AugmentationKind::LatinRoots => "Failed to get Latin roots",
        }
    }

    /// Fixed text a panel shows when its call fails.
    pub fn panel_error_text(self) -> &'static str {
        match self {
            AugmentationKind::Description => "Error fetching AI description.",
            AugmentationKind::Image => "Error fetching AI image.",
            AugmentationKind::LatinRoots => "Error fetching Latin roots.",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AugmentationKind::Description => "AI Description",
            AugmentationKind::Image => "AI Image",
            AugmentationKind::LatinRoots => "Latin Roots & Breakdown",
        }
    }
}

// --- Proxy wire shapes ---

/// Body of every augmentation request. A missing `word` reads as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordRequest {
    #[serde(default)]
    pub word: String,
}

/// Body of every augmentation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexical_result_emptiness() {
        assert!(LexicalResult::default().is_empty());
        assert!(LexicalResult {
            senses: Some(vec![]),
            synonyms: vec![],
        }
        .is_empty());
        assert!(!LexicalResult {
            senses: None,
            synonyms: vec!["jog".into()],
        }
        .is_empty());
    }

    #[test]
    fn kinds_map_to_distinct_routes_and_fields() {
        let paths: Vec<_> = AugmentationKind::ALL.iter().map(|k| k.path()).collect();
        assert_eq!(paths, vec!["description", "image", "latin-roots"]);

        let fields: Vec<_> = AugmentationKind::ALL
            .iter()
            .map(|k| k.response_field())
            .collect();
        assert_eq!(fields, vec!["description", "imageUrl", "roots"]);
    }

    #[test]
    fn word_request_defaults_missing_word() {
        let req: WordRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.word, "");
    }
}
