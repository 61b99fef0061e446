use wordthing_common::{AugmentationKind, PromptWord};

/// Token cap for the text panels.
pub const TEXT_MAX_TOKENS: u32 = 150;

/// Instruction sent upstream for `kind`. The word has already passed
/// `PromptWord` validation, so it cannot contain a double quote.
pub fn prompt_for(kind: AugmentationKind, word: &PromptWord) -> String {
    match kind {
        AugmentationKind::Description => {
            format!("Provide a detailed description and usage of the word \"{word}\".")
        }
        AugmentationKind::Image => {
            format!("An illustrative image representing the word \"{word}\".")
        }
        AugmentationKind::LatinRoots => {
            format!("Provide the Latin roots and word breakdown for the word \"{word}\".")
        }
    }
}
