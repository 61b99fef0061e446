use std::sync::Arc;

use ai_client::{AiError, ImageGenerator, ImageSize, OpenAi, TextGenerator};
use async_trait::async_trait;
use wordthing_common::{AugmentationKind, PromptWord};

use crate::prompts::{prompt_for, TEXT_MAX_TOKENS};

/// Dyn-compatible seam between the HTTP handlers and the generative model.
#[async_trait]
pub trait Augmenter: Send + Sync {
    async fn augment(&self, kind: AugmentationKind, word: &PromptWord) -> Result<String, AiError>;
}

/// Routes text panels to a completion model and the image panel to an image model.
pub struct ModelAugmenter {
    text: Arc<dyn TextGenerator>,
    image: Arc<dyn ImageGenerator>,
}

impl ModelAugmenter {
    pub fn new(text: Arc<dyn TextGenerator>, image: Arc<dyn ImageGenerator>) -> Self {
        Self { text, image }
    }

    pub fn from_openai(ai: Arc<OpenAi>) -> Self {
        Self {
            text: ai.clone(),
            image: ai,
        }
    }
}

#[async_trait]
impl Augmenter for ModelAugmenter {
    async fn augment(&self, kind: AugmentationKind, word: &PromptWord) -> Result<String, AiError> {
        let prompt = prompt_for(kind, word);
        match kind {
            AugmentationKind::Image => {
                self.image
                    .generate_image(&prompt, ImageSize::Medium)
                    .await
            }
            AugmentationKind::Description | AugmentationKind::LatinRoots => {
                self.text.generate_text(&prompt, TEXT_MAX_TOKENS).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingModel {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for RecordingModel {
        async fn generate_text(&self, prompt: &str, max_tokens: u32) -> ai_client::Result<String> {
            assert_eq!(max_tokens, TEXT_MAX_TOKENS);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("text".to_string())
        }
    }

    #[async_trait]
    impl ImageGenerator for RecordingModel {
        async fn generate_image(&self, prompt: &str, size: ImageSize) -> ai_client::Result<String> {
            assert_eq!(size, ImageSize::Medium);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("https://img.example/x.png".to_string())
        }
    }

    #[tokio::test]
    async fn image_goes_to_image_model_and_text_to_text_model() {
        let text = Arc::new(RecordingModel::default());
        let image = Arc::new(RecordingModel::default());
        let augmenter = ModelAugmenter::new(text.clone(), image.clone());
        let word = PromptWord::parse("lantern").unwrap();

        let url = augmenter.augment(AugmentationKind::Image, &word).await.unwrap();
        let description = augmenter
            .augment(AugmentationKind::Description, &word)
            .await
            .unwrap();
        augmenter
            .augment(AugmentationKind::LatinRoots, &word)
            .await
            .unwrap();

        assert_eq!(url, "https://img.example/x.png");
        assert_eq!(description, "text");
        assert_eq!(image.prompts.lock().unwrap().len(), 1);
        let text_prompts = text.prompts.lock().unwrap();
        assert_eq!(text_prompts.len(), 2);
        assert!(text_prompts[1].starts_with("Provide the Latin roots"));
    }
}
