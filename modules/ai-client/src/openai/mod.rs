mod client;
pub(crate) mod types;

pub use types::ImageSize;

use crate::error::{AiError, Result};
use crate::traits::{ImageGenerator, TextGenerator};
use async_trait::async_trait;

use client::OpenAiClient;
use types::{ChatRequest, ImageRequest, WireMessage};

// =============================================================================
// OpenAi Agent
// =============================================================================

#[derive(Clone)]
pub struct OpenAi {
    api_key: String,
    model: String,
    image_model: String,
    base_url: Option<String>,
}

impl OpenAi {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            image_model: "dall-e-2".to_string(),
            base_url: None,
        }
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub(crate) fn client(&self) -> OpenAiClient {
        let client = OpenAiClient::new(&self.api_key);
        if let Some(ref url) = self.base_url {
            client.with_base_url(url)
        } else {
            client
        }
    }

    /// Simple text completion (convenience method).
    pub async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(WireMessage::system("You are a helpful assistant."))
            .message(WireMessage::user(prompt))
            .token_limit(max_tokens);

        self.client()
            .chat(&request)
            .await?
            .first_content()
            .ok_or(AiError::EmptyResponse("no completion choices returned"))
    }

    /// Generate a single image and return its hosted URL.
    pub async fn create_image(&self, prompt: &str, size: ImageSize) -> Result<String> {
        let request = ImageRequest {
            model: self.image_model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size,
        };

        self.client()
            .images(&request)
            .await?
            .first_url()
            .ok_or(AiError::EmptyResponse("no image url returned"))
    }
}

// =============================================================================
// Generator Implementations
// =============================================================================

#[async_trait]
impl TextGenerator for OpenAi {
    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        self.complete(prompt, max_tokens).await
    }
}

#[async_trait]
impl ImageGenerator for OpenAi {
    async fn generate_image(&self, prompt: &str, size: ImageSize) -> Result<String> {
        self.create_image(prompt, size).await
    }
}
