use crate::error::Result;
use async_trait::async_trait;

/// Single-prompt text generation, returning the first completion trimmed.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Single-prompt image generation, returning a URL to the first image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate_image(&self, prompt: &str, size: crate::ImageSize) -> Result<String>;
}
