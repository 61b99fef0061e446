use anyhow::{Context, Result};
use std::path::PathBuf;

/// Proxy configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    // Server
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,

    // AI / LLM
    pub openai_api_key: String,
    pub openai_base_url: Option<String>,
    pub text_model: String,
    pub image_model: String,

    // CORS
    pub allowed_origins: Vec<String>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("API_PORT")
                .unwrap_or_else(|_| "3003".to_string())
                .parse()
                .context("API_PORT must be a port number")?,
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "public".to_string())
                .into(),
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .context("OPENAI_API_KEY environment variable is required")?,
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            text_model: std::env::var("OPENAI_TEXT_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            image_model: std::env::var("OPENAI_IMAGE_MODEL")
                .unwrap_or_else(|_| "dall-e-2".to_string()),
            allowed_origins: parse_origins(&std::env::var("ALLOWED_ORIGINS").unwrap_or_default()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_split_and_trim() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example ,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_origins("").is_empty());
    }
}
