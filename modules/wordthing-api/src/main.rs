use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ai_client::OpenAi;
use wordthing_api::{build_router, ApiConfig, AppState, ModelAugmenter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ApiConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let mut openai = OpenAi::new(&config.openai_api_key, &config.text_model)
        .with_image_model(&config.image_model);
    if let Some(base_url) = &config.openai_base_url {
        openai = openai.with_base_url(base_url);
    }

    let augmenter = Arc::new(ModelAugmenter::from_openai(Arc::new(openai)));
    let app = build_router(
        AppState::new(augmenter),
        &config.static_dir,
        &config.allowed_origins,
    );

    let addr = config.addr();
    info!(
        text_model = %config.text_model,
        image_model = %config.image_model,
        static_dir = %config.static_dir.display(),
        "Wordthing API starting on {addr}"
    );
    info!("App available at http://{addr}/berg/wordthing/");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
