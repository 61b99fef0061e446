//! Exercises the OpenAI client against an in-process stub of the upstream API.

use ai_client::{AiError, ImageGenerator, ImageSize, OpenAi, TextGenerator};
use axum::{http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn healthy_upstream() -> Router {
    Router::new()
        .route(
            "/v1/chat/completions",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert_eq!(headers["authorization"], "Bearer sk-test");
                assert_eq!(body["max_tokens"], 150);
                let prompt = body["messages"][1]["content"].as_str().unwrap_or_default();
                Json(json!({
                    "choices": [{
                        "message": { "role": "assistant", "content": format!("  echo: {prompt}\n") },
                        "finish_reason": "stop"
                    }]
                }))
            }),
        )
        .route(
            "/v1/images/generations",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["n"], 1);
                assert_eq!(body["size"], "512x512");
                Json(json!({ "created": 1, "data": [{ "url": "https://img.example/lantern.png" }] }))
            }),
        )
}

#[tokio::test]
async fn text_generation_returns_trimmed_first_choice() {
    let base = spawn_stub(healthy_upstream()).await;
    let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url(base);

    let text = ai.generate_text("define lantern", 150).await.unwrap();

    assert_eq!(text, "echo: define lantern");
}

#[tokio::test]
async fn image_generation_returns_first_url() {
    let base = spawn_stub(healthy_upstream()).await;
    let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url(base);

    let url = ai
        .generate_image("a lantern", ImageSize::Medium)
        .await
        .unwrap();

    assert_eq!(url, "https://img.example/lantern.png");
}

#[tokio::test]
async fn upstream_error_status_maps_to_api_error() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({ "error": { "message": "quota exceeded" } })),
            )
        }),
    );
    let base = spawn_stub(app).await;
    let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url(base);

    let err = ai.generate_text("define lantern", 150).await.unwrap_err();

    match err {
        AiError::Api { status, message } => {
            assert_eq!(status, 429);
            assert!(message.contains("quota exceeded"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_is_an_error() {
    let app = Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    );
    let base = spawn_stub(app).await;
    let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url(base);

    let err = ai.generate_text("define lantern", 150).await.unwrap_err();

    assert!(matches!(err, AiError::EmptyResponse(_)));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let app = Router::new().route(
        "/v1/images/generations",
        post(|| async { "not json" }),
    );
    let base = spawn_stub(app).await;
    let ai = OpenAi::new("sk-test", "gpt-4o-mini").with_base_url(base);

    let err = ai
        .generate_image("a lantern", ImageSize::Medium)
        .await
        .unwrap_err();

    assert!(matches!(err, AiError::Parse(_)));
}
