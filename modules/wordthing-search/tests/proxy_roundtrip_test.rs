//! Drives `ProxyClient` against the real proxy router, served on a local port
//! with the generative model replaced.

use std::path::Path;
use std::sync::Arc;

use ai_client::AiError;
use async_trait::async_trait;
use wordthing_api::{build_router, AppState, Augmenter};
use wordthing_common::{AugmentationKind, PromptWord};
use wordthing_search::error::AugmentError;
use wordthing_search::testing::{sense, MockDictionary, MockThesaurus};
use wordthing_search::{AugmentationSource, ProxyClient, Screen, Session};

/// Succeeds for every kind except latin roots, which the upstream refuses.
struct EchoAugmenter;

#[async_trait]
impl Augmenter for EchoAugmenter {
    async fn augment(&self, kind: AugmentationKind, word: &PromptWord) -> Result<String, AiError> {
        match kind {
            AugmentationKind::LatinRoots => Err(AiError::Api {
                status: 500,
                message: "model overloaded".into(),
            }),
            other => Ok(format!("{} for {}", other.response_field(), word)),
        }
    }
}

async fn spawn_proxy() -> String {
    let app = build_router(
        AppState::new(Arc::new(EchoAugmenter)),
        Path::new("does-not-exist"),
        &[],
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetch_reads_the_kind_specific_field() {
    let client = ProxyClient::new(&spawn_proxy().await);

    let description = client
        .fetch(AugmentationKind::Description, "lantern")
        .await
        .unwrap();
    let image = client.fetch(AugmentationKind::Image, "lantern").await.unwrap();

    assert_eq!(description, "description for lantern");
    assert_eq!(image, "imageUrl for lantern");
}

#[tokio::test]
async fn upstream_failure_surfaces_the_fixed_message() {
    let client = ProxyClient::new(&spawn_proxy().await);

    let err = client
        .fetch(AugmentationKind::LatinRoots, "lantern")
        .await
        .unwrap_err();

    assert_eq!(err, AugmentError::Proxy("Failed to get Latin roots".into()));
}

#[tokio::test]
async fn rejected_word_surfaces_the_validation_message() {
    let client = ProxyClient::new(&spawn_proxy().await);

    let err = client
        .fetch(AugmentationKind::Description, "   ")
        .await
        .unwrap_err();

    assert_eq!(err, AugmentError::Proxy("Please enter a word".into()));
}

#[tokio::test]
async fn unreachable_proxy_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ProxyClient::new(&format!("http://{addr}"));
    let err = client
        .fetch(AugmentationKind::Image, "lantern")
        .await
        .unwrap_err();

    assert!(matches!(err, AugmentError::Transport(_)));
}

#[tokio::test]
async fn session_fills_panels_through_the_proxy() {
    let dictionary =
        MockDictionary::new().on_word("lantern", vec![sense("noun", &["A portable lamp."])]);
    let mut session = Session::new(
        Arc::new(dictionary),
        Arc::new(MockThesaurus::new()),
        Arc::new(ProxyClient::new(&spawn_proxy().await)),
    );

    session.search("lantern").await.unwrap();
    while session.next_update().await.is_some() {}

    let Screen::Results(view) = session.screen() else {
        panic!("expected results");
    };
    assert_eq!(
        view.panel(AugmentationKind::Description).body(),
        Some("description for lantern")
    );
    assert_eq!(
        view.panel(AugmentationKind::Image).body(),
        Some("imageUrl for lantern")
    );
    assert_eq!(
        view.panel(AugmentationKind::LatinRoots).body(),
        Some("Error fetching Latin roots.")
    );
}
