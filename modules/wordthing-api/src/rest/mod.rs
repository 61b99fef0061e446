use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::{error, info, warn};

use wordthing_common::{AugmentationKind, ErrorBody, PromptWord, WordRequest};

use crate::AppState;

pub async fn api_description(
    State(state): State<AppState>,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    augment(&state, AugmentationKind::Description, body).await
}

pub async fn api_image(
    State(state): State<AppState>,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    augment(&state, AugmentationKind::Image, body).await
}

pub async fn api_latin_roots(
    State(state): State<AppState>,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    augment(&state, AugmentationKind::LatinRoots, body).await
}

async fn augment(
    state: &AppState,
    kind: AugmentationKind,
    body: Result<Json<WordRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(kind = kind.path(), error = %rejection, "Rejected malformed request body");
            return error_response(
                StatusCode::BAD_REQUEST,
                "Request body must be JSON like {\"word\": \"...\"}",
            );
        }
    };

    let word = match PromptWord::parse(&body.word) {
        Ok(word) => word,
        Err(e) => {
            warn!(kind = kind.path(), error = %e, "Rejected invalid word");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    match state.augmenter.augment(kind, &word).await {
        Ok(value) => {
            info!(kind = kind.path(), word = %word, "Augmentation served");
            let mut payload = serde_json::Map::new();
            payload.insert(kind.response_field().to_string(), value.into());
            Json(serde_json::Value::Object(payload)).into_response()
        }
        Err(e) => {
            error!(kind = kind.path(), word = %word, error = %e, "Augmentation upstream failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, kind.server_error_message())
        }
    }
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}
