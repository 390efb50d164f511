use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::{upstream, AppState};

use super::models::{ErrorResponse, SuggestRequest, SuggestResponse};

pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SuggestRequest>,
) -> Result<Json<SuggestResponse>, (StatusCode, Json<ErrorResponse>)> {
    let prompt = match payload.prompt.as_deref().map(str::trim) {
        Some(prompt) if !prompt.is_empty() => prompt,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Prompt is required".to_string(),
                }),
            ))
        }
    };

    match upstream::fetch_suggestion(&state.http, &state.config, prompt).await {
        Ok(suggestion) => Ok(Json(SuggestResponse { suggestion })),
        Err(err) => {
            error!("upstream completion failed: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch suggestion".to_string(),
                }),
            ))
        }
    }
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}
