mod handlers;
mod models;

use std::sync::Arc;

use axum::{routing::post, Router};

use crate::AppState;

pub use handlers::{not_found, suggest};
pub use models::{ErrorResponse, SuggestRequest, SuggestResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/suggest", post(suggest))
        .fallback(not_found)
        .with_state(state)
}
