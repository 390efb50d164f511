pub mod api;
pub mod config;
pub mod upstream;

use std::sync::Arc;

use axum::Router;
use tracing::info;

use config::RelayConfig;

pub struct AppState {
    pub config: RelayConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

pub fn build_app(state: Arc<AppState>) -> Router {
    api::router(state)
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    info!("listening on http://0.0.0.0:{port}");

    axum::serve(listener, app).await.expect("server failed");
}
