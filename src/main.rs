use std::sync::Arc;

use suggestion_relay::{build_app, config::RelayConfig, run_server, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = RelayConfig::from_env();
    let port = config.port;
    let state = Arc::new(AppState::new(config));

    run_server(build_app(state), port).await;
}
