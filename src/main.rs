use std::sync::Arc;

use advisor_service::{build_app, config::AppConfig, gemini::GeminiClient, run_server, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advisor_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if config.gemini_api_key.is_empty() {
        // Requests fail with a generic error until the key is configured.
        tracing::warn!("GEMINI_API_KEY is not set");
    }

    let state = AppState::new(Arc::new(GeminiClient::new(&config)));

    run_server(build_app(state), config.port).await;
}
