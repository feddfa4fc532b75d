pub mod api;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod roles;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::generator::TextGenerator;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state).layer(TraceLayer::new_for_http())
}

pub async fn run_server(app: Router, port: u16) {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("bind failed");

    tracing::info!("advisor service listening on port {port}");

    axum::serve(listener, app).await.expect("server failed");
}
