mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{advise, health, not_found, MAX_QUESTION_LEN};
#[allow(unused_imports)]
pub use models::{AdvisorRequest, AdvisorResponse, ErrorResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/ai-advisor", post(advise))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
