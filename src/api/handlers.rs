use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;

use super::models::{AdvisorRequest, AdvisorResponse, ErrorResponse};

pub const MAX_QUESTION_LEN: usize = 1000;

const INVALID_REQUEST: &str = "Invalid request format";
const GENERATION_FAILED: &str = "Failed to process your request. Please try again.";
const EMPTY_ANSWER_FALLBACK: &str = "Unable to generate response. Please try again.";

pub async fn advise(
    State(state): State<AppState>,
    payload: Result<Json<AdvisorRequest>, JsonRejection>,
) -> Result<Json<AdvisorResponse>, (StatusCode, Json<ErrorResponse>)> {
    // Unknown roles and unparseable bodies both surface as the extractor
    // rejection and map to the same 400 shape.
    let Ok(Json(request)) = payload else {
        tracing::warn!("rejected advisor request with malformed body");
        return Err(invalid_request());
    };

    let question_len = request.question.chars().count();
    if question_len == 0 || question_len > MAX_QUESTION_LEN {
        tracing::warn!(
            "rejected advisor request with question of {question_len} chars (limit {MAX_QUESTION_LEN})"
        );
        return Err(invalid_request());
    }

    let instruction = request.role.instruction();

    match state.generator.generate(instruction, &request.question).await {
        Ok(answer) => {
            let answer = if answer.trim().is_empty() {
                EMPTY_ANSWER_FALLBACK.to_string()
            } else {
                answer
            };

            Ok(Json(AdvisorResponse {
                success: true,
                answer,
                role: request.role,
            }))
        }
        Err(err) => {
            tracing::error!("AI advisor error: {err}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: GENERATION_FAILED.to_string(),
                }),
            ))
        }
    }
}

fn invalid_request() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            success: false,
            error: INVALID_REQUEST.to_string(),
        }),
    )
}

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}
