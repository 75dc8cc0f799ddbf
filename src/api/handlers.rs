use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use super::request::ScheduleRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;
use crate::scheduler::Scheduler;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
}

/// `POST /schedule` : rotation + surcharges sur `[from, until)`.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "json data error");
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "json syntax error");
                    ApiError::malformed_json(format!("invalid JSON syntax: {err}"))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let started = Instant::now();
    let window = request.window();
    let result = Scheduler::new(request.schedule)
        .and_then(|s| s.render(&window, &request.overrides, state.options()));

    match result {
        Ok(entries) => {
            info!(
                correlation_id = %correlation_id,
                overrides = request.overrides.len(),
                entries = entries.len(),
                duration_us = started.elapsed().as_micros(),
                "schedule rendered"
            );
            (StatusCode::OK, Json(entries)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "schedule rejected");
            ApiErrorResponse::from(err).into_response()
        }
    }
}
