use axum::{extract::State, http::StatusCode, response::IntoResponse};
use service_core::error::AppError;

use crate::startup::AppState;

pub async fn metrics_endpoint(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let handle = state.metrics.as_ref().ok_or(AppError::ServiceUnavailable)?;

    Ok((
        StatusCode::OK,
        [("content-type", "text/plain; charset=utf-8")],
        handle.render(),
    ))
}
