use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::{debug, warn};

use crate::dto::{ClassifyResponse, OperationCodeResponse, StatusResponse, data_tokens};
use crate::error::{ApiError, Result};
use crate::state::AppState;

/// `POST /bfhl`
pub async fn classify(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<ClassifyResponse>> {
    let Json(body) = payload.map_err(|rejection| {
        warn!("Unreadable request body: {rejection}");
        ApiError::invalid_data()
    })?;

    let tokens = data_tokens(&body).ok_or_else(ApiError::invalid_data)?;
    let result = bfhl_core::classify(&tokens);

    debug!(
        "Classified {} tokens: odd={} even={} alphabets={} special={} sum={}",
        tokens.len(),
        result.odd_numbers.len(),
        result.even_numbers.len(),
        result.alphabets.len(),
        result.special_characters.len(),
        result.sum
    );

    Ok(Json(ClassifyResponse::new(&state.identity, result)))
}

/// `GET /bfhl`
pub async fn operation_code() -> Json<OperationCodeResponse> {
    Json(OperationCodeResponse { operation_code: 1 })
}

/// `GET /`
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse::default())
}
