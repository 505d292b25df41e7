use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::state::AppState;
use crate::subscribers::store::{subscribe_email, SubscribeOutcome};

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub status: SubscribeOutcome,
}

/// POST /api/v1/subscribers
///
/// 201 for a new address, 200 when it was already subscribed.
pub async fn handle_subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscribeRequest>,
) -> Result<(StatusCode, Json<SubscribeResponse>), AppError> {
    let status = subscribe_email(state.subscribers.as_ref(), &req.email).await?;
    let code = match status {
        SubscribeOutcome::Subscribed => StatusCode::CREATED,
        SubscribeOutcome::AlreadySubscribed => StatusCode::OK,
    };
    Ok((code, Json(SubscribeResponse { status })))
}
