use axum::Json;
use serde::{Deserialize, Serialize};

use crate::text::normalize::normalize;

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub text: String,
}

/// POST /api/v1/text/normalize
///
/// Lets a scraper client clean each section's raw text before storing or displaying it.
pub async fn handle_normalize(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        text: normalize(&req.text),
    })
}
