use axum::Json;
use serde::{Deserialize, Serialize};

use crate::skills::matcher::match_skills;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub candidate: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub percentage: f64,
    pub rounded_percentage: f64,
    pub display_percentage: String,
    pub missing: Vec<String>,
    pub all_found: bool,
}

/// POST /api/v1/skills/match
pub async fn handle_match(Json(req): Json<MatchRequest>) -> Json<MatchResponse> {
    let result = match_skills(&req.required, &req.candidate);
    Json(MatchResponse {
        percentage: result.percentage,
        rounded_percentage: result.rounded_percentage(),
        display_percentage: result.display_percentage(),
        all_found: result.all_found(),
        missing: result.missing,
    })
}
