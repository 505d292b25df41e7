//! Axum route handlers for the Profile API.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::analysis::{analyze_in_session, SectionAnalysis};
use crate::profile::sections::{build_sections, sections_from_pasted, ProfileSection, RawSection};
use crate::profile::session::ProfileSession;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateProfileRequest {
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct PasteProfileRequest {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeSectionRequest {
    pub section: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub session_id: Uuid,
    pub titles: Vec<String>,
    pub sections: Vec<ProfileSection>,
    pub analyses: HashMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileSession> for ProfileResponse {
    fn from(session: ProfileSession) -> Self {
        Self {
            session_id: session.id,
            titles: session.titles(),
            sections: session.sections,
            analyses: session.analyses,
            created_at: session.created_at,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profiles
///
/// Accepts the scraper's per-section raw text and opens a profile session.
pub async fn handle_create_profile(
    State(state): State<AppState>,
    Json(req): Json<CreateProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    if req.sections.is_empty() {
        return Err(AppError::Validation(
            "Could not find any profile sections".to_string(),
        ));
    }
    open_session(&state, build_sections(req.sections)).await
}

/// POST /api/v1/profiles/paste
///
/// Fallback for when scraping fails: the user pastes the profile page content.
pub async fn handle_paste_profile(
    State(state): State<AppState>,
    Json(req): Json<PasteProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    if req.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    open_session(&state, sections_from_pasted(&req.content)).await
}

/// GET /api/v1/profiles/:id
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let session = state
        .profiles
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Profile session {id} not found")))?;
    Ok(Json(session.into()))
}

/// DELETE /api/v1/profiles/:id
pub async fn handle_delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.profiles.remove(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Profile session {id} not found")))
    }
}

/// POST /api/v1/profiles/:id/analysis
///
/// Returns the HR analysis of one section, computing it on first request.
pub async fn handle_analyze_section(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AnalyzeSectionRequest>,
) -> Result<Json<SectionAnalysis>, AppError> {
    let analysis = analyze_in_session(&state.profiles, id, &req.section, &state.llm).await?;
    Ok(Json(analysis))
}

async fn open_session(
    state: &AppState,
    sections: Vec<ProfileSection>,
) -> Result<(StatusCode, Json<ProfileResponse>), AppError> {
    let session = ProfileSession::new(sections);
    state.profiles.insert(session.clone()).await;
    let live_sessions = state.profiles.count().await;
    info!(
        session_id = %session.id,
        sections = session.sections.len(),
        live_sessions,
        "Opened profile session"
    );
    Ok((StatusCode::CREATED, Json(session.into())))
}
