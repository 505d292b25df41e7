//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::resume::document::extract_pdf_text;
use crate::resume::extraction::ExtractionOutcome;
use crate::resume::parser::{answer_question, extract_resume};
use crate::resume::report::{analyze_skills, parse_required_skills, SkillsAnalysis};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeParseResponse {
    pub extraction: ExtractionOutcome,
    /// Present only when the client sent a non-empty `required_skills` field.
    pub skills: Option<SkillsAnalysis>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub resume_text: String,
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Fields of the multipart upload, as sent by the client.
#[derive(Default)]
struct ParseForm {
    file: Option<Bytes>,
    required_skills: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Multipart body: `file` (PDF, required), `required_skills` (one per line, optional).
/// PDF text → LLM extraction → optional skills report.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ResumeParseResponse>, AppError> {
    let form = read_form(multipart).await?;
    let file = form.file.ok_or_else(|| {
        AppError::Validation("A PDF resume is required in the 'file' field".to_string())
    })?;

    let resume_text = extract_pdf_text(file).await?;
    let extraction = extract_resume(&resume_text, &state.llm).await?;

    let skills = form
        .required_skills
        .filter(|text| !text.is_empty())
        .map(|text| analyze_skills(&parse_required_skills(&text), &extraction));

    Ok(Json(ResumeParseResponse { extraction, skills }))
}

/// POST /api/v1/resumes/ask
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(req): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if req.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }

    let answer = answer_question(&req.resume_text, &req.question, &state.llm).await?;
    Ok(Json(AskResponse { answer }))
}

async fn read_form(mut multipart: Multipart) -> Result<ParseForm, AppError> {
    let mut form = ParseForm::default();
    while let Some(field) = multipart.next_field().await.map_err(invalid_body)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => form.file = Some(field.bytes().await.map_err(invalid_body)?),
            "required_skills" => form.required_skills = Some(field.text().await.map_err(invalid_body)?),
            _ => {}
        }
    }
    Ok(form)
}

fn invalid_body(e: MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}
