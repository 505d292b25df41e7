//! Section analysis — HR insights for one profile section, cached per session.

use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::{ChatRequest, LlmClient, ANALYSIS_MODEL};
use crate::profile::prompts::{SECTION_ANALYSIS_PROMPT, SECTION_ANALYSIS_SYSTEM};
use crate::profile::session::ProfileSessions;

const ANALYSIS_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Clone, Serialize)]
pub struct SectionAnalysis {
    pub section: String,
    pub analysis: String,
    pub cached: bool,
}

/// Asks the LLM for an HR analysis of one section.
pub async fn analyze_section(
    section_name: &str,
    section_content: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = SECTION_ANALYSIS_PROMPT
        .replace("{section_content}", section_content)
        .replace("{section_name}", section_name);
    llm.complete(ChatRequest {
        model: ANALYSIS_MODEL,
        max_tokens: ANALYSIS_MAX_TOKENS,
        system: SECTION_ANALYSIS_SYSTEM,
        prompt: &prompt,
    })
    .await
    .map_err(|e| AppError::Llm(format!("Error analyzing section '{section_name}': {e}")))
}

/// Returns the analysis for `title` in session `id`, calling the LLM only if the
/// session has none yet. The session lock is not held during the LLM call.
pub async fn analyze_in_session(
    sessions: &ProfileSessions,
    id: Uuid,
    title: &str,
    llm: &LlmClient,
) -> Result<SectionAnalysis, AppError> {
    let session = sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Profile session {id} not found")))?;

    if let Some(analysis) = session.cached_analysis(title) {
        return Ok(SectionAnalysis {
            section: title.to_string(),
            analysis: analysis.to_string(),
            cached: true,
        });
    }

    let section = session
        .section(title)
        .ok_or_else(|| AppError::NotFound(format!("Section '{title}' not found in profile")))?;

    info!(session_id = %id, section = title, "Analyzing profile section");
    let fresh = analyze_section(&section.title, &section.content, llm).await?;

    let analysis = sessions
        .update(id, |s| s.record_analysis(title, fresh).to_string())
        .await
        .ok_or_else(|| AppError::NotFound(format!("Profile session {id} not found")))?;

    Ok(SectionAnalysis {
        section: title.to_string(),
        analysis,
        cached: false,
    })
}
