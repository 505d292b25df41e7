//! Resume parser — LLM structured extraction with one JSON-repair retry.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::{ASSISTANT_SYSTEM, JSON_ONLY_SYSTEM};
use crate::llm_client::{ChatRequest, LlmClient, DEFAULT_MAX_TOKENS, EXTRACTION_MODEL};
use crate::resume::extraction::{coerce_extraction, parse_llm_document, ExtractionOutcome};
use crate::resume::prompts::{JSON_REPAIR_PROMPT, RESUME_EXTRACTION_PROMPT, RESUME_QA_PROMPT};

/// Extracts structured fields from resume text.
///
/// 1. Ask for the JSON document.
/// 2. If the reply does not parse, send it back with a "validate and correct" prompt.
/// 3. Coerce whatever parsed into a typed record.
///
/// Transport failures are `AppError::Llm`. A reply that is still not JSON after the
/// repair pass is returned as `ExtractionOutcome::Unparseable`.
pub async fn extract_resume(
    resume_text: &str,
    llm: &LlmClient,
) -> Result<ExtractionOutcome, AppError> {
    let prompt = RESUME_EXTRACTION_PROMPT.replace("{resume_text}", resume_text);
    let reply = llm
        .complete(ChatRequest {
            model: EXTRACTION_MODEL,
            max_tokens: DEFAULT_MAX_TOKENS,
            system: ASSISTANT_SYSTEM,
            prompt: &prompt,
        })
        .await
        .map_err(|e| AppError::Llm(format!("Failed to extract resume: {e}")))?;

    match parse_llm_document(&reply) {
        Ok(document) => return Ok(log_outcome(coerce_extraction(document))),
        Err(e) => debug!("Extraction reply is not valid JSON ({e}); requesting a corrected document"),
    }

    let repair_prompt = JSON_REPAIR_PROMPT.replace("{data}", &reply);
    let repaired = llm
        .complete(ChatRequest {
            model: EXTRACTION_MODEL,
            max_tokens: DEFAULT_MAX_TOKENS,
            system: JSON_ONLY_SYSTEM,
            prompt: &repair_prompt,
        })
        .await
        .map_err(|e| AppError::Llm(format!("Failed to validate extracted JSON: {e}")))?;

    let outcome = match parse_llm_document(&repaired) {
        Ok(document) => coerce_extraction(document),
        Err(e) => ExtractionOutcome::Unparseable {
            raw: repaired,
            reason: e.to_string(),
        },
    };
    Ok(log_outcome(outcome))
}

/// Answers a free-form question about a resume.
pub async fn answer_question(
    resume_text: &str,
    question: &str,
    llm: &LlmClient,
) -> Result<String, AppError> {
    let prompt = RESUME_QA_PROMPT
        .replace("{question}", question)
        .replace("{context}", resume_text);
    llm.complete(ChatRequest {
        model: EXTRACTION_MODEL,
        max_tokens: DEFAULT_MAX_TOKENS,
        system: ASSISTANT_SYSTEM,
        prompt: &prompt,
    })
    .await
    .map_err(|e| AppError::Llm(format!("Failed to answer resume question: {e}")))
}

fn log_outcome(outcome: ExtractionOutcome) -> ExtractionOutcome {
    match &outcome {
        ExtractionOutcome::Parsed { record, .. } => info!(
            skills = record.skills.len(),
            experience = record.experience.len(),
            "Resume extracted"
        ),
        ExtractionOutcome::Unparseable { reason, .. } => {
            warn!("Resume extraction reply could not be parsed: {reason}")
        }
    }
    outcome
}
