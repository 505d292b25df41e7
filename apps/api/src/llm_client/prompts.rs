// Shared prompt constants.
// Each pipeline that needs LLM calls defines its own prompts.rs alongside it;
// this file holds the fragments they have in common.

/// Default system prompt for context-grounded answers.
pub const ASSISTANT_SYSTEM: &str =
    "You are a helpful AI assistant who answers the user's question based on the provided context.";

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";
