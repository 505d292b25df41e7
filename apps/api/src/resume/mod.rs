// Resume pipeline: PDF text → LLM structured extraction → typed record → skills report.
// All LLM calls go through llm_client.

pub mod document;
pub mod extraction;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod report;
