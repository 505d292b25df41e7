// Profile pipeline: scraped or pasted sections → normalized sections held in a
// session → per-section LLM analysis cached in that session.
// Browser automation and login live outside this service.

pub mod analysis;
pub mod handlers;
pub mod prompts;
pub mod sections;
pub mod session;
