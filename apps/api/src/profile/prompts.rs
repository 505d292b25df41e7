// Profile analysis LLM prompt templates.

pub const SECTION_ANALYSIS_SYSTEM: &str =
    "You are an expert HR assistant analyzing LinkedIn profiles.";

/// Replace `{section_name}` and `{section_content}` before sending.
pub const SECTION_ANALYSIS_PROMPT: &str = r#"You are an expert HR assistant. Analyze the following LinkedIn profile section "{section_name}" and provide valuable insights for HR professionals:

{section_content}

Your analysis should include:
1. Key skills and qualifications
2. Relevant experience
3. Potential fit for roles
4. Any red flags or points of concern
5. Suggestions for interview questions

Format your response in a clear, structured way."#;
