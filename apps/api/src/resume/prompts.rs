// Resume pipeline LLM prompt templates.
// Placeholders in braces are substituted with `str::replace` before sending.

/// Structured-extraction template. Replace `{resume_text}`.
pub const RESUME_EXTRACTION_PROMPT: &str = r#"You are tasked with parsing a job resume. Your goal is to extract relevant information in a valid structured JSON format.

RESUME TEXT:
{resume_text}

Include these fields:
- "personal_info": {"name", "email", "phone", "location"}
- "education": array of educational qualifications, each {"institution", "degree", "year"}
- "experience": array of work experiences, each {"company", "position", "duration", "responsibilities": ["string"]}
- "skills": array of all technical and soft skills mentioned
- "certifications": array of certifications, if any
- "languages": array of languages known, if mentioned

Output only valid JSON without any preamble or explanations."#;

/// Second pass when the first reply is not valid JSON. Replace `{data}`.
pub const JSON_REPAIR_PROMPT: &str = r#"Please validate and correct the following JSON data:

EXTRACTED INFORMATION:
{data}

Provide only the corrected JSON, with no preamble or explanation."#;

/// Free-form question over a resume. Replace `{question}` and `{context}`.
pub const RESUME_QA_PROMPT: &str = r#"TASK: Answer a question about the following resume.

RESUME TEXT:
{context}

When relevant, organise the answer around:
1. Contact information (name, email, phone, website/portfolio)
2. Education (institution, degree, field of study, graduation dates)
3. Experience (job title, company, location, dates, responsibilities/projects)
4. Projects (title, technologies used, outcomes)
5. Skills (programming languages, technologies/tools)
6. Additional information (certifications, awards, affiliations, languages)

QUESTION:
{question}

ANSWER:"#;
