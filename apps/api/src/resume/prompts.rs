// Resume Interpreter prompt template.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

pub const RESUME_PARSE_PROMPT: &str = r#"Please analyze the following resume text and convert it into a structured JSON format.
Include the following sections if present:
- Personal Information (name, email, phone, location)
- Summary/Objective
- Work Experience (with company, position, dates, and responsibilities)
- Education
- Skills
- Certifications
- Projects

Use these top-level keys: "personal_information", "summary", "work_experience", "education", "skills", "certifications", "projects".

Resume Text:
{resume_text}

{json_only}"#;

/// Embeds the resume text verbatim into the fixed instruction prompt.
pub fn build_resume_prompt(resume_text: &str) -> String {
    // json_only goes in first so resume text containing "{json_only}" is left alone.
    RESUME_PARSE_PROMPT
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::RESUME_SECTIONS;

    #[test]
    fn test_prompt_embeds_text_verbatim() {
        let prompt = build_resume_prompt("John Doe, Software Engineer");
        assert!(prompt.contains("Resume Text:\nJohn Doe, Software Engineer\n"));
        assert!(prompt.ends_with(JSON_ONLY_INSTRUCTION));
    }

    #[test]
    fn test_prompt_names_every_section() {
        let prompt = build_resume_prompt("");
        for section in RESUME_SECTIONS {
            assert!(prompt.contains(section), "missing {section}");
        }
    }

    #[test]
    fn test_placeholder_text_in_resume_is_not_expanded() {
        let prompt = build_resume_prompt("literal {json_only} and {resume_text}");
        assert!(prompt.contains("literal {json_only} and {resume_text}"));
    }
}
