//! Resume Interpreter — normalized text in, `StructuredResume` out.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use crate::llm_client::{strip_json_fences, LlmError, TextGenerator};
use crate::models::resume::StructuredResume;
use crate::resume::prompts::build_resume_prompt;

#[derive(Debug, Error)]
pub enum InterpretationError {
    #[error("No text could be extracted from the document")]
    EmptyText,

    #[error("Generation call failed: {0}")]
    Generation(#[from] LlmError),

    #[error("Model reply is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Model reply parsed to an empty value")]
    EmptyResult,
}

#[derive(Clone)]
pub struct ResumeInterpreter {
    generator: Arc<dyn TextGenerator>,
}

impl ResumeInterpreter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Sends the text to the model and parses the reply. Empty input is not
    /// rejected here; `ResumeParser` short-circuits it before calling.
    pub async fn interpret(
        &self,
        resume_text: &str,
    ) -> Result<StructuredResume, InterpretationError> {
        let prompt = build_resume_prompt(resume_text);
        let reply = self.generator.generate(&prompt).await?;
        debug!("Model replied with {} chars", reply.len());

        let resume = parse_reply(&reply)?;
        if resume.is_empty() {
            warn!("Model reply parsed to an empty value");
            return Err(InterpretationError::EmptyResult);
        }
        Ok(resume)
    }
}

/// Strips code fences and parses what remains as JSON.
pub fn parse_reply(reply: &str) -> Result<StructuredResume, InterpretationError> {
    let cleaned = strip_json_fences(reply);
    let value = serde_json::from_str(cleaned)?;
    Ok(StructuredResume(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::tests::FakeGenerator;
    use serde_json::json;

    fn interpreter(generator: &Arc<FakeGenerator>) -> ResumeInterpreter {
        ResumeInterpreter::new(generator.clone())
    }

    #[test]
    fn test_parse_reply_fenced_json() {
        let resume = parse_reply("```json\n{\"a\":1}\n```").unwrap();
        assert_eq!(resume.0, json!({"a": 1}));
    }

    #[test]
    fn test_parse_reply_rejects_prose() {
        assert!(matches!(
            parse_reply("sorry, I cannot process this"),
            Err(InterpretationError::InvalidJson(_))
        ));
    }

    #[tokio::test]
    async fn test_interpret_passes_model_json_through() {
        let reply = r#"```json
{
  "personal_information": {"name": "John Doe"},
  "work_experience": [{"company": "Acme", "position": "Software Engineer"}],
  "hobbies": ["climbing"]
}
```"#;
        let generator = Arc::new(FakeGenerator::replying(reply));
        let resume = interpreter(&generator)
            .interpret("John Doe, Software Engineer")
            .await
            .unwrap();

        assert_eq!(resume.0["personal_information"]["name"], "John Doe");
        assert_eq!(resume.0["hobbies"], json!(["climbing"]));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_interpret_embeds_text_in_prompt() {
        let generator = Arc::new(FakeGenerator::replying("{\"summary\": \"x\"}"));
        interpreter(&generator)
            .interpret("Jane Roe, Data Scientist")
            .await
            .unwrap();
        assert!(generator
            .last_prompt()
            .unwrap()
            .contains("Jane Roe, Data Scientist"));
    }

    #[tokio::test]
    async fn test_interpret_invalid_json_fails() {
        let generator = Arc::new(FakeGenerator::replying("sorry, I cannot process this"));
        let result = interpreter(&generator).interpret("text").await;
        assert!(matches!(result, Err(InterpretationError::InvalidJson(_))));
    }

    #[tokio::test]
    async fn test_interpret_generation_error_fails() {
        let generator = Arc::new(FakeGenerator::failing());
        let result = interpreter(&generator).interpret("text").await;
        assert!(matches!(
            result,
            Err(InterpretationError::Generation(LlmError::Api { status: 429, .. }))
        ));
    }

    #[tokio::test]
    async fn test_interpret_empty_object_fails() {
        let generator = Arc::new(FakeGenerator::replying("```json\n{}\n```"));
        let result = interpreter(&generator).interpret("text").await;
        assert!(matches!(result, Err(InterpretationError::EmptyResult)));
    }

    #[tokio::test]
    async fn test_interpret_forwards_empty_text() {
        let generator = Arc::new(FakeGenerator::replying("{\"summary\": null}"));
        interpreter(&generator).interpret("").await.unwrap();
        assert_eq!(generator.calls(), 1);
    }
}
