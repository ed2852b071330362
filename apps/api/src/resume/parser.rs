//! Resume Parser pipeline: Received → Extracted → Interpreted → Returned.
//!
//! Any step may short-circuit to a failure; nothing is shared or persisted
//! between requests, so there is nothing to roll back.

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, info};

use crate::extraction::{normalize_whitespace, ExtractionError, TextExtractor};
use crate::models::resume::StructuredResume;
use crate::resume::interpreter::{InterpretationError, ResumeInterpreter};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Interpretation(#[from] InterpretationError),
}

#[derive(Clone)]
pub struct ResumeParser {
    extractor: TextExtractor,
    interpreter: ResumeInterpreter,
}

impl ResumeParser {
    pub fn new(extractor: TextExtractor, interpreter: ResumeInterpreter) -> Self {
        Self {
            extractor,
            interpreter,
        }
    }

    pub async fn parse(&self, document: Bytes) -> Result<StructuredResume, ParseError> {
        debug!("Received document ({} bytes)", document.len());

        // PDF parsing is CPU-bound; keep it off the async workers.
        let extractor = self.extractor.clone();
        let raw_text = tokio::task::spawn_blocking(move || extractor.extract(&document))
            .await
            .map_err(|e| ExtractionError::Aborted(e.to_string()))??;

        let resume_text = normalize_whitespace(&raw_text);
        if resume_text.is_empty() {
            return Err(InterpretationError::EmptyText.into());
        }
        info!("Extracted {} chars of resume text", resume_text.len());

        let resume = self.interpreter.interpret(&resume_text).await?;
        info!(sections = ?resume.present_sections(), "Resume interpreted");

        Ok(resume)
    }
}
