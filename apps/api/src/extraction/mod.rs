//! Text Extractor — PDF bytes in, one text blob out.
//!
//! The PDF engine sits behind `PdfReader` so page joining and normalization can
//! be tested without a real document.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::errors::panic_message;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to read PDF: {0}")]
    Pdf(String),

    #[error("PDF extraction task aborted: {0}")]
    Aborted(String),
}

/// Narrow view of a PDF engine: bytes → page texts in page order.
pub trait PdfReader: Send + Sync {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError>;
}

/// `pdf-extract` backed reader. The parsed document lives only for the
/// duration of `read_pages`.
pub struct PdfExtractReader;

impl PdfReader for PdfExtractReader {
    fn read_pages(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractionError> {
        // pdf-extract panics on some malformed inputs instead of returning Err.
        std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
            .map_err(|panic| ExtractionError::Pdf(panic_message(panic.as_ref())))?
            .map_err(|e| ExtractionError::Pdf(e.to_string()))
    }
}

#[derive(Clone)]
pub struct TextExtractor {
    reader: Arc<dyn PdfReader>,
}

impl TextExtractor {
    pub fn new(reader: Arc<dyn PdfReader>) -> Self {
        Self { reader }
    }

    /// Extracts every page in order, joined with `\n`. Not normalized.
    /// A document with no pages yields an empty string.
    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        let pages = self.reader.read_pages(bytes)?;
        debug!("Extracted {} page(s) from {} bytes", pages.len(), bytes.len());
        Ok(pages.join("\n"))
    }
}

/// Collapses every whitespace run to a single space and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
