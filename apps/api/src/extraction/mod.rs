// Text Extraction Engine.
// Converts uploaded document bytes into plain text. PDF runs two strategies
// in fixed order with empty-result-triggers-fallback semantics; DOCX has a
// single strategy. Pure CPU over in-memory bytes, no retries, no timeouts.

pub mod docx;
pub mod pdf;

use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, warn};

/// Terminal extraction failure. The caller turns this into a user-facing
/// message and asks for a re-upload; nothing here is retried internally.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no extractable text in document")]
    NoText,

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),
}

/// Declared type of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from an uploaded filename's extension,
    /// case-insensitive. Unknown extensions are the caller's validation
    /// problem, not an extraction failure.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let ext = filename.rsplit_once('.').map(|(_, e)| e.to_lowercase())?;
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// An uploaded document: immutable byte payload plus its declared kind.
/// Discarded once extraction has produced text.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub kind: DocumentKind,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, kind: DocumentKind) -> Self {
        Self {
            bytes: bytes.into(),
            kind,
        }
    }
}

/// A single text-extraction strategy. Strategies are interchangeable and
/// the engine decides the order in which they are consulted.
pub trait TextExtractor {
    fn name(&self) -> &'static str;

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

/// Extracts plain text from a document, or fails with [`ExtractError`]
/// when no usable text can be obtained.
pub fn extract_text(doc: &RawDocument) -> Result<String, ExtractError> {
    match doc.kind {
        DocumentKind::Pdf => {
            run_strategies(&[&pdf::LayoutExtractor, &pdf::PagedExtractor], &doc.bytes)
        }
        DocumentKind::Docx => run_strategies(&[&docx::ParagraphExtractor], &doc.bytes),
    }
}

/// Tries each strategy in order and returns the first non-whitespace result.
/// An `Ok` that is empty or all-whitespace triggers the next strategy just
/// like an `Err` does: image-only and scanned PDFs commonly yield zero text
/// without raising, and must still reach the fallback.
fn run_strategies(
    strategies: &[&dyn TextExtractor],
    bytes: &[u8],
) -> Result<String, ExtractError> {
    for strategy in strategies {
        match strategy.extract(bytes) {
            Ok(text) if !text.trim().is_empty() => {
                debug!(strategy = strategy.name(), chars = text.len(), "text extracted");
                return Ok(text);
            }
            Ok(_) => {
                debug!(strategy = strategy.name(), "strategy returned no text");
            }
            Err(e) => {
                warn!(strategy = strategy.name(), error = %e, "strategy failed");
            }
        }
    }
    Err(ExtractError::NoText)
}
