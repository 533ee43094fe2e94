//! The two PDF strategies: whole-document layout extraction first,
//! per-page extraction as the fallback. Both wrap `pdf-extract`; the
//! ordering and the empty-result fallback trigger live in the engine.

use super::{ExtractError, TextExtractor};

/// Primary strategy: layout-aware extraction over the whole document.
pub struct LayoutExtractor;

impl TextExtractor for LayoutExtractor {
    fn name(&self) -> &'static str {
        "pdf-layout"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
    }
}

/// Fallback strategy: extract each page independently and concatenate.
/// Recovers text from documents where the layout pass comes back empty.
pub struct PagedExtractor;

impl TextExtractor for PagedExtractor {
    fn name(&self) -> &'static str {
        "pdf-paged"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| ExtractError::Pdf(e.to_string()))?;
        Ok(pages.join("\n"))
    }
}
