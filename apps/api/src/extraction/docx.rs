//! DOCX paragraph extraction.
//!
//! A .docx file is an OOXML zip; the document body lives in
//! `word/document.xml`. Each `<w:p>` paragraph's `<w:t>` text runs are
//! concatenated and paragraphs are joined with newlines, matching how
//! word processors linearize the body.

use std::io::{Cursor, Read};

use regex::Regex;

use super::{ExtractError, TextExtractor};

/// The single DOCX strategy: paragraph texts, newline-joined.
pub struct ParagraphExtractor;

impl TextExtractor for ParagraphExtractor {
    fn name(&self) -> &'static str {
        "docx-paragraphs"
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::Docx(format!("not a zip archive: {e}")))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractError::Docx(format!("missing word/document.xml: {e}")))?
            .read_to_string(&mut document_xml)
            .map_err(|e| ExtractError::Docx(format!("unreadable document.xml: {e}")))?;

        Ok(paragraph_texts(&document_xml).join("\n"))
    }
}

/// Collects the visible text of each paragraph in body order. Text runs
/// within a paragraph concatenate without separators; XML entities are
/// decoded so `&amp;` comes back as `&`.
fn paragraph_texts(document_xml: &str) -> Vec<String> {
    let run_re = Regex::new(r"<w:t[^>]*>([^<]*)</w:t>").unwrap();

    document_xml
        .split("</w:p>")
        .filter(|chunk| chunk.contains("<w:p"))
        .map(|paragraph| {
            run_re
                .captures_iter(paragraph)
                .map(|cap| html_escape::decode_html_entities(&cap[1]).into_owned())
                .collect::<String>()
        })
        .collect()
}
