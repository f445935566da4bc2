//! Plain-text extraction from uploaded PDF and TXT files.

use lopdf::Document;
use thiserror::Error;

use crate::models::domain::DocumentFormat;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    Extraction(String),
}

/// Result of an extraction attempt.
///
/// Failures never abort the caller: `text` is empty and `notice` carries the
/// reason so it can be shown to the user.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub format: Option<DocumentFormat>,
    pub text: String,
    pub notice: Option<ExtractError>,
}

impl Extraction {
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Extracts text from `data` according to `declared_type`.
pub fn extract(data: &[u8], declared_type: &str) -> Extraction {
    let format = DocumentFormat::from_mime(declared_type);
    let result = match format {
        Some(DocumentFormat::Pdf) => extract_pdf(data),
        Some(DocumentFormat::Text) => Ok(decode_text(data)),
        None => Err(ExtractError::UnsupportedFormat(declared_type.to_string())),
    };

    match result {
        Ok(text) => Extraction {
            format,
            text,
            notice: None,
        },
        Err(err) => {
            log::warn!("Text extraction failed for '{}': {}", declared_type, err);
            Extraction {
                format,
                text: String::new(),
                notice: Some(err),
            }
        }
    }
}

/// Page-by-page PDF text, pages joined with newlines. A page that yields no
/// text contributes an empty line instead of failing the document.
pub fn extract_pdf(data: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(data)
        .map_err(|e| ExtractError::Extraction(format!("failed to parse PDF: {e}")))?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .map(|page_number| page_text(&doc, page_number))
        .collect();

    log::info!("PDF text extraction complete ({} pages)", pages.len());
    Ok(pages.join("\n"))
}

fn page_text(doc: &Document, page_number: u32) -> String {
    doc.extract_text(&[page_number]).unwrap_or_else(|e| {
        log::warn!("No extractable text on PDF page {}: {}", page_number, e);
        String::new()
    })
}

/// UTF-8 decode that drops invalid byte sequences.
pub fn decode_text(data: &[u8]) -> String {
    data.utf8_chunks().map(|chunk| chunk.valid()).collect()
}
