//! Page source: PDF file → ordered, non-empty page texts.
//!
//! `pdf-extract` returns the whole document as a single string with form
//! feeds (`\x0C`) between pages; when no form feeds are present we fall
//! back to splitting on blank-line runs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// One page of extracted text. `number` is the 1-based position in the
/// original document, assigned before blank pages are filtered out.
#[derive(Debug, Clone)]
pub struct Page {
    pub number: usize,
    pub content: String,
}

/// Extract per-page text from the PDF at `path`, dropping pages that are
/// empty or whitespace-only.
pub fn load_pages(path: &Path) -> Result<Vec<Page>> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .with_context(|| format!("Failed to extract text from {}", path.display()))?;

    let pages = split_pages(&text);
    info!("Extracted {} non-empty pages from {}", pages.len(), path.display());
    Ok(pages)
}

fn split_pages(text: &str) -> Vec<Page> {
    let raw_pages: Vec<&str> = if text.contains('\x0C') {
        text.split('\x0C').collect()
    } else {
        text.split("\n\n\n").collect()
    };

    raw_pages
        .into_iter()
        .enumerate()
        .filter(|(_, content)| !content.trim().is_empty())
        .map(|(idx, content)| Page {
            number: idx + 1,
            content: content.trim().to_string(),
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_feed_split_keeps_original_numbering() {
        let pages = split_pages("first page\x0C   \x0Cthird page");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[0].content, "first page");
        assert_eq!(pages[1].number, 3);
    }

    #[test]
    fn blank_line_fallback() {
        let pages = split_pages("alpha\n\n\nbeta");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].content, "beta");
    }

    #[test]
    fn whitespace_only_document_yields_nothing() {
        assert!(split_pages("  \n \x0C \n ").is_empty());
    }

    #[test]
    fn non_pdf_bytes_error() {
        let path = std::env::temp_dir().join("pdf_dataset_not_a_pdf.pdf");
        std::fs::write(&path, b"This is not a PDF").unwrap();
        assert!(load_pages(&path).is_err());
        let _ = std::fs::remove_file(&path);
    }
}
