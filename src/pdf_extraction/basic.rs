// PAGE-ORDERED PDF TEXT EXTRACTION
use super::lopdf_helper::with_pdf;
use crate::config;
use crate::types::Result;
use lopdf::Document;
use std::path::Path;

/// Full document text with a separator before every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub total_pages: usize,
}

/// Extract the text layer of every page, in page order.
///
/// Prints `Total pages: <n>` before the first page is read. Any failure,
/// including one on a later page, discards everything read so far.
pub fn extract_text(pdf_path: &Path) -> Result<ExtractedText> {
    with_pdf(pdf_path, |document| {
        let page_numbers = page_numbers(document);
        println!("Total pages: {}", page_numbers.len());

        let mut pages = Vec::with_capacity(page_numbers.len());
        for page_number in &page_numbers {
            let page_text = document.extract_text(&[*page_number])?;
            tracing::debug!(
                "Page {}: {} chars",
                page_number,
                page_text.chars().count()
            );
            pages.push(page_text);
        }

        Ok(ExtractedText {
            text: join_pages(&pages),
            total_pages: page_numbers.len(),
        })
    })
}

// Page numbers from the page tree, ascending and 1-based
fn page_numbers(document: &Document) -> Vec<u32> {
    document.get_pages().keys().copied().collect()
}

/// Concatenate page texts, numbering separators from 1.
pub fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::new();
    for (index, page) in pages.iter().enumerate() {
        text.push_str(&config::page_separator(index as u32 + 1));
        text.push_str(page.as_ref());
    }
    text
}
