// PDF extraction module
pub mod basic;
pub mod lopdf_helper;

pub use basic::{extract_text, join_pages, ExtractedText};
