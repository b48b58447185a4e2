// Configuration constants for archscan
use std::env;

// Report output, written into the scanned directory
pub const OUTPUT_FILE: &str = "pdf_analysis_result.json";

// Characters of extracted text kept in the report
pub const TEXT_PREVIEW_CHARS: usize = 3000;

// Case-sensitive suffix used to pick the input document
pub const PDF_SUFFIX: &str = ".pdf";

// Logging
pub const LOG_ENV_VAR: &str = "ARCHSCAN_LOG";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Separator emitted before the text of page `page_number` (1-based).
pub fn page_separator(page_number: u32) -> String {
    format!("\n--- PAGE {} ---\n", page_number)
}

// Get log filter from environment or use default
pub fn log_filter() -> String {
    env::var(LOG_ENV_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}
