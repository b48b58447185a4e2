// Report assembly and JSON output
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;
use crate::pdf_extraction::ExtractedText;
use crate::scanner::ScanHits;
use crate::types::{AnalysisResult, ArchitectureInfo};

pub fn build_report(extracted: ExtractedText, hits: ScanHits) -> AnalysisResult {
    AnalysisResult::Success {
        text_content: preview(&extracted.text, config::TEXT_PREVIEW_CHARS),
        architecture_info: ArchitectureInfo {
            total_pages: extracted.total_pages,
            technologies: hits.technologies,
            database_tables: hits.database_tables,
            patterns: hits.patterns,
            features: hits.features,
            structure: Default::default(),
        },
    }
}

/// First `max_chars` characters of `text`, counted in chars rather than bytes.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

pub fn render_report(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("Failed to serialize analysis result")
}

/// Write the report into `dir`, replacing any previous one.
pub fn write_report(dir: &Path, result: &AnalysisResult) -> Result<PathBuf> {
    let output = dir.join(config::OUTPUT_FILE);
    let json = render_report(result)?;
    fs::write(&output, json)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    tracing::info!("Wrote {}", output.display());
    Ok(output)
}
