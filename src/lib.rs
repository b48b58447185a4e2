//! # archscan
//!
//! Reads the first PDF in a directory, extracts its text page by page and
//! looks for technology names, design patterns, database table declarations
//! and domain feature words. The summary is written next to the PDF as
//! `pdf_analysis_result.json`.
//!
//! Extraction failures never abort the run: they are recorded in the report
//! as `{"error": "..."}`. Only listing the directory or writing the report can
//! fail the call itself.
//!
//! ```no_run
//! let outcome = archscan::run_in(std::path::Path::new(".")).unwrap();
//! println!("{:?}", outcome);
//! ```

pub mod config;
pub mod file_picker;
pub mod pdf_extraction;
pub mod report;
pub mod scanner;
pub mod types;

use std::path::{Path, PathBuf};

pub use file_picker::pick_pdf_file;
pub use pdf_extraction::{extract_text, ExtractedText};
pub use report::{build_report, write_report};
pub use scanner::{scan, ScanHits};
pub use types::{AnalysisResult, ArchitectureInfo, ExtractionError};

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No `.pdf` entry in the directory; nothing was written.
    NoPdfFound,
    Written {
        pdf: PathBuf,
        output: PathBuf,
        result: AnalysisResult,
    },
}

/// Extract, scan and assemble the report for one PDF.
/// Every extraction fault collapses into the `Failure` shape.
pub fn analyze_pdf(pdf_path: &Path) -> AnalysisResult {
    match extract_text(pdf_path) {
        Ok(extracted) => {
            let hits = scan(&extracted.text);
            build_report(extracted, hits)
        }
        Err(err) => {
            tracing::warn!("Extraction failed for {}: {}", pdf_path.display(), err);
            AnalysisResult::failure(&err)
        }
    }
}

/// Run the whole pipeline against `dir` and print the user-facing messages.
pub fn run_in(dir: &Path) -> anyhow::Result<RunOutcome> {
    let Some(pdf) = pick_pdf_file(dir)? else {
        println!("No PDF files found in current directory");
        return Ok(RunOutcome::NoPdfFound);
    };

    let name = pdf
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| pdf.display().to_string());
    println!("Found PDF: {}", name);

    let result = analyze_pdf(&pdf);
    let output = write_report(dir, &result)?;
    println!("Analysis completed. Results saved to {}", config::OUTPUT_FILE);

    Ok(RunOutcome::Written {
        pdf,
        output,
        result,
    })
}
