use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config;

/// Pick the first PDF in `dir`, in the order the OS lists entries.
///
/// The listing order is filesystem dependent and deliberately not sorted, so
/// with several PDFs present the choice can differ between machines.
pub fn pick_pdf_file(dir: &Path) -> Result<Option<PathBuf>> {
    Ok(find_pdf_files(dir)?.into_iter().next())
}

/// All entries of `dir` whose name ends in `.pdf` (case-sensitive), in listing order.
pub fn find_pdf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        if is_pdf_name(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    tracing::debug!("{} PDF candidates in {}", files.len(), dir.display());
    Ok(files)
}

fn is_pdf_name(name: &str) -> bool {
    name.ends_with(config::PDF_SUFFIX)
}
