// lopdf helper - Pure Rust PDF operations
use crate::types::{ExtractionError, Result};
use lopdf::Document;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load a PDF document using lopdf. The file handle is closed before this returns.
///
/// lopdf tries the empty user password while loading, so owner-password-only
/// documents come back decrypted. Anything still locked is an error.
fn load_pdf(path: &Path) -> Result<Document> {
    let mut buffer = Vec::new();
    {
        let mut file = File::open(path)?;
        file.read_to_end(&mut buffer)?;
    }
    tracing::info!(
        "Loaded {} ({:.2} KB)",
        path.display(),
        buffer.len() as f64 / 1024.0
    );

    let document = Document::load_mem(&buffer)?;
    if is_locked(&document) {
        return Err(ExtractionError::new("file has not been decrypted"));
    }
    Ok(document)
}

// Encrypted, and the empty password did not open it
fn is_locked(document: &Document) -> bool {
    document.trailer.get(b"Encrypt").is_ok() && document.encryption_state.is_none()
}

/// Execute an operation with a PDF document
pub fn with_pdf<F, R>(path: &Path, f: F) -> Result<R>
where
    F: FnOnce(&Document) -> Result<R>,
{
    let document = load_pdf(path)?;
    f(&document)
}
