// Core types for archscan
use serde::Serialize;
use std::collections::BTreeMap;

/// Keyword and table hits found in one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchitectureInfo {
    pub total_pages: usize,
    pub technologies: Vec<String>,
    pub database_tables: Vec<String>,
    pub patterns: Vec<String>,
    pub features: Vec<String>,
    /// Reserved; always serialized as `{}`.
    pub structure: BTreeMap<String, serde_json::Value>,
}

/// Outcome of analyzing one PDF. The two shapes share no keys, so readers
/// tell them apart by the presence of `error`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnalysisResult {
    Success {
        text_content: String,
        architecture_info: ArchitectureInfo,
    },
    Failure {
        error: String,
    },
}

impl AnalysisResult {
    pub fn failure(err: &ExtractionError) -> Self {
        AnalysisResult::Failure {
            error: err.to_string(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, AnalysisResult::Failure { .. })
    }
}

// Error types

/// Any fault while opening, parsing or reading a PDF. Causes are not
/// distinguished; only the underlying message survives.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ExtractionError {
    message: String,
}

impl ExtractionError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ExtractionError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        Self::new(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
