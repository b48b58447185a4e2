// Keyword and table-name scanning over extracted document text
use once_cell::sync::Lazy;
use regex::Regex;

pub const TECHNOLOGY_KEYWORDS: &[&str] = &[
    "Node.js",
    "React",
    "PostgreSQL",
    "MongoDB",
    "Express",
    "Angular",
    "Vue",
    "Python",
    "Django",
    "Flask",
    "Java",
    "Spring",
    "PHP",
    "Laravel",
];

pub const PATTERN_KEYWORDS: &[&str] = &[
    "MVC",
    "MVVM",
    "Repository",
    "Service Layer",
    "Factory",
    "Singleton",
    "Observer",
    "Strategy",
    "Adapter",
];

pub const FEATURE_KEYWORDS: &[&str] = &[
    "cotizacion",
    "cliente",
    "orden",
    "produccion",
    "factura",
    "pago",
    "liquidacion",
];

// Applied in this order; all matches of one pattern precede the next
static TABLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)CREATE TABLE\s+([a-zA-Z_][a-zA-Z0-9_]*)",
        r"(?i)Table:\s*([a-zA-Z_][a-zA-Z0-9_]*)",
        r"(?i)Tabla:\s*([a-zA-Z_][a-zA-Z0-9_]*)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid table pattern"))
    .collect()
});

/// Hits from the four independent passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanHits {
    pub technologies: Vec<String>,
    pub database_tables: Vec<String>,
    pub patterns: Vec<String>,
    pub features: Vec<String>,
}

pub fn scan(text: &str) -> ScanHits {
    let lowered = text.to_lowercase();
    let hits = ScanHits {
        technologies: find_keywords(&lowered, TECHNOLOGY_KEYWORDS),
        database_tables: find_tables(text),
        patterns: find_keywords(&lowered, PATTERN_KEYWORDS),
        features: find_keywords(&lowered, FEATURE_KEYWORDS),
    };
    tracing::info!(
        "Scan: {} technologies, {} tables, {} patterns, {} features",
        hits.technologies.len(),
        hits.database_tables.len(),
        hits.patterns.len(),
        hits.features.len()
    );
    hits
}

/// Keywords whose lower-cased form occurs in `lowered_text`, in list order,
/// with their original casing. `lowered_text` must already be lower-cased.
pub fn find_keywords(lowered_text: &str, keywords: &[&str]) -> Vec<String> {
    keywords
        .iter()
        .filter(|keyword| lowered_text.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect()
}

/// Table identifiers captured from the original-cased text. No deduplication.
pub fn find_tables(text: &str) -> Vec<String> {
    TABLE_PATTERNS
        .iter()
        .flat_map(|pattern| {
            pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
        })
        .collect()
}
