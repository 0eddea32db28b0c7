use crate::domain::models::Pattern;
use crate::error::PatternError;
use crate::services::aggregate::extract_pattern;
use serde_json::Value;
use std::path::Path;

/// Reads the whole file and decodes it. The file is closed before this
/// returns, whatever the outcome.
pub fn load_document(path: &Path) -> Result<Value, PatternError> {
    let raw = std::fs::read(path).map_err(|source| PatternError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = raw.len(), "read pattern file");
    serde_json::from_slice(&raw).map_err(|source| PatternError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_pattern(path: &Path) -> Result<Pattern, PatternError> {
    let document = load_document(path)?;
    extract_pattern(&document)
}
