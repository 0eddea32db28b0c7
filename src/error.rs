use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum PatternError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema error: missing field {path}")]
    Missing { path: String },
    #[error("schema error at {path}: expected {expected}")]
    Schema { path: String, expected: &'static str },
}

impl PatternError {
    pub fn schema(path: impl Into<String>, expected: &'static str) -> Self {
        PatternError::Schema {
            path: path.into(),
            expected,
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        PatternError::Missing { path: path.into() }
    }
}
