use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlossError {
    /// Input table missing, unreadable or permission-denied.
    #[error("cannot open glossary table '{}': {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record whose field count does not match the glossary columns.
    #[error("line {line}: expected {expected} fields, found {found}")]
    Schema {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Malformed delimited input (bad quoting, invalid UTF-8).
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The `order` column of an entry is not a number.
    #[error("entry '{term}': invalid order value '{value}'")]
    InvalidOrder { term: String, value: String },

    /// JSON report encoding failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Propagated I/O error while writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GlossError>;
