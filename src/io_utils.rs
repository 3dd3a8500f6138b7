use std::fmt;
use std::io;
use std::path::Path;

use crate::GlossError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "File appears truncated or corrupted.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert a library error into a CLI error with a hint.
pub fn gloss_cli_error(context: &str, err: GlossError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a library error variant.
pub fn cli_hint(err: &GlossError) -> String {
    use crate::GlossError::*;
    match err {
        FileAccess { path, source } => format_io_error("reading glossary table", path, source),
        Schema { .. } => format!("{err}. Every row needs the 7 glossary columns."),
        Csv(e) => format!("{e}. Check quoting and that the file is UTF-8."),
        InvalidOrder { .. } => format!("{err}. The order column must be a whole number."),
        Json(e) => format!("{e}. Could not encode the JSON report."),
        Io(io) => format!("{io}"),
        Config(msg) => format!("{msg}. Invalid configuration."),
    }
}
