use std::path::PathBuf;

use crate::error::{GlossError, Result};

/// Table read when no path is configured.
pub const DEFAULT_GLOSSARY_PATH: &str = "./glossary.csv";

/// What to do with a term that has no Latin letters after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyTermPolicy {
    /// Leave the entry out of the report.
    #[default]
    Skip,
    /// Count the entry under the `other` bucket.
    Sentinel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `<letter> <count>` lines.
    #[default]
    Text,
    /// JSON array of bucket/count objects.
    Json,
}

/// Runtime configuration for a counting run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Glossary CSV table.
    pub input: PathBuf,
    pub empty_terms: EmptyTermPolicy,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_GLOSSARY_PATH),
            empty_terms: EmptyTermPolicy::Skip,
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn with_input<P: Into<PathBuf>>(input: P) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input.as_os_str().is_empty() {
            return Err(GlossError::Config("input path is empty".into()));
        }
        Ok(())
    }
}
