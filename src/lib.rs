//! Letter statistics for the glossary CSV table.
//!
//! The table is streamed once; each entry's term is normalized to plain
//! ASCII letters and counted under its first letter.

pub mod chapters;
pub mod config;
pub mod counter;
pub mod entry;
pub mod error;
pub mod io_utils;
pub mod loader;
pub mod logging;
pub mod normalize;
pub mod report;
pub mod tally;

pub use chapters::{master_sorted, render_master, tally_chapters, ChapterTally};
pub use config::{Config, EmptyTermPolicy, OutputFormat, DEFAULT_GLOSSARY_PATH};
pub use counter::{Bucket, LetterCounter, OTHER_KEY};
pub use entry::{GlossaryEntry, FIELDS};
pub use error::{GlossError, Result};
pub use loader::GlossaryReader;
pub use normalize::{asciize, leading_letter};
pub use report::{render_json, render_text, write_report};
pub use tally::{bucket_for, count_entries, count_glossary, Tally};
