//! The counting pass: entries in, letter counts out.

use crate::config::{Config, EmptyTermPolicy};
use crate::counter::{Bucket, LetterCounter};
use crate::entry::GlossaryEntry;
use crate::error::Result;
use crate::loader::GlossaryReader;
use crate::normalize::leading_letter;

/// Result of a counting run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub counter: LetterCounter,
    /// Entries read from the table.
    pub entries: u64,
    /// Entries whose term had no Latin letters and were left out.
    pub skipped: u64,
}

/// Bucket for a single term under `policy`. `None` means the entry is not
/// counted.
pub fn bucket_for(term: &str, policy: EmptyTermPolicy) -> Option<Bucket> {
    leading_letter(term)
        .and_then(Bucket::letter)
        .or(match policy {
            EmptyTermPolicy::Skip => None,
            EmptyTermPolicy::Sentinel => Some(Bucket::Other),
        })
}

/// Count entries by the first letter of their normalized term.
///
/// Stops at the first error; no partial tally is returned.
pub fn count_entries<I>(entries: I, policy: EmptyTermPolicy) -> Result<Tally>
where
    I: IntoIterator<Item = Result<GlossaryEntry>>,
{
    let mut tally = Tally::default();
    for entry in entries {
        let entry = entry?;
        tally.entries += 1;
        match bucket_for(&entry.term, policy) {
            Some(bucket) => {
                tracing::trace!(term = %entry.term, %bucket, "counted");
                tally.counter.increment(bucket);
            }
            None => {
                tracing::debug!(term = %entry.term, "term has no latin letters, skipped");
                tally.skipped += 1;
            }
        }
    }
    Ok(tally)
}

/// Load the configured table and count it.
pub fn count_glossary(config: &Config) -> Result<Tally> {
    tracing::info!(path = %config.input.display(), "counting glossary");
    let reader = GlossaryReader::open(&config.input)?;
    let tally = count_entries(reader.entries(), config.empty_terms)?;
    tracing::info!(
        entries = tally.entries,
        skipped = tally.skipped,
        buckets = tally.counter.len(),
        "glossary counted"
    );
    Ok(tally)
}
