//! Per-chapter views of the glossary: entry counts by chapter and the
//! consolidated ordering used for the master glossary.

use std::collections::BTreeMap;

use crate::entry::GlossaryEntry;
use crate::error::Result;

/// Number of entries per chapter id, ascending by id.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChapterTally {
    counts: BTreeMap<String, u64>,
}

impl ChapterTally {
    pub fn add(&mut self, entry: &GlossaryEntry) {
        *self.counts.entry(entry.chapter.clone()).or_insert(0) += 1;
    }

    pub fn get(&self, chapter: &str) -> u64 {
        self.counts.get(chapter).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

pub fn tally_chapters<I>(entries: I) -> Result<ChapterTally>
where
    I: IntoIterator<Item = Result<GlossaryEntry>>,
{
    let mut tally = ChapterTally::default();
    for entry in entries {
        tally.add(&entry?);
    }
    Ok(tally)
}

/// Collect all entries sorted for the consolidated glossary.
///
/// Entries are ordered by [`GlossaryEntry::sort_key`], then by their
/// numeric `order`; every entry must have a valid order number.
pub fn master_sorted<I>(entries: I) -> Result<Vec<GlossaryEntry>>
where
    I: IntoIterator<Item = Result<GlossaryEntry>>,
{
    let mut keyed = Vec::new();
    for entry in entries {
        let entry = entry?;
        let key = (entry.sort_key(), entry.order_number()?);
        keyed.push((key, entry));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(keyed.into_iter().map(|(_, entry)| entry).collect())
}

/// Consolidated glossary text: one block per entry with its headword, the
/// chapter it appears in and its indented definition.
pub fn render_master(entries: &[GlossaryEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{} [{}]\n  {}\n\n", e.head(), e.short_chapter(), e.definition()))
        .collect()
}
