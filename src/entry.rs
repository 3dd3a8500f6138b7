use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{GlossError, Result};
use crate::normalize::asciize;

/// Column order of the glossary table.
pub const FIELDS: [&str; 7] = [
    "term",
    "us_term",
    "br_term",
    "chapter",
    "order",
    "us_definition",
    "br_definition",
];

/// One row of the glossary table.
///
/// Only `term` is expected to carry text; the remaining columns may be
/// empty. Entries are never modified after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub us_term: String,
    pub br_term: String,
    pub chapter: String,
    pub order: String,
    pub us_definition: String,
    pub br_definition: String,
}

impl GlossaryEntry {
    /// Build an entry from a raw record, failing when the record does not
    /// have exactly one field per glossary column.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        if record.len() != FIELDS.len() {
            return Err(GlossError::Schema {
                line: record.position().map_or(0, |p| p.line()),
                expected: FIELDS.len(),
                found: record.len(),
            });
        }
        Ok(record.deserialize(None)?)
    }

    /// Position of the entry inside its chapter glossary.
    pub fn order_number(&self) -> Result<u32> {
        self.order
            .trim()
            .parse()
            .map_err(|_| GlossError::InvalidOrder {
                term: self.term.clone(),
                value: self.order.clone(),
            })
    }

    /// Headword line of the consolidated glossary.
    ///
    /// The US term is emphasised. When it holds an inline literal followed
    /// by a noun only the noun is emphasised, and a lone literal is kept
    /// verbatim. A `-` BR term means there is no translation; otherwise the
    /// adopted term leads and the other one follows in parentheses.
    pub fn head(&self) -> String {
        let us_term = if self.us_term.contains("``") {
            let mut words = self.us_term.split_whitespace();
            match (words.next(), words.next(), words.next()) {
                (Some(symbol), Some(noun), None) => format!("{symbol} *{noun}*"),
                _ => self.us_term.clone(),
            }
        } else {
            format!("*{}*", self.us_term)
        };

        if self.br_term == "-" {
            us_term
        } else if self.term != self.us_term {
            format!("{} ({})", self.term, us_term)
        } else {
            format!("{} ({})", us_term, self.br_term)
        }
    }

    /// BR definition, falling back to the US one when it is blank.
    pub fn definition(&self) -> &str {
        match self.br_definition.trim() {
            "" => self.us_definition.trim(),
            br => br,
        }
    }

    /// Chapter id without leading zeros, as shown in glossary references.
    pub fn short_chapter(&self) -> &str {
        self.chapter.trim_start_matches('0')
    }

    /// Key of the consolidated glossary: normalized term, then chapter.
    pub fn sort_key(&self) -> String {
        format!("{}|{}", asciize(&self.term), self.chapter)
    }
}
