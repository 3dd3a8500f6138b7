//! Streaming reader for the glossary CSV table.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::entry::GlossaryEntry;
use crate::error::{GlossError, Result};

/// Reads glossary entries one record at a time.
///
/// The first record of the table is a header and is never yielded. Its
/// width is not checked; every following record must have exactly the
/// glossary columns.
pub struct GlossaryReader<R> {
    inner: csv::Reader<R>,
    path: Option<PathBuf>,
}

impl GlossaryReader<File> {
    /// Open the table at `path`, which must be a regular file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let access = |source| GlossError::FileAccess {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(access)?;
        if !file.metadata().map_err(access)?.is_file() {
            return Err(access(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            )));
        }
        tracing::debug!(path = %path.display(), "opened glossary table");
        let mut reader = Self::from_reader(file);
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }
}

impl<R: Read> GlossaryReader<R> {
    pub fn from_reader(rdr: R) -> Self {
        let inner = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(rdr);
        Self { inner, path: None }
    }

    /// Consume the reader, yielding entries in file order.
    pub fn entries(self) -> Entries<R> {
        Entries {
            records: self.inner.into_records(),
            path: self.path,
        }
    }
}

/// Iterator returned by [`GlossaryReader::entries`].
///
/// Read failures on an opened file are reported against its path.
pub struct Entries<R> {
    records: csv::StringRecordsIntoIter<R>,
    path: Option<PathBuf>,
}

impl<R> Entries<R> {
    fn read_error(&self, err: csv::Error) -> GlossError {
        match &self.path {
            Some(path) if err.is_io_error() => {
                let source = match err.into_kind() {
                    csv::ErrorKind::Io(source) => source,
                    other => io::Error::new(io::ErrorKind::Other, format!("{other:?}")),
                };
                GlossError::FileAccess {
                    path: path.clone(),
                    source,
                }
            }
            _ => GlossError::Csv(err),
        }
    }
}

impl<R: Read> Iterator for Entries<R> {
    type Item = Result<GlossaryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        Some(match record {
            Ok(rec) => GlossaryEntry::from_record(&rec),
            Err(err) => Err(self.read_error(err)),
        })
    }
}
