//! Flat-file journal for an [`EventIndex`].
//!
//! The file holds one `<date> <description>` line per event. Saving appends the
//! whole index, clearing truncates the file, reading re-inserts every line.
//! The file handle only lives for the duration of each call.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::codec::{self, DescriptionJoin};
use crate::error::{AgendaError, AgendaResult};
use crate::index::EventIndex;

#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
    join: DescriptionJoin,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Journal {
            path: path.into(),
            join: DescriptionJoin::default(),
        }
    }

    /// Use `join` when rebuilding descriptions on [`Journal::read_into`].
    pub fn with_join(mut self, join: DescriptionJoin) -> Self {
        self.join = join;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every event in `index` to the file, creating it if needed.
    ///
    /// Returns the number of lines written. Events already on disk are not
    /// deduplicated.
    pub fn save(&self, index: &EventIndex) -> AgendaResult<usize> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;

        let mut writer = BufWriter::new(file);
        let mut written = 0;
        for line in codec::serialize(index) {
            writeln!(writer, "{line}").map_err(|e| self.unavailable(e))?;
            written += 1;
        }
        writer.flush().map_err(|e| self.unavailable(e))?;

        debug!(path = %self.path.display(), written, "saved journal");
        Ok(written)
    }

    /// Insert every line of the file into `index`.
    ///
    /// Blank lines are skipped. Stops at the first line that is not UTF-8 or
    /// fails to decode; lines before it stay inserted. Returns the number of
    /// lines applied.
    pub fn read_into(&self, index: &mut EventIndex) -> AgendaResult<usize> {
        let file = File::open(&self.path).map_err(|e| self.unavailable(e))?;

        let mut applied = 0;
        for (n, raw) in BufReader::new(file).split(b'\n').enumerate() {
            let raw = raw.map_err(|e| self.unavailable(e))?;
            let bad_line = |source| AgendaError::JournalLine {
                path: self.path.clone(),
                line: n + 1,
                source: Box::new(source),
            };

            let line = String::from_utf8(raw).map_err(|_| bad_line(AgendaError::InvalidUtf8))?;
            if line.trim().is_empty() {
                continue;
            }

            codec::deserialize(index, &line, self.join).map_err(bad_line)?;
            applied += 1;
        }

        debug!(path = %self.path.display(), applied, "read journal");
        Ok(applied)
    }

    /// Truncate the file to zero length, creating it if it does not exist.
    pub fn clear(&self) -> AgendaResult<()> {
        File::create(&self.path).map_err(|e| self.unavailable(e))?;
        debug!(path = %self.path.display(), "cleared journal");
        Ok(())
    }

    fn unavailable(&self, source: std::io::Error) -> AgendaError {
        AgendaError::ResourceUnavailable {
            path: self.path.clone(),
            source,
        }
    }
}
