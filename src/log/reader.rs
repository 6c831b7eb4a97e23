//! Log file parsing

use std::fs::File;
use std::path::Path;

use memmap2::Mmap;
use tracing::debug;

use super::cursor::ByteCursor;
use super::format::LogRecord;
use super::writer::ReportWriter;
use crate::{GmLogError, Result};

/// A fully parsed GM log
///
/// Holds every record in file order. Constructed in one pass by
/// [`LogFile::parse`] and never mutated afterwards.
#[derive(Debug)]
pub struct LogFile {
    records: Vec<LogRecord>,
}

impl LogFile {
    /// Parse a binary GM log file
    ///
    /// Reads the 4-byte record count, then decodes exactly that many records
    /// in order. The first decode failure aborts the whole parse; no partial
    /// result is ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::Open`] if the file cannot be opened or mapped,
    /// [`GmLogError::Corrupted`] for any failure from the count prefix
    /// onward, and [`GmLogError::RecordCountMismatch`] if the decoded count
    /// disagrees with the declared count.
    pub fn parse(path: &Path) -> Result<Self> {
        let open_err = |source| GmLogError::Open {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(open_err)?;

        // mmap rejects zero-length files; an empty file must still surface
        // as a decode error on the count prefix, not an open error.
        let len = file.metadata().map_err(open_err)?.len();
        let mmap = if len == 0 {
            None
        } else {
            Some(unsafe { Mmap::map(&file) }.map_err(open_err)?)
        };
        let bytes: &[u8] = mmap.as_deref().unwrap_or(&[]);

        let mut cursor = ByteCursor::new(bytes);
        let (declared, records) =
            decode_records(&mut cursor).map_err(GmLogError::corrupted)?;

        // Unreachable while the decode loop is strictly bounded, but kept so
        // a future early-EOF tolerance cannot return a short report.
        if records.len() != declared as usize {
            return Err(GmLogError::RecordCountMismatch {
                expected: declared,
                actual: records.len(),
            });
        }

        debug!(
            "parsed {} records ({} bytes) from {}",
            records.len(),
            bytes.len(),
            path.display()
        );

        Ok(Self { records })
    }

    /// Decoded records in file order
    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Number of decoded records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log declared zero records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the text report for this log
    ///
    /// Overwrites any existing file at `path` without prompting.
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::Io`] if the report cannot be created or written.
    pub fn write_report(&self, path: &Path) -> Result<()> {
        let mut writer = ReportWriter::create(path)?;
        writer.write_header()?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.finish()?;

        debug!("wrote {} report lines to {}", self.records.len(), path.display());
        Ok(())
    }
}

fn decode_records(cursor: &mut ByteCursor<'_>) -> Result<(u32, Vec<LogRecord>)> {
    let declared = cursor.read_u32()?;

    // The declared count is untrusted input; grow as records actually decode
    // instead of reserving `declared` slots up front.
    let mut records = Vec::new();
    for _ in 0..declared {
        records.push(LogRecord::decode(cursor)?);
    }

    Ok((declared, records))
}
