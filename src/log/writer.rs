//! Text report writer

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::format::{
    LogRecord, DESCRIPTION_WIDTH, GM_ID_WIDTH, INFO_WIDTH, SEPARATOR_WIDTH,
};
use crate::Result;

/// Writer for the aligned text report
pub struct ReportWriter {
    out: BufWriter<File>,
}

impl ReportWriter {
    /// Create the report file, truncating any existing file at `path`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    /// Write the column-title row and the dash rule below it
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "[YYYY.MM.DD HH:MM:SS] {desc:<dw$} | {info:<iw$} | {id:>gw$} ",
            desc = "Description",
            info = "Additional info",
            id = "GM id",
            dw = DESCRIPTION_WIDTH,
            iw = INFO_WIDTH,
            gw = GM_ID_WIDTH,
        )?;
        writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
        Ok(())
    }

    /// Write one record as a formatted report line
    ///
    /// # Errors
    ///
    /// Returns error if the write fails.
    pub fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        writeln!(self.out, "{}", record.format_line())?;
        Ok(())
    }

    /// Flush buffered lines to disk
    ///
    /// # Errors
    ///
    /// Returns error if the flush fails.
    pub fn finish(mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
