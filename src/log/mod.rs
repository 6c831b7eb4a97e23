//! Binary log decoding and report rendering

mod cursor;
mod format;
mod reader;
#[cfg(test)]
pub(crate) mod testutil;
mod writer;

pub use cursor::ByteCursor;
pub use format::{
    LogRecord, Timestamp, WideString, DESCRIPTION_WIDTH, EMPTY_INFO, GM_ID_WIDTH, INFO_WIDTH,
    SEPARATOR_WIDTH, STRING_UNITS_MAX, TIMESTAMP_BLOCK_WIDTH,
};
pub use reader::LogFile;
pub use writer::ReportWriter;
