//! Error types for the GM log converter

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for GM log operations
pub type Result<T> = std::result::Result<T, GmLogError>;

/// Errors that can occur while decoding or converting a GM log
#[derive(Debug, Error)]
pub enum GmLogError {
    /// Input file cannot be opened or mapped
    #[error("unable to open file {path}: {source}")]
    Open {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O cause
        source: io::Error,
    },

    /// I/O error (covers the report write phase)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Stream ended before a fixed-size field or padding run could be read
    #[error(
        "unexpected end of stream at offset {offset}: need {needed} bytes, {remaining} remain"
    )]
    UnexpectedEof {
        /// Cursor position when the short read was detected
        offset: usize,
        /// Bytes the read required
        needed: usize,
        /// Bytes left in the stream
        remaining: usize,
    },

    /// Declared string length exceeds the per-field code unit cap
    #[error("too big string: {len} code units exceeds the {limit} unit limit")]
    StringTooLong {
        /// Length declared by the 4-byte prefix
        len: u32,
        /// Maximum accepted length
        limit: u32,
    },

    /// Any failure between the count prefix and the last record
    #[error("corrupted log file: {0}")]
    Corrupted(#[source] Box<GmLogError>),

    /// Decoded record count differs from the declared count
    #[error("expected {expected} records, got {actual}")]
    RecordCountMismatch {
        /// Count declared by the stream prefix
        expected: u32,
        /// Records actually decoded
        actual: usize,
    },
}

impl GmLogError {
    /// Wrap a decode-phase error in the corruption context
    #[must_use]
    pub fn corrupted(cause: GmLogError) -> Self {
        GmLogError::Corrupted(Box::new(cause))
    }
}
