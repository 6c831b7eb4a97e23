//! Record model and wire layout

use std::fmt;

use crate::Result;

use super::cursor::ByteCursor;

/// Maximum length of a single string field, in 16-bit code units
///
/// The producer never emits longer fields, so a larger prefix means the
/// stream is corrupt and the parse must stop before allocating.
pub const STRING_UNITS_MAX: u32 = 4096;

/// Rendered width of the bracketed `[YYYY.MM.DD HH:MM:SS]` block
pub const TIMESTAMP_BLOCK_WIDTH: usize = 21;

/// Report column width for the description field
pub const DESCRIPTION_WIDTH: usize = 35;

/// Report column width for the additional-info field
pub const INFO_WIDTH: usize = 80;

/// Report column width for the GM id field
pub const GM_ID_WIDTH: usize = 6;

/// Width of a formatted line without its trailing space
///
/// Column widths are fixed: downstream tooling slices the report by column
/// position, so the layout must stay byte-for-byte stable.
pub const SEPARATOR_WIDTH: usize =
    TIMESTAMP_BLOCK_WIDTH + 1 + DESCRIPTION_WIDTH + 3 + INFO_WIDTH + 3 + GM_ID_WIDTH;

/// Placeholder rendered when the info field is empty
pub const EMPTY_INFO: &str = "[empty]";

/// Text field holding raw 16-bit code units
///
/// Code units are stored exactly as they appear on the wire; unpaired
/// surrogates are preserved. Conversion to `char` data happens lossily and
/// only at render time, through `Display`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideString(Vec<u16>);

impl WideString {
    /// Wrap a vector of code units
    #[must_use]
    pub fn from_units(units: Vec<u16>) -> Self {
        Self(units)
    }

    /// Raw code units
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.0
    }

    /// Length in code units
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the field holds zero code units
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for WideString {
    fn from(s: &str) -> Self {
        Self(s.encode_utf16().collect())
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/precision flags working on the rendered text
        f.pad(&String::from_utf16_lossy(&self.0))
    }
}

/// Date and time of a log entry, stored verbatim
///
/// No calendar validation is performed: the producer writes these fields
/// straight from its own clock structure, and a month of 13 renders as 13.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timestamp {
    /// Calendar year
    pub year: u16,
    /// Calendar month
    pub month: u16,
    /// Day of month
    pub day: u16,
    /// Hour of day
    pub hour: u16,
    /// Minute
    pub minute: u16,
    /// Second
    pub second: u16,
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}.{:02}.{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// One decoded GM log entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecord {
    /// What the GM did
    pub description: WideString,
    /// Free-form detail, often empty
    pub info: WideString,
    /// Numeric id of the game master who issued the command
    pub gm_id: u32,
    /// When the command was issued
    pub timestamp: Timestamp,
}

impl LogRecord {
    /// Decode one record from the cursor
    ///
    /// Wire layout, all integers little-endian:
    ///
    /// ```text
    /// 1 byte   padding
    /// u32 len; len * 2 bytes   description
    /// 1 byte   padding
    /// u32 len; len * 2 bytes   info
    /// 1 byte   padding
    /// u32      gm_id
    /// 1 byte   padding
    /// u16      year, month, day
    /// 2 bytes  padding
    /// u16      hour, minute, second
    /// 2 bytes  padding
    /// ```
    ///
    /// Fields are read strictly in this order and the first failure aborts
    /// the record; there is no partial-record recovery.
    ///
    /// # Errors
    ///
    /// Returns the first cursor error encountered in field order.
    pub fn decode(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        cursor.skip(1)?;
        let description = cursor.read_wide_string()?;
        cursor.skip(1)?;
        let info = cursor.read_wide_string()?;
        cursor.skip(1)?;
        let gm_id = cursor.read_u32()?;
        cursor.skip(1)?;
        let year = cursor.read_u16()?;
        let month = cursor.read_u16()?;
        let day = cursor.read_u16()?;
        cursor.skip(2)?;
        let hour = cursor.read_u16()?;
        let minute = cursor.read_u16()?;
        let second = cursor.read_u16()?;
        cursor.skip(2)?;

        Ok(Self {
            description,
            info,
            gm_id,
            timestamp: Timestamp {
                year,
                month,
                day,
                hour,
                minute,
                second,
            },
        })
    }

    /// Render the record as one fixed-layout report line
    ///
    /// The line is the bracketed timestamp block, then description and info
    /// left-aligned and display-truncated to their column widths, then the
    /// GM id right-aligned in its column, with ` | ` between columns and a
    /// single trailing space. Empty info renders as [`EMPTY_INFO`].
    #[must_use]
    pub fn format_line(&self) -> String {
        let info: &dyn fmt::Display = if self.info.is_empty() {
            &EMPTY_INFO
        } else {
            &self.info
        };

        format!(
            "[{ts}] {desc:<dw$.dw$} | {info:<iw$.iw$} | {id:>gw$} ",
            ts = self.timestamp,
            desc = self.description,
            info = info,
            id = self.gm_id,
            dw = DESCRIPTION_WIDTH,
            iw = INFO_WIDTH,
            gw = GM_ID_WIDTH,
        )
    }
}
