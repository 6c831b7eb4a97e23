//! Bounds-checked sequential byte cursor

use crate::{GmLogError, Result};

use super::format::{WideString, STRING_UNITS_MAX};

/// Forward-only cursor over the raw log bytes
///
/// Every read validates the remaining byte count before touching the slice,
/// so a truncated file surfaces as [`GmLogError::UnexpectedEof`] at the exact
/// offset of the short read instead of a panic.
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor positioned at the start of `data`
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read position in bytes
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the cursor and the end of the stream
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(GmLogError::UnexpectedEof {
                offset: self.pos,
                needed: n,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read a little-endian `u16`
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::UnexpectedEof`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    /// Read a little-endian `u32`
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::UnexpectedEof`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a length-prefixed wide string
    ///
    /// The 4-byte prefix counts 16-bit code units, not bytes. A prefix above
    /// [`STRING_UNITS_MAX`] aborts before any allocation and before any byte
    /// past the prefix is consumed. The body is taken verbatim; no encoding
    /// validation is performed.
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::StringTooLong`] for an oversized prefix, or
    /// [`GmLogError::UnexpectedEof`] if the stream ends inside the prefix or
    /// the body.
    pub fn read_wide_string(&mut self) -> Result<WideString> {
        let len = self.read_u32()?;
        if len > STRING_UNITS_MAX {
            return Err(GmLogError::StringTooLong {
                len,
                limit: STRING_UNITS_MAX,
            });
        }

        let bytes = self.take(len as usize * 2)?;
        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        Ok(WideString::from_units(units))
    }

    /// Advance the cursor by `n` bytes without inspecting them
    ///
    /// # Errors
    ///
    /// Returns [`GmLogError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_fixed_little_endian() {
        let mut cursor = ByteCursor::new(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert_eq!(cursor.read_u16().unwrap(), 0x0201);
        assert_eq!(cursor.read_u32().unwrap(), 0x0605_0403);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn test_read_past_end() {
        let mut cursor = ByteCursor::new(&[0xFF]);
        let err = cursor.read_u32().unwrap_err();
        match err {
            GmLogError::UnexpectedEof {
                offset,
                needed,
                remaining,
            } => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 4);
                assert_eq!(remaining, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        // A failed read must not move the cursor
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_skip_advances() {
        let mut cursor = ByteCursor::new(&[0, 0, 0, 0x2A, 0x00]);
        cursor.skip(3).unwrap();
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.read_u16().unwrap(), 0x2A);
    }

    #[test]
    fn test_skip_past_end() {
        let mut cursor = ByteCursor::new(&[0, 0]);
        assert!(matches!(
            cursor.skip(3),
            Err(GmLogError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_read_empty_string() {
        let mut cursor = ByteCursor::new(&[0, 0, 0, 0]);
        let s = cursor.read_wide_string().unwrap();
        assert!(s.is_empty());
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_read_string_units() {
        // len = 2, units: 'H', 'i'
        let mut cursor = ByteCursor::new(&[2, 0, 0, 0, b'H', 0, b'i', 0]);
        let s = cursor.read_wide_string().unwrap();
        assert_eq!(s.units(), &[u16::from(b'H'), u16::from(b'i')]);
        assert_eq!(s.to_string(), "Hi");
    }

    #[test]
    fn test_string_at_cap_is_accepted() {
        let mut data = 4096u32.to_le_bytes().to_vec();
        data.extend(std::iter::repeat(0u8).take(4096 * 2));
        let mut cursor = ByteCursor::new(&data);
        let s = cursor.read_wide_string().unwrap();
        assert_eq!(s.units().len(), 4096);
    }

    #[test]
    fn test_string_over_cap_is_rejected_at_prefix() {
        let mut data = 4097u32.to_le_bytes().to_vec();
        data.extend(std::iter::repeat(0u8).take(16));
        let mut cursor = ByteCursor::new(&data);
        let err = cursor.read_wide_string().unwrap_err();
        assert!(matches!(err, GmLogError::StringTooLong { len: 4097, .. }));
        // Only the 4-byte prefix may have been consumed
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_string_body_truncated() {
        // len = 3 but only 4 body bytes present
        let mut cursor = ByteCursor::new(&[3, 0, 0, 0, 1, 0, 2, 0]);
        assert!(matches!(
            cursor.read_wide_string(),
            Err(GmLogError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_unpaired_surrogate_survives() {
        // 0xD800 is an unpaired high surrogate; it must decode verbatim
        let mut cursor = ByteCursor::new(&[1, 0, 0, 0, 0x00, 0xD8]);
        let s = cursor.read_wide_string().unwrap();
        assert_eq!(s.units(), &[0xD800]);
    }
}
