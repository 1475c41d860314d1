//! Key byte windows: arbitrary contiguous byte ranges of a record.
//!
//! The sort key is not a named field but a configured `[start, end]`
//! inclusive byte range into the record's encoded form. A window may cross
//! field boundaries; it is deliberately layout-aware, not field-aware.
//!
//! Windows are validated when constructed, so an out-of-range configuration
//! is rejected before any processing starts rather than panicking mid-sort.

use crate::error::{Result, WindowError};
use crate::layout::RECORD_SIZE;

/// A validated inclusive byte range `[start, end]` into an encoded record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyWindow {
    start: usize,
    end: usize,
}

impl KeyWindow {
    /// Create a window from 0-based inclusive offsets.
    ///
    /// # Errors
    /// - `WindowError::InvertedRange` if `start > end`
    /// - `WindowError::OutOfBounds` if `end >= RECORD_SIZE`
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start > end {
            return Err(WindowError::InvertedRange {
                start: start as i64,
                end: end as i64,
            }
            .into());
        }
        if end >= RECORD_SIZE {
            return Err(WindowError::OutOfBounds {
                start,
                end,
                width: RECORD_SIZE,
            }
            .into());
        }
        Ok(Self { start, end })
    }

    /// Create a window from configuration offsets: `key_start` is 1-based
    /// (decremented here, clamped to 0), `key_end` is 0-based inclusive.
    pub fn from_config(key_start: i64, key_end: i64) -> Result<Self> {
        let start = key_start.saturating_sub(1).max(0) as usize;
        if key_end < start as i64 {
            return Err(WindowError::InvertedRange {
                start: start as i64,
                end: key_end,
            }
            .into());
        }
        Self::new(start, key_end as usize)
    }

    /// Inclusive start offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Inclusive end offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Window length in bytes: `end - start + 1`.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// A validated window always covers at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Borrow the window's bytes out of an encoded record.
    pub fn slice<'a>(&self, encoded: &'a [u8; RECORD_SIZE]) -> &'a [u8] {
        &encoded[self.start..=self.end]
    }

    /// Copy the window's bytes out of an encoded record.
    pub fn extract(&self, encoded: &[u8; RECORD_SIZE]) -> Vec<u8> {
        self.slice(encoded).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::layout::Record;

    #[test]
    fn test_window_length() {
        let window = KeyWindow::new(50, 60).unwrap();
        assert_eq!(window.len(), 11);
    }

    #[test]
    fn test_single_byte_window() {
        let window = KeyWindow::new(0, 0).unwrap();
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_window_matches_encode_slice() {
        let record = Record {
            student_id: "20210001".to_string(),
            ..Default::default()
        };
        let encoded = record.encode();
        let window = KeyWindow::new(50, 60).unwrap();

        assert_eq!(window.slice(&encoded), &encoded[50..=60]);
        assert_eq!(window.extract(&encoded).len(), window.len());
    }

    #[test]
    fn test_window_crossing_field_boundaries() {
        // Spans the end of surname, all of studentId, and gender
        let window = KeyWindow::new(45, 61).unwrap();
        assert_eq!(window.len(), 17);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let result = KeyWindow::new(10, 5);
        assert!(matches!(
            result,
            Err(Error::Window(WindowError::InvertedRange { .. }))
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let result = KeyWindow::new(0, RECORD_SIZE);
        assert!(matches!(
            result,
            Err(Error::Window(WindowError::OutOfBounds { .. }))
        ));
    }

    #[test]
    fn test_last_byte_is_in_bounds() {
        let window = KeyWindow::new(RECORD_SIZE - 1, RECORD_SIZE - 1).unwrap();
        assert_eq!(window.len(), 1);
    }

    #[test]
    fn test_from_config_decrements_start() {
        // Caller-side keyStart is 1-based
        let window = KeyWindow::from_config(51, 60).unwrap();
        assert_eq!(window.start(), 50);
        assert_eq!(window.end(), 60);
    }

    #[test]
    fn test_from_config_clamps_nonpositive_start() {
        let window = KeyWindow::from_config(0, 10).unwrap();
        assert_eq!(window.start(), 0);

        let window = KeyWindow::from_config(-7, 10).unwrap();
        assert_eq!(window.start(), 0);
    }

    #[test]
    fn test_from_config_negative_end_rejected() {
        let result = KeyWindow::from_config(1, -1);
        assert!(matches!(
            result,
            Err(Error::Window(WindowError::InvertedRange { .. }))
        ));
    }
}
