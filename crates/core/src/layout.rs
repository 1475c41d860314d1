//! Fixed-width binary record layout.
//!
//! A student record is stored as a flat 228-byte blob. The binary data file
//! is a plain concatenation of these blobs: no header, no separators, no
//! record count. Consumers derive the count from `file_size / RECORD_SIZE`.
//!
//! # Record Layout
//!
//! ```text
//! offset  width  field
//! +--------------------------------------+
//! |   0     20   name                    |  text, NUL-padded
//! |  20     30   surname                 |  text, NUL-padded
//! |  50     11   studentId               |  text, NUL-padded
//! |  61      1   gender                  |  single byte
//! |  62    128   email                   |  text, NUL-padded
//! | 190     18   phone                   |  text, NUL-padded
//! | 208      3   letterGrade             |  text, NUL-padded
//! | 211      4   midterm                 |  i32 little-endian
//! | 215      4   project                 |  i32 little-endian
//! | 219      4   final                   |  i32 little-endian
//! | 223      1   regularStudentMarker    |  single byte
//! | 224      4   courseSurveyRating      |  i32 little-endian
//! +--------------------------------------+
//! total: 228 bytes
//! ```
//!
//! The layout is packed: no alignment padding anywhere, so the format is
//! identical on every platform. Integer byte order is fixed at design time
//! (little-endian), never auto-detected.
//!
//! # Text Field Rules
//!
//! - Values longer than the field truncate silently at the field width.
//! - Shorter values are padded with NUL bytes.
//! - Decoding reads up to the first NUL and interprets the bytes as UTF-8
//!   (lossily, since decode must be total for any 228-byte buffer).

use crate::error::{LayoutError, Result};

/// Total width of one encoded record in bytes.
pub const RECORD_SIZE: usize = 228;

// Field offsets within the encoded record.
const NAME: (usize, usize) = (0, 20);
const SURNAME: (usize, usize) = (20, 30);
const STUDENT_ID: (usize, usize) = (50, 11);
const GENDER: usize = 61;
const EMAIL: (usize, usize) = (62, 128);
const PHONE: (usize, usize) = (190, 18);
const LETTER_GRADE: (usize, usize) = (208, 3);
const MIDTERM: usize = 211;
const PROJECT: usize = 215;
const FINAL: usize = 219;
const MARKER: usize = 223;
const SURVEY_RATING: usize = 224;

/// Stored marker byte for a thumbs-up regular-student flag.
///
/// The two recognized marker emoji, 👍 (`F0 9F 91 8D`) and 👎
/// (`F0 9F 91 8E`), share their first three UTF-8 bytes. The single-byte
/// field stores the final, discriminating byte.
pub const MARKER_THUMBS_UP: u8 = 0x8D;

/// Stored marker byte for a thumbs-down regular-student flag.
pub const MARKER_THUMBS_DOWN: u8 = 0x8E;

/// The thumbs-up marker as rendered in XML output.
pub const THUMBS_UP: &str = "\u{1F44D}";

/// The thumbs-down marker as rendered in XML output.
pub const THUMBS_DOWN: &str = "\u{1F44E}";

/// One student record.
///
/// Constructed from a CSV line or a 228-byte blob, lives for one pipeline
/// stage, and is discarded after being written to the next.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub name: String,
    pub surname: String,
    pub student_id: String,
    /// Single gender byte; 0 means absent
    pub gender: u8,
    pub email: String,
    pub phone: String,
    pub letter_grade: String,
    pub midterm: i32,
    pub project: i32,
    pub final_exam: i32,
    /// Regular-student marker byte; see [`MARKER_THUMBS_UP`]
    pub regular_marker: u8,
    /// Course survey rating; exactly 0 means "no rating" (the source
    /// format collapses "absent" and "zero", preserved here as documented
    /// behavior)
    pub survey_rating: i32,
}

impl Record {
    /// Encode this record into its fixed 228-byte layout.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buf = [0u8; RECORD_SIZE];

        put_text(&mut buf, NAME, &self.name);
        put_text(&mut buf, SURNAME, &self.surname);
        put_text(&mut buf, STUDENT_ID, &self.student_id);
        buf[GENDER] = self.gender;
        put_text(&mut buf, EMAIL, &self.email);
        put_text(&mut buf, PHONE, &self.phone);
        put_text(&mut buf, LETTER_GRADE, &self.letter_grade);
        put_i32(&mut buf, MIDTERM, self.midterm);
        put_i32(&mut buf, PROJECT, self.project);
        put_i32(&mut buf, FINAL, self.final_exam);
        buf[MARKER] = self.regular_marker;
        put_i32(&mut buf, SURVEY_RATING, self.survey_rating);

        buf
    }

    /// Decode a record from a fixed-width buffer.
    ///
    /// Total for any buffer of exactly [`RECORD_SIZE`] bytes: there is no
    /// magic number or header to validate, so malformed input yields
    /// garbage field values rather than an error.
    ///
    /// # Errors
    /// Returns `LayoutError::WidthMismatch` if the buffer is not exactly
    /// one record wide.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RECORD_SIZE {
            return Err(LayoutError::WidthMismatch {
                expected: RECORD_SIZE,
                actual: bytes.len(),
            }
            .into());
        }

        Ok(Self {
            name: get_text(bytes, NAME),
            surname: get_text(bytes, SURNAME),
            student_id: get_text(bytes, STUDENT_ID),
            gender: bytes[GENDER],
            email: get_text(bytes, EMAIL),
            phone: get_text(bytes, PHONE),
            letter_grade: get_text(bytes, LETTER_GRADE),
            midterm: get_i32(bytes, MIDTERM),
            project: get_i32(bytes, PROJECT),
            final_exam: get_i32(bytes, FINAL),
            regular_marker: bytes[MARKER],
            survey_rating: get_i32(bytes, SURVEY_RATING),
        })
    }
}

/// Map a stored marker byte back to its rendered emoji.
///
/// Returns `None` for anything other than the two recognized markers.
pub fn marker_text(byte: u8) -> Option<&'static str> {
    match byte {
        MARKER_THUMBS_UP => Some(THUMBS_UP),
        MARKER_THUMBS_DOWN => Some(THUMBS_DOWN),
        _ => None,
    }
}

/// Write a text value into its field slot, truncating silently at the
/// field width and NUL-padding the rest.
fn put_text(buf: &mut [u8], (offset, width): (usize, usize), value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(width);
    buf[offset..offset + len].copy_from_slice(&bytes[..len]);
    // Remaining bytes stay zero (buffer starts zeroed)
}

/// Read a text field: bytes up to the first NUL, interpreted as UTF-8.
fn get_text(buf: &[u8], (offset, width): (usize, usize)) -> String {
    let slot = &buf[offset..offset + width];
    let end = slot.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8_lossy(&slot[..end]).into_owned()
}

fn put_i32(buf: &mut [u8], offset: usize, value: i32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn get_i32(buf: &[u8], offset: usize) -> i32 {
    i32::from_le_bytes(buf[offset..offset + 4].try_into().unwrap())
}
