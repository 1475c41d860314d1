//! CSV line decoding into records.
//!
//! Each non-header line carries exactly 12 comma-separated field slots in
//! record order. Tokens are mapped positionally: an empty or missing token
//! zero-fills its slot instead of shifting later fields left (the source
//! program skipped empty tokens, silently misaligning everything after
//! them; positional zero-fill is the documented replacement policy).
//!
//! Integer tokens parse with atoi semantics: an optional sign followed by
//! leading digits, anything else yields 0.

use crate::layout::{Record, MARKER_THUMBS_DOWN, MARKER_THUMBS_UP, THUMBS_DOWN, THUMBS_UP};

/// Number of field slots per CSV line.
pub const FIELDS_PER_LINE: usize = 12;

/// Decode one CSV line into a record.
///
/// Tokens beyond the 12th are ignored; lines with fewer tokens leave the
/// remaining slots zero-filled. Over-long text values truncate silently
/// when the record is encoded.
pub fn record_from_line(line: &str) -> Record {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut tokens = line.split(',');
    let mut next = || tokens.next().unwrap_or("");

    Record {
        name: next().to_string(),
        surname: next().to_string(),
        student_id: next().to_string(),
        gender: first_byte(next()),
        email: next().to_string(),
        phone: next().to_string(),
        letter_grade: next().to_string(),
        midterm: parse_int(next()),
        project: parse_int(next()),
        final_exam: parse_int(next()),
        regular_marker: marker_byte(next()),
        survey_rating: parse_int(next()),
    }
}

/// atoi-style integer parse: optional sign, then leading digits; 0 for
/// anything unparsable.
fn parse_int(token: &str) -> i32 {
    let token = token.trim();
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, token.strip_prefix('+').unwrap_or(token)),
    };

    let mut value: i64 = 0;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => value = (value * 10 + d as i64).min(i64::from(i32::MAX) + 1),
            None => break,
        }
    }
    (sign * value).clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

fn first_byte(token: &str) -> u8 {
    token.as_bytes().first().copied().unwrap_or(0)
}

/// Reduce a marker token to its stored byte.
///
/// The two recognized emoji map to their discriminating final UTF-8 byte;
/// any other token stores its first byte (0 when empty).
fn marker_byte(token: &str) -> u8 {
    if token.contains(THUMBS_UP) {
        MARKER_THUMBS_UP
    } else if token.contains(THUMBS_DOWN) {
        MARKER_THUMBS_DOWN
    } else {
        first_byte(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADA: &str = "Ada,Lovelace,20210001,F,ada@x.com,555-1,AA,90,85,95,Y,4";

    #[test]
    fn test_full_line() {
        let record = record_from_line(ADA);

        assert_eq!(record.name, "Ada");
        assert_eq!(record.surname, "Lovelace");
        assert_eq!(record.student_id, "20210001");
        assert_eq!(record.gender, b'F');
        assert_eq!(record.email, "ada@x.com");
        assert_eq!(record.phone, "555-1");
        assert_eq!(record.letter_grade, "AA");
        assert_eq!(record.midterm, 90);
        assert_eq!(record.project, 85);
        assert_eq!(record.final_exam, 95);
        assert_eq!(record.regular_marker, b'Y');
        assert_eq!(record.survey_rating, 4);
    }

    #[test]
    fn test_trailing_newline_stripped() {
        let record = record_from_line("Ada,Lovelace,1,F,,,,,,,,\r\n");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.survey_rating, 0);
    }

    #[test]
    fn test_empty_token_zero_fills_without_shifting() {
        // Empty email must NOT pull phone into the email slot
        let record = record_from_line("Ada,Lovelace,1,F,,555-1,AA,90,85,95,Y,4");

        assert_eq!(record.email, "");
        assert_eq!(record.phone, "555-1");
        assert_eq!(record.letter_grade, "AA");
        assert_eq!(record.midterm, 90);
    }

    #[test]
    fn test_missing_trailing_fields_zero_fill() {
        let record = record_from_line("Ada,Lovelace,1");

        assert_eq!(record.student_id, "1");
        assert_eq!(record.gender, 0);
        assert_eq!(record.email, "");
        assert_eq!(record.midterm, 0);
        assert_eq!(record.regular_marker, 0);
        assert_eq!(record.survey_rating, 0);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        let record = record_from_line("Ada,Lovelace,1,F,,,,,,,,4,ignored,also");
        assert_eq!(record.survey_rating, 4);
    }

    #[test]
    fn test_atoi_semantics() {
        assert_eq!(parse_int("90"), 90);
        assert_eq!(parse_int("-45"), -45);
        assert_eq!(parse_int("+7"), 7);
        assert_eq!(parse_int("12abc"), 12);
        assert_eq!(parse_int("abc"), 0);
        assert_eq!(parse_int(""), 0);
        assert_eq!(parse_int("  33 "), 33);
    }

    #[test]
    fn test_atoi_saturates_out_of_range() {
        assert_eq!(parse_int("99999999999"), i32::MAX);
        assert_eq!(parse_int("-99999999999"), i32::MIN);
    }

    #[test]
    fn test_marker_emoji_tokens() {
        let up = record_from_line(&ADA.replace(",Y,", ",👍,"));
        assert_eq!(up.regular_marker, MARKER_THUMBS_UP);

        let down = record_from_line(&ADA.replace(",Y,", ",👎,"));
        assert_eq!(down.regular_marker, MARKER_THUMBS_DOWN);
    }

    #[test]
    fn test_round_trip_through_layout() {
        let record = record_from_line(ADA);
        let decoded = crate::layout::Record::decode(&record.encode()).unwrap();
        assert_eq!(decoded, record);
    }
}
