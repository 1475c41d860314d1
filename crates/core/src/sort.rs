//! Byte-range insertion sort over records.
//!
//! Records are ordered by lexicographic comparison of the unsigned bytes in
//! a configured [`KeyWindow`] of their encoded form, ascending or
//! descending. Insertion sort is O(n²) worst case but simple to audit and
//! appropriate for the small-to-moderate record counts this tool handles.
//!
//! # Stability
//!
//! Records whose key windows compare equal keep their relative input order:
//! the inner loop shifts only on strict inequality. Stability is by
//! construction, not an extra tie-break.

use crate::layout::Record;
use crate::window::KeyWindow;

/// Sort records in place by their key window bytes.
///
/// `ascending` selects the comparison sense. The window is already
/// validated against the record width, so extraction cannot fail.
pub fn insertion_sort(records: &mut [Record], window: &KeyWindow, ascending: bool) {
    for i in 1..records.len() {
        let current = records[i].clone();
        let current_key = window.extract(&current.encode());

        let mut j = i;
        while j > 0 {
            let probe_key = window.extract(&records[j - 1].encode());
            let out_of_order = if ascending {
                probe_key > current_key
            } else {
                probe_key < current_key
            };
            if !out_of_order {
                break;
            }
            records[j] = records[j - 1].clone();
            j -= 1;
        }
        records[j] = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_id(id: &str) -> Record {
        Record {
            student_id: id.to_string(),
            ..Default::default()
        }
    }

    /// Window covering the studentId field (offsets 50..=60).
    fn id_window() -> KeyWindow {
        KeyWindow::new(50, 60).unwrap()
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.student_id.as_str()).collect()
    }

    #[test]
    fn test_ascending_order() {
        let mut records = vec![
            record_with_id("30"),
            record_with_id("10"),
            record_with_id("20"),
        ];
        insertion_sort(&mut records, &id_window(), true);
        assert_eq!(ids(&records), ["10", "20", "30"]);
    }

    #[test]
    fn test_descending_order() {
        let mut records = vec![
            record_with_id("30"),
            record_with_id("10"),
            record_with_id("20"),
        ];
        insertion_sort(&mut records, &id_window(), false);
        assert_eq!(ids(&records), ["30", "20", "10"]);
    }

    #[test]
    fn test_adjacent_pairs_respect_direction() {
        let mut records: Vec<Record> = ["5", "3", "9", "1", "7", "3", "0"]
            .iter()
            .map(|id| record_with_id(id))
            .collect();
        let window = id_window();

        insertion_sort(&mut records, &window, true);
        for pair in records.windows(2) {
            let a = window.extract(&pair[0].encode());
            let b = window.extract(&pair[1].encode());
            assert!(a <= b);
        }

        insertion_sort(&mut records, &window, false);
        for pair in records.windows(2) {
            let a = window.extract(&pair[0].encode());
            let b = window.extract(&pair[1].encode());
            assert!(a >= b);
        }
    }

    #[test]
    fn test_stability_for_equal_windows() {
        // Same studentId, different names: equal keys must keep input order
        let make = |id: &str, name: &str| Record {
            student_id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        };
        let mut records = vec![
            make("2", "first"),
            make("1", "only"),
            make("2", "second"),
            make("2", "third"),
        ];

        insertion_sort(&mut records, &id_window(), true);

        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["only", "first", "second", "third"]);
    }

    #[test]
    fn test_window_crossing_field_boundary() {
        // Window spanning the final-exam integer and the marker byte
        let window = KeyWindow::new(219, 223).unwrap();
        let make = |final_exam: i32, marker: u8| Record {
            final_exam,
            regular_marker: marker,
            ..Default::default()
        };
        // Little-endian integers compare by low byte first within the
        // window, which is exactly what raw-byte ordering means here
        let mut records = vec![make(2, 0), make(1, 1), make(1, 0)];

        insertion_sort(&mut records, &window, true);

        assert_eq!(records[0].final_exam, 1);
        assert_eq!(records[0].regular_marker, 0);
        assert_eq!(records[1].final_exam, 1);
        assert_eq!(records[1].regular_marker, 1);
        assert_eq!(records[2].final_exam, 2);
    }

    #[test]
    fn test_empty_and_single() {
        let window = id_window();

        let mut empty: Vec<Record> = Vec::new();
        insertion_sort(&mut empty, &window, true);
        assert!(empty.is_empty());

        let mut single = vec![record_with_id("42")];
        insertion_sort(&mut single, &window, true);
        assert_eq!(ids(&single), ["42"]);
    }

    #[test]
    fn test_comparison_does_not_stop_at_nul() {
        // "1" encodes as 31 00 ... and "10" as 31 30 ...; the full window
        // compares, so the padding NUL sorts "1" before "10"
        let mut records = vec![record_with_id("10"), record_with_id("1")];
        insertion_sort(&mut records, &id_window(), true);
        assert_eq!(ids(&records), ["1", "10"]);
    }
}
