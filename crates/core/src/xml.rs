//! XML rendering of sorted records.
//!
//! One `<row>` per record under a `<records>` root, pretty-printed with
//! two-space indentation, UTF-8, special characters escaped. Element and
//! attribute names follow the established document schema:
//!
//! ```text
//! <records>
//!   <row id="1">
//!     <student_info>
//!       <name>Ada</name>
//!       ...
//!     </student_info>
//!     <grade_info letter_grade="AA">
//!       <midterm>90</midterm>
//!       <project>85</project>
//!       <final>95</final>
//!     </grade_info>
//!     <regularStudent>👍</regularStudent>
//!     <course_surveyRating hexVal_bigEnd="00000004"
//!                          hexVal_littleEnd="04000000"
//!                          decimal="4">4</course_surveyRating>
//!   </row>
//! </records>
//! ```
//!
//! Omission rules: student_info children are dropped when empty (gender
//! when its byte is 0); the letter_grade attribute is dropped when empty;
//! regularStudent appears only for the two recognized marker bytes; the
//! rating element appears only for a nonzero value. The three rating
//! attributes are derived through the hex codec, and `decimal` re-parses
//! the big-endian rendering — a deliberate round-trip that exercises the
//! decode path, not a way to recover new information.

use crate::error::Result;
use crate::hex::{hex_to_decimal, to_big_endian_hex, to_little_endian_hex};
use crate::layout::{marker_text, Record};

/// Render the complete XML document for an already-sorted record slice.
///
/// Row `id` attributes are 1-based and sequential in final order.
pub fn render_document(records: &[Record]) -> Result<String> {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str("<records>\n");
    for (index, record) in records.iter().enumerate() {
        render_row(&mut doc, record, index + 1)?;
    }
    doc.push_str("</records>\n");
    Ok(doc)
}

fn render_row(doc: &mut String, record: &Record, id: usize) -> Result<()> {
    doc.push_str(&format!("  <row id=\"{}\">\n", id));

    // student_info group: each child omitted entirely when empty
    doc.push_str("    <student_info>\n");
    text_element(doc, "name", &record.name);
    text_element(doc, "surname", &record.surname);
    text_element(doc, "stuID", &record.student_id);
    if record.gender != 0 {
        text_element(doc, "gender", &(record.gender as char).to_string());
    }
    text_element(doc, "email", &record.email);
    text_element(doc, "phone", &record.phone);
    doc.push_str("    </student_info>\n");

    // grade_info group: integers always render
    if record.letter_grade.is_empty() {
        doc.push_str("    <grade_info>\n");
    } else {
        doc.push_str(&format!(
            "    <grade_info letter_grade=\"{}\">\n",
            escape(&record.letter_grade)
        ));
    }
    doc.push_str(&format!("      <midterm>{}</midterm>\n", record.midterm));
    doc.push_str(&format!("      <project>{}</project>\n", record.project));
    doc.push_str(&format!("      <final>{}</final>\n", record.final_exam));
    doc.push_str("    </grade_info>\n");

    // marker: only the two recognized values render
    if let Some(marker) = marker_text(record.regular_marker) {
        doc.push_str(&format!(
            "    <regularStudent>{}</regularStudent>\n",
            marker
        ));
    }

    // rating: 0 means "no rating" and emits nothing
    if record.survey_rating != 0 {
        let big = to_big_endian_hex(record.survey_rating);
        let little = to_little_endian_hex(record.survey_rating);
        let decimal = hex_to_decimal(&big)?;
        doc.push_str(&format!(
            "    <course_surveyRating hexVal_bigEnd=\"{}\" hexVal_littleEnd=\"{}\" decimal=\"{}\">{}</course_surveyRating>\n",
            big, little, decimal, record.survey_rating
        ));
    }

    doc.push_str("  </row>\n");
    Ok(())
}

/// Emit an indented `<name>text</name>` line, or nothing when the text is
/// empty.
fn text_element(doc: &mut String, name: &str, text: &str) {
    if text.is_empty() {
        return;
    }
    doc.push_str(&format!("      <{}>{}</{}>\n", name, escape(text), name));
}

/// Escape the five XML special characters.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
