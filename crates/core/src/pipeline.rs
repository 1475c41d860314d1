//! Pipeline stages tying the codec, sort, and renderers together.
//!
//! Three stages, matching the tool's three operation modes:
//! 1. CSV → binary: one fixed-width record appended per data line
//! 2. binary → XML: load, sort by the configured key window, render
//! 3. XML ⇄ XSD: structural schema check
//!
//! Every stage reads its whole input into memory, processes it, and writes
//! its whole output: no streaming, no shared state across invocations.
//! Files are released on every exit path by scope.

use std::path::Path;

use crate::config::SortConfig;
use crate::csv::record_from_line;
use crate::error::{Error, Result};
use crate::layout::{Record, RECORD_SIZE};
use crate::schema::{validate_against_schema, SchemaReport};
use crate::sort::insertion_sort;
use crate::xml::render_document;

/// Convert a CSV file to a binary record file.
///
/// The first line is a header and is skipped; blank lines are ignored;
/// every other line produces exactly one record.
///
/// # Returns
/// The number of records written.
pub fn csv_to_binary(input: &Path, output: &Path) -> Result<usize> {
    let text = read_existing(input)?;

    let mut buf = Vec::new();
    let mut count = 0;
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let record = record_from_line(line);
        buf.extend_from_slice(&record.encode());
        count += 1;
    }

    std::fs::write(output, &buf)?;
    Ok(count)
}

/// Load every record from a binary file.
///
/// The record count is `file_size / RECORD_SIZE`; trailing bytes that do
/// not fill a whole record are ignored.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;

    let mut records = Vec::with_capacity(bytes.len() / RECORD_SIZE);
    for chunk in bytes.chunks_exact(RECORD_SIZE) {
        records.push(Record::decode(chunk)?);
    }
    Ok(records)
}

/// Convert the configured binary file to a sorted XML document.
///
/// The binary source path, key window, and order all come from the
/// configuration passed in explicitly; this stage holds no global state.
///
/// # Returns
/// The number of rows rendered.
pub fn binary_to_xml(config: &SortConfig, xml_out: &Path) -> Result<usize> {
    let mut records = load_records(Path::new(&config.data_file_name))?;

    insertion_sort(&mut records, &config.window, config.ascending);

    let doc = render_document(&records)?;
    std::fs::write(xml_out, doc)?;
    Ok(records.len())
}

/// Check an XML file against an XSD file.
///
/// The verdict is returned as data; only unreadable or unscannable input
/// is an error.
pub fn validate_xml_file(xml_path: &Path, xsd_path: &Path) -> Result<SchemaReport> {
    let xml = read_existing(xml_path)?;
    let xsd = read_existing(xsd_path)?;
    validate_against_schema(&xml, &xsd)
}

/// Read a file to a string, reporting a missing path distinctly from an
/// open failure.
fn read_existing(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    Ok(std::fs::read_to_string(path)?)
}
