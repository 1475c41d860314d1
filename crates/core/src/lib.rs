//! records-converter-core: student record conversion between CSV, a
//! fixed-layout binary format, and validated XML.
//!
//! The core of the system is the binary record codec and the byte-range
//! comparison sort: records are 228-byte fixed-layout blobs, and the sort
//! key is an arbitrary configured byte window of that layout rather than a
//! named field.
//!
//! # Architecture
//!
//! One module per concern:
//! - `layout`: the fixed-width record and its byte-level codec
//! - `window`: validated key byte ranges over the encoded record
//! - `hex`: endian-aware hexadecimal rendering of 32-bit integers
//! - `sort`: stable insertion sort comparing raw key-window bytes
//! - `csv`: CSV line decoding with positional zero-fill
//! - `config`: JSON sort configuration (setupParams.json)
//! - `xml`: pretty-printed XML rendering of sorted records
//! - `schema`: structural XML-against-XSD checking
//! - `pipeline`: the three file-to-file stages
//!
//! # Design Principles
//!
//! - **No panics**: all failures are structured errors
//! - **Explicit layout**: field offsets and byte order are fixed by an
//!   offset table, never by compiler struct layout
//! - **Whole-file processing**: each stage loads its input fully, runs to
//!   completion, and fails outright — no streaming, no retries

pub mod config;
pub mod csv;
pub mod error;
pub mod hex;
pub mod layout;
pub mod pipeline;
pub mod schema;
pub mod sort;
pub mod window;
pub mod xml;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{Record, RECORD_SIZE};
pub use window::KeyWindow;
