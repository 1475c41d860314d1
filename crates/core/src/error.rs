//! Error types for the records-converter system.
//!
//! All operations return structured errors rather than panicking.
//! Each sub-enum corresponds to a failure domain:
//! - Layout: binary record encoding/decoding
//! - Window: key byte-range validation
//! - Hex: hexadecimal string conversion
//! - Config: sort configuration (setupParams.json)
//! - Schema: XML structural checks against an XSD
//! - I/O: file system operations

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for all operations in the system.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist (distinct from a failed open)
    #[error("{0} does not exist")]
    MissingFile(PathBuf),

    /// Binary record layout error (e.g., buffer of the wrong width)
    #[error("record layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Key window error (e.g., range outside the record)
    #[error("key window error: {0}")]
    Window(#[from] WindowError),

    /// Hexadecimal conversion error
    #[error("hex conversion error: {0}")]
    Hex(#[from] HexError),

    /// Sort configuration error (missing key, wrong type, bad JSON)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// XML/XSD structural error (document cannot be checked at all)
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Binary record layout errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Buffer handed to decode is not exactly one record wide
    #[error("buffer width mismatch: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}

/// Key window errors.
///
/// These are configuration errors: a bad window is rejected before any
/// sorting starts, never mid-sort.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Start offset is after the end offset
    #[error("window start {start} is after end {end}")]
    InvertedRange { start: i64, end: i64 },

    /// Window extends past the end of the record
    #[error("window [{start}, {end}] exceeds record width {width}")]
    OutOfBounds {
        start: usize,
        end: usize,
        width: usize,
    },
}

/// Hexadecimal conversion errors.
///
/// Invalid input gets a distinct signal. A plain `-1` sentinel would be
/// indistinguishable from a string that legitimately decodes to -1.
#[derive(Debug, Error)]
pub enum HexError {
    /// Empty input string
    #[error("empty hex string")]
    Empty,

    /// Character outside 0-9, A-F, a-f
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit { digit: char, position: usize },

    /// More digits than fit in 32 bits
    #[error("hex string has {len} digits, maximum is 8")]
    TooLong { len: usize },
}

/// Sort configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required key is absent from the JSON object
    #[error("missing parameter '{key}'")]
    MissingKey { key: &'static str },

    /// The configuration file is not valid JSON (or a key has the wrong type)
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// XML/XSD structural errors.
///
/// These mean the document could not be scanned at all. A well-formed
/// document that merely violates the schema produces a
/// [`SchemaReport`](crate::schema::SchemaReport) verdict instead.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A `<` with no matching `>`
    #[error("unclosed tag at byte {position}")]
    UnclosedTag { position: usize },

    /// Closing tag does not match the innermost open element
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedTag { expected: String, found: String },

    /// Closing tag with no open element
    #[error("unexpected closing tag </{found}>")]
    UnexpectedClose { found: String },

    /// Document ended with elements still open
    #[error("{count} unclosed element(s) at end of document")]
    UnclosedElements { count: usize },

    /// No element content at all
    #[error("document has no root element")]
    NoRootElement,
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
