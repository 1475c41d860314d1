//! Sort configuration loaded from a JSON file (`setupParams.json`).
//!
//! The file is a single object with exactly four required keys:
//!
//! ```json
//! {
//!     "dataFileName": "records.dat",
//!     "keyStart": 51,
//!     "keyEnd": 60,
//!     "order": "ASC"
//! }
//! ```
//!
//! `keyStart` is 1-based from the caller's perspective and is decremented
//! (clamped to ≥ 0) here; `keyEnd` is 0-based inclusive. `order` must be
//! exactly `"ASC"` for ascending; any other value means descending. A
//! missing key is a fatal configuration error naming that key.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, Error, Result};
use crate::window::KeyWindow;

/// The four required configuration keys, checked in this order so the
/// first missing one is the one reported.
pub const REQUIRED_KEYS: [&str; 4] = ["dataFileName", "keyStart", "keyEnd", "order"];

/// Raw shape of the JSON file.
#[derive(Debug, Deserialize)]
struct RawParams {
    #[serde(rename = "dataFileName")]
    data_file_name: String,
    #[serde(rename = "keyStart")]
    key_start: i64,
    #[serde(rename = "keyEnd")]
    key_end: i64,
    order: String,
}

/// Resolved sort configuration handed to the binary→XML stage.
#[derive(Debug, Clone)]
pub struct SortConfig {
    /// Path of the binary data file to load
    pub data_file_name: String,
    /// Validated key byte range
    pub window: KeyWindow,
    /// True when `order` was exactly `"ASC"`
    pub ascending: bool,
}

/// Load and validate the sort configuration.
///
/// # Errors
/// - `Error::MissingFile` if the path does not exist
/// - `ConfigError::MissingKey` naming the first absent required key
/// - `ConfigError::Json` for unparsable JSON or wrongly typed values
/// - `WindowError` if the resolved key range does not fit a record
pub fn load(path: &Path) -> Result<SortConfig> {
    if !path.exists() {
        return Err(Error::MissingFile(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

/// Parse configuration from JSON text. Split out of [`load`] for testing.
pub fn parse(text: &str) -> Result<SortConfig> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(ConfigError::Json)?;

    for key in REQUIRED_KEYS {
        if value.get(key).is_none() {
            return Err(ConfigError::MissingKey { key }.into());
        }
    }

    let raw: RawParams = serde_json::from_value(value).map_err(ConfigError::Json)?;
    let window = KeyWindow::from_config(raw.key_start, raw.key_end)?;

    Ok(SortConfig {
        data_file_name: raw.data_file_name,
        window,
        ascending: raw.order == "ASC",
    })
}
