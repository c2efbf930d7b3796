//! # File Output
//!
//! Writes the Save action's record to disk as human-readable JSON (2-space
//! indentation). Saves are atomic: the document is written to a `.tmp`
//! sibling and renamed into place, so a failed write never leaves a partial
//! file at the destination. This module never reads files back; Save is
//! write-only.
//!
//! ## Example
//!
//! ```rust,no_run
//! use bridge_core::calculations::DeckInput;
//! use bridge_core::file_io::{save_record, SavedRecord};
//! use std::path::Path;
//!
//! let record = SavedRecord::new(DeckInput::default());
//! save_record(&record, Path::new("bridge_inputs.json")).unwrap();
//! ```

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::calculations::DeckInput;
use crate::errors::{BridgeError, BridgeResult};

/// Snapshot of the current inputs plus the moment they were saved.
///
/// ## JSON Example
///
/// ```json
/// {
///   "inputs": {
///     "span": 30.0,
///     "width": 10.0,
///     "girders": 4,
///     "live": 5.0
///   },
///   "timestamp": 1756339200
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedRecord {
    /// Input snapshot as parsed from the form
    pub inputs: DeckInput,
    /// Wall-clock time of the save, integer epoch seconds
    pub timestamp: i64,
}

impl SavedRecord {
    /// Create a record stamped with the current wall-clock time.
    pub fn new(inputs: DeckInput) -> Self {
        SavedRecord {
            inputs,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Write a record to `path` as pretty-printed JSON.
///
/// The write goes to `<path>.tmp` first and is renamed over the destination
/// on success; both the temp write and the rename map failures to
/// [`BridgeError::FileError`]. The temp file is removed if the rename fails.
pub fn save_record(record: &SavedRecord, path: &Path) -> BridgeResult<()> {
    let json = serde_json::to_string_pretty(record).map_err(|e| BridgeError::SerializationError {
        reason: e.to_string(),
    })?;

    let tmp_path = path.with_extension("json.tmp");

    fs::write(&tmp_path, &json).map_err(|e| {
        BridgeError::file_error("write", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        BridgeError::file_error("rename", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}
