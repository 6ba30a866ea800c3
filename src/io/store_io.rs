use std::fs;
use std::path::{Path, PathBuf};

use crate::model::Roster;

/// Fixed location of the persisted roster, relative to the working
/// directory. There are no flags or environment variables to move it.
pub const DATA_PATH: &str = "data/data.json";

/// Error type for roster store I/O
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode roster: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the roster from `path`.
///
/// A file that cannot be read is fatal and bubbles up to `main`. A file
/// that reads but does not decode as a JSON array of records is *not* an
/// error: the decode failure is discarded and the roster comes up empty.
pub fn load(path: &Path) -> Result<Roster, StoreError> {
    let text = fs::read_to_string(path).map_err(|e| StoreError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(serde_json::from_str(&text).unwrap_or_default())
}

/// Write the full roster to `path`, truncating whatever was there.
///
/// Called after every mutation, before the next input event is processed.
/// Any encode or write failure is fatal to the process. There is no
/// atomic rename or backup; a crash mid-write can corrupt the file.
pub fn save(path: &Path, roster: &Roster) -> Result<(), StoreError> {
    let json = serde_json::to_string(roster)?;
    fs::write(path, json).map_err(|e| StoreError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
