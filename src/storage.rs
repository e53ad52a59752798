//! On-disk record of the shell's working directory.
//!
//! The format is a single JSON object: `{"cwd": "/abs/path"}`. Newer files
//! also carry a `saved_at` timestamp, which readers treat as optional.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    pub cwd: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Local>>,
}

impl PersistedState {
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            saved_at: Some(Local::now()),
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("state file not found")]
    NotFound,

    #[error("{0}")]
    Corrupt(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub fn save_state(path: &Path, state: &PersistedState) -> Result<(), StorageError> {
    let json = serde_json::to_string(state)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_state(path: &Path) -> Result<PersistedState, StorageError> {
    let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Io(e),
    })?;
    let state: PersistedState = serde_json::from_str(&raw)?;
    Ok(state)
}
