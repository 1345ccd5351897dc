//! Candidate payload loading: read one dataset file into a JSON value.
//! Parse failures are per-file findings for the batch report, not process
//! aborts, so the error carries enough context to render a diagnostic.

use std::fmt;
use std::fs;
use std::path::Path;

use serde_json::Value;

#[derive(Debug)]
pub enum LoadError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read dataset file: {err}"),
            Self::Parse(err) => write!(f, "failed to parse dataset JSON: {err}"),
        }
    }
}

impl std::error::Error for LoadError {}

/// Read and parse one candidate dataset file.
pub fn load_payload(path: impl AsRef<Path>) -> Result<Value, LoadError> {
    let raw = fs::read_to_string(path).map_err(LoadError::Read)?;
    serde_json::from_str(&raw).map_err(LoadError::Parse)
}
