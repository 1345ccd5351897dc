//! Dataset registry: kind, path, and source tracking for each output file.
//! Written by the generation process alongside the datasets; read by the
//! publish gate to know what to validate.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// Schema kind name, see [crate::schema::model::DatasetKind::as_str].
    pub kind: String,
    pub path: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

pub type Registry = HashMap<String, DatasetEntry>;

pub const DEFAULT_REGISTRY_PATH: &str = "data/registry.json";

#[derive(Debug)]
pub enum RegistryError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(err) => write!(f, "failed to read registry: {err}"),
            Self::Parse(err) => write!(f, "failed to parse registry JSON: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Load the registry file. A missing registry is a setup error for the whole
/// batch, so this is the one loader that does not degrade gracefully.
pub fn load_registry(path: impl AsRef<Path>) -> Result<Registry, RegistryError> {
    let raw = fs::read_to_string(path).map_err(RegistryError::Read)?;
    serde_json::from_str(&raw).map_err(RegistryError::Parse)
}
