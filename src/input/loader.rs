//! Input file reading and shape detection

use log::debug;
use serde::de::DeserializeOwned;
use serde_yml::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, TaguError};

use super::models::{DetailedSpec, GeneralFilterSpec};

/// Reads the YAML input file and normalizes it into a `DetailedSpec`
pub struct InputLoader {
    path: PathBuf,
}

impl InputLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the input file.
    ///
    /// An `accounts` key selects the general shape (expanded per account),
    /// otherwise a `filter-input` key selects the detailed shape.
    pub fn load(&self) -> Result<DetailedSpec> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            TaguError::ConfigFormat(format!(
                "Failed to read input file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        self.parse(&content)
    }

    fn parse(&self, content: &str) -> Result<DetailedSpec> {
        let value: Value = serde_yml::from_str(content).map_err(|e| self.parse_error(e))?;

        if value.get("accounts").is_some() {
            let general: GeneralFilterSpec = self.decode(value)?;
            debug!(
                "Input file {} uses the general shape ({} accounts)",
                self.path.display(),
                general.accounts.len()
            );
            return Ok(DetailedSpec::from_general(general));
        }

        if value.get("filter-input").is_some() {
            let detailed: DetailedSpec = self.decode(value)?;
            debug!(
                "Input file {} uses the detailed shape ({} entries)",
                self.path.display(),
                detailed.filter_input.len()
            );
            return Ok(detailed);
        }

        Err(TaguError::ConfigFormat(format!(
            "invalid configuration format for file {}: expected an 'accounts' or 'filter-input' key",
            self.path.display()
        )))
    }

    fn decode<T: DeserializeOwned>(&self, value: Value) -> Result<T> {
        serde_yml::from_value(value).map_err(|e| self.parse_error(e))
    }

    fn parse_error(&self, e: serde_yml::Error) -> TaguError {
        TaguError::ConfigFormat(format!(
            "Failed to parse input file {}: {}",
            self.path.display(),
            e
        ))
    }
}
