//! Input file path resolution from multiple sources

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::input;
use crate::error::{Result, TaguError};

/// Input file resolution with fallback logic
pub struct InputFileResolver;

impl InputFileResolver {
    /// Resolve the input file path with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (TAGU_AWS_CONFIG, AWS_CONFIG - in order)
    /// 3. Default file in the home directory (~/input-tags.yaml)
    pub fn resolve(cli_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_path {
            debug!("Using input file from CLI argument: {}", path.display());
            return Ok(path.to_path_buf());
        }

        for env_var in input::FILE_ENV_VARS {
            match std::env::var(env_var) {
                Ok(path) if !path.is_empty() => {
                    debug!("Using input file from {} environment variable", env_var);
                    return Ok(PathBuf::from(path));
                }
                _ => {}
            }
        }

        debug!(
            "No input file in CLI or {:?}, trying home directory",
            input::FILE_ENV_VARS
        );
        match Self::default_path() {
            Some(path) if path.exists() => {
                debug!("Using default input file: {}", path.display());
                Ok(path)
            }
            other => Err(TaguError::ConfigFormat(Self::not_found_message(
                other.as_deref(),
            ))),
        }
    }

    /// Default input file path (~/input-tags.yaml)
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(input::DEFAULT_FILE_NAME))
    }

    fn not_found_message(default_path: Option<&Path>) -> String {
        let checked = default_path
            .map(|p| format!(" or {}", p.display()))
            .unwrap_or_default();

        format!(
            "No input file found. Provide one using:\n\
             \n\
             1. CLI argument:      tagu aws --input-file <FILE>\n\
             2. Environment var:   export TAGU_AWS_CONFIG=<FILE>  (also: AWS_CONFIG)\n\
             3. Default location:  ~/{}\n\
             \n\
             Checked: env vars [{}]{}",
            input::DEFAULT_FILE_NAME,
            input::FILE_ENV_VARS.join(", "),
            checked
        )
    }
}
