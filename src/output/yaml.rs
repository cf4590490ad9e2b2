//! YAML output formatter

use crate::aws::TagResultRow;
use crate::error::Result;

use super::Formatter;

/// Formatter for YAML output
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn format(&self, rows: &[TagResultRow]) -> Result<String> {
        Ok(serde_yml::to_string(rows)?)
    }
}
