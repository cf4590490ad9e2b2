//! JSON output formatter

use crate::aws::TagResultRow;
use crate::error::Result;

use super::Formatter;

/// Formatter for JSON output: a single-line array of row objects
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, rows: &[TagResultRow]) -> Result<String> {
        Ok(serde_json::to_string(rows)?)
    }
}
