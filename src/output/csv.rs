//! CSV output formatter

use crate::aws::TagResultRow;
use crate::error::Result;

use super::Formatter;

/// Formatter for CSV output
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, rows: &[TagResultRow]) -> Result<String> {
        let mut out = String::from("account,region,service,resource,key,value\n");

        for row in rows {
            let fields = [
                &row.account,
                &row.region,
                &row.service,
                &row.resource,
                &row.key,
                &row.value,
            ];
            let line: Vec<String> = fields.iter().map(|f| escape_csv(f)).collect();
            out.push_str(&line.join(","));
            out.push('\n');
        }

        Ok(out)
    }
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
