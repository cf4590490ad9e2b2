//! Table output formatter

use comfy_table::{presets::NOTHING, Table};

use crate::aws::TagResultRow;
use crate::error::Result;

use super::Formatter;

/// Formatter for ASCII table output
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format(&self, rows: &[TagResultRow]) -> Result<String> {
        let mut table = Table::new();
        table.load_preset(NOTHING).set_header(vec![
            "Account", "Region", "Service", "Resource", "Key", "Value",
        ]);

        for row in rows {
            table.add_row(vec![
                &row.account,
                &row.region,
                &row.service,
                &row.resource,
                &row.key,
                &row.value,
            ]);
        }

        Ok(table.to_string())
    }
}
