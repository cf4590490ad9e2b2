//! Output formatting module
//!
//! Renders tag rows as JSON, table, CSV or YAML

mod csv;
mod json;
mod table;
mod yaml;

use crate::aws::TagResultRow;
use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::table::TableFormatter;
pub use self::yaml::YamlFormatter;

/// Trait for output formatters
pub trait Formatter {
    /// Render the rows into printable text
    fn format(&self, rows: &[TagResultRow]) -> Result<String>;
}

/// Render rows with the formatter matching `format`
pub fn render_rows(rows: &[TagResultRow], format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter.format(rows),
        OutputFormat::Table => TableFormatter.format(rows),
        OutputFormat::Csv => CsvFormatter.format(rows),
        OutputFormat::Yaml => YamlFormatter.format(rows),
    }
}

/// Print rows to stdout in the requested format
pub fn output_rows(rows: &[TagResultRow], format: &OutputFormat) -> Result<()> {
    let rendered = render_rows(rows, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
