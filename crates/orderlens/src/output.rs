//! Output rendering: aligned text tables and pretty-printed JSON.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns with a trailing row count.
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Render `rows` as a text table, or serialize `json` when JSON output is
/// selected. `json` is the typed value behind the rows, so JSON consumers
/// get real field names and numbers rather than stringified cells.
pub fn render<T, W>(
    format: OutputFormat,
    columns: &[&str],
    rows: &[Vec<String>],
    json: &T,
    writer: &mut W,
) -> Result<()>
where
    T: Serialize + ?Sized,
    W: Write,
{
    match format {
        OutputFormat::Text => write_text(columns, rows, writer),
        OutputFormat::Json => {
            writeln!(writer, "{}", serde_json::to_string_pretty(json)?)?;
            Ok(())
        }
    }
}

/// Render the empty-result notice.
pub fn render_empty<W: Write>(format: OutputFormat, writer: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "(no data)")?,
        OutputFormat::Json => writeln!(writer, "null")?,
    }
    Ok(())
}

fn write_text<W: Write>(columns: &[&str], rows: &[Vec<String>], writer: &mut W) -> Result<()> {
    if columns.is_empty() {
        return Ok(());
    }

    // Calculate column widths
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    // Print header
    for (i, col) in columns.iter().enumerate() {
        if i > 0 {
            write!(writer, "  ")?;
        }
        write!(writer, "{:width$}", col, width = widths[i])?;
    }
    writeln!(writer)?;

    // Print separator
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            write!(writer, "  ")?;
        }
        write!(writer, "{}", "-".repeat(*width))?;
    }
    writeln!(writer)?;

    // Print rows
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                write!(writer, "  ")?;
            }
            if i < widths.len() {
                write!(writer, "{:width$}", cell, width = widths[i])?;
            } else {
                write!(writer, "{cell}")?;
            }
        }
        writeln!(writer)?;
    }

    writeln!(writer)?;
    writeln!(writer, "{} row(s)", rows.len())?;
    Ok(())
}
