use super::{RenderOptions, Table, common};
use crate::Result;
use core::fmt::Write;
use std::borrow::Cow;

/// Writes one table as CSV: the header row, then one line per row.
pub fn generate<W: Write>(table: &Table, options: RenderOptions, writer: &mut W) -> Result<()> {
    write_line(writer, table.header().iter().map(|name| escape_csv(name)))?;
    for row in table.rows() {
        write_line(writer, row.iter().map(|cell| escape_csv_owned(common::format_cell(cell, options))))?;
    }

    Ok(())
}

fn write_line<W, I, S>(writer: &mut W, fields: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (index, field) in fields.into_iter().enumerate() {
        if index > 0 {
            writer.write_char(',')?;
        }
        writer.write_str(field.as_ref())?;
    }
    writeln!(writer)?;
    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

fn escape_csv_owned(s: Cow<'_, str>) -> Cow<'_, str> {
    match s {
        Cow::Borrowed(s) => escape_csv(s),
        Cow::Owned(s) => Cow::Owned(escape_csv(&s).into_owned()),
    }
}
