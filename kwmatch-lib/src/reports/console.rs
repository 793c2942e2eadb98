use super::{RenderOptions, Table, common};
use crate::Result;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const COLUMN_GAP: &str = "  ";

pub fn generate<W: Write>(tables: &[Table], options: RenderOptions, use_colors: bool, writer: &mut W) -> Result<()> {
    render(tables, options, use_colors, get_terminal_width(), writer)
}

/// Renders every table under a title line.
///
/// A table that fits within `width` is shown as aligned columns; a wider one is shown
/// row by row with one `column : value` line per cell.
fn render<W: Write>(tables: &[Table], options: RenderOptions, use_colors: bool, width: usize, writer: &mut W) -> Result<()> {
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        let noun = if table.len() == 1 { "row" } else { "rows" };
        let title = format!("{} ({} {noun})", table.name(), table.len());
        if use_colors {
            writeln!(writer, "{}", title.bold())?;
        } else {
            writeln!(writer, "{title}")?;
        }

        if table.is_empty() {
            writeln!(writer, "  No records provided")?;
            continue;
        }

        let rows: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(|cell| common::format_cell(cell, options).into_owned()).collect())
            .collect();

        let widths = column_widths(table.header(), &rows);
        let total_width = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);

        if total_width <= width {
            write_columns(table, &rows, &widths, use_colors, writer)?;
        } else {
            write_records(table, &rows, writer)?;
        }
    }

    Ok(())
}

fn column_widths(header: &[String], rows: &[Vec<String>]) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .map(|(col, name)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|value| value.chars().count())
                .chain([name.chars().count()])
                .max()
                .unwrap_or(0)
        })
        .collect()
}

fn write_columns<W: Write>(table: &Table, rows: &[Vec<String>], widths: &[usize], use_colors: bool, writer: &mut W) -> Result<()> {
    let header = table
        .header()
        .iter()
        .zip(widths)
        .map(|(name, &width)| format!("{name:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let header = header.trim_end();
    if use_colors {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{header}")?;
    }

    for (cells, values) in table.rows().iter().zip(rows) {
        let line = cells
            .iter()
            .zip(values)
            .zip(widths)
            .map(|((cell, value), &width)| {
                if common::is_numeric(cell) {
                    format!("{value:>width$}")
                } else {
                    format!("{value:<width$}")
                }
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        writeln!(writer, "{}", line.trim_end())?;
    }

    Ok(())
}

fn write_records<W: Write>(table: &Table, rows: &[Vec<String>], writer: &mut W) -> Result<()> {
    let name_width = table.header().iter().map(|name| name.chars().count()).max().unwrap_or(0);
    for (index, values) in rows.iter().enumerate() {
        if index > 0 {
            writeln!(writer, "  ---")?;
        }
        for (name, value) in table.header().iter().zip(values) {
            writeln!(writer, "  {name:<name_width$} : {value}")?;
        }
    }

    Ok(())
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| usize::from(w))
}
