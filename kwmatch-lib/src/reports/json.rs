use super::{Cell, RenderOptions, Table};
use crate::Result;
use core::fmt::Write;
use serde_json::{Value, json};

pub fn generate<W: Write>(tables: &[Table], options: RenderOptions, writer: &mut W) -> Result<()> {
    let views: Vec<Value> = tables
        .iter()
        .map(|table| {
            json!({
                "header": table.header(),
                "name": table.name(),
                "rows": table
                    .rows()
                    .iter()
                    .map(|row| row.iter().map(|cell| cell_to_json(cell, options)).collect::<Vec<_>>())
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = json!({
        "views": views
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn cell_to_json(cell: &Cell, options: RenderOptions) -> Value {
    match cell {
        Cell::Text(text) => json!(text.as_str()),
        Cell::Integer(value) => json!(value),
        Cell::Number(value) => json!(value),
        Cell::NotAvailable if options.blank_not_available => Value::Null,
        Cell::NotAvailable => json!(0),
    }
}
