use super::{Cell, RenderOptions, Table};
use crate::Result;
use rust_xlsxwriter::{DocProperties, Format, Workbook, Worksheet};
use std::io::Write;

/// Writes all tables into a single workbook, one worksheet per table.
#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
pub fn generate<W: Write>(tables: &[Table], options: RenderOptions, writer: &mut W) -> Result<()> {
    let mut workbook = Workbook::new();

    let properties = DocProperties::new().set_author("kwmatch");
    workbook.set_properties(&properties);

    let bold_format = Format::new().set_bold();

    for table in tables {
        let worksheet = workbook.add_worksheet().set_name(table.name())?;

        for (col_idx, name) in table.header().iter().enumerate() {
            #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
            worksheet.write_string_with_format(0, col_idx as u16, name, &bold_format)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        for (row_idx, row) in table.rows().iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                #[expect(clippy::cast_possible_truncation, reason = "Row index limited by Excel's row limit")]
                let row_num = (row_idx + 1) as u32;
                #[expect(clippy::cast_possible_truncation, reason = "Column index limited by Excel's u16 column limit")]
                write_cell(worksheet, row_num, col_idx as u16, cell, options)?;
            }
        }

        worksheet.autofit();
    }

    let data = workbook.save_to_buffer()?;
    writer.write_all(&data)?;

    Ok(())
}

#[expect(unused_results, reason = "rust_xlsxwriter methods return &mut Worksheet for chaining")]
#[expect(clippy::cast_precision_loss, reason = "Intentional conversion to f64 for Excel output")]
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell, options: RenderOptions) -> Result<()> {
    match cell {
        Cell::Text(text) => {
            worksheet.write_string(row, col, text.as_str())?;
        }
        Cell::Integer(value) => {
            worksheet.write_number(row, col, *value as f64)?;
        }
        Cell::Number(value) => {
            worksheet.write_number(row, col, *value)?;
        }
        Cell::NotAvailable => {
            if !options.blank_not_available {
                worksheet.write_number(row, col, 0)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_generate_produces_zip() {
        let mut table = Table::new("matchTypeComparison", vec!["Keyword".to_string(), "Clicks".to_string()]);
        table.append(vec![Cell::from("shoe"), Cell::Integer(10)]);
        table.append(vec![Cell::from("boot"), Cell::NotAvailable]);
        let empty = Table::new("Campaign_information", vec!["Account".to_string()]);

        let mut output = Cursor::new(Vec::new());
        generate(&[table, empty], RenderOptions::default(), &mut output).unwrap();

        let bytes = output.into_inner();
        assert!(bytes.len() > 1000, "Excel output should be substantial");
        assert_eq!(&bytes[0..2], b"PK", "Excel file should be a valid ZIP archive");
    }

    #[test]
    fn test_generate_rejects_duplicate_sheet_names() {
        let tables = [Table::new("same", vec!["A".to_string()]), Table::new("same", vec!["A".to_string()])];
        let mut output = Cursor::new(Vec::new());
        let _ = generate(&tables, RenderOptions { blank_not_available: true }, &mut output).unwrap_err();
    }
}
