//! Tabular sinks and report generation
//!
//! A pass hands its output over as a list of [`Table`]s: a name, a header fixed at
//! creation, and rows of [`Cell`]s appended in order. The generators in this module
//! render those tables without looking at what they mean.
//!
//! # Implementation Model
//!
//! Four report generators are provided, each accessed through a `generate` function:
//! - **Console**: Aligned columns per table, bold titles when colors are enabled
//! - **CSV**: One RFC 4180 document per table
//! - **Excel**: Native .xlsx workbook with one worksheet per table
//! - **JSON**: All tables in a single machine-readable document
//!
//! All generators take [`RenderOptions`], which decides how not-available cells are
//! shown. Cell formatting shared by the text formats lives in the `common` module.

mod common;
mod console;
mod csv;
mod excel;
mod json;
mod table;

pub use common::RenderOptions;
pub use console::generate as generate_console;
pub use csv::generate as generate_csv;
pub use excel::generate as generate_xlsx;
pub use json::generate as generate_json;
pub use table::{Cell, Table};
