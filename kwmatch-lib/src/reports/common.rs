//! Common utilities shared across report generators.

use super::Cell;
use std::borrow::Cow;

/// Rendering choices shared by all report generators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render not-available cells as empty instead of `0`.
    pub blank_not_available: bool,
}

/// Format a cell as text using consistent formatting rules.
///
/// Amounts are shown with two decimals. Not-available cells become `0` unless blanking
/// is requested.
pub fn format_cell(cell: &Cell, options: RenderOptions) -> Cow<'_, str> {
    match cell {
        Cell::Text(text) => Cow::Borrowed(text.as_str()),
        Cell::Integer(value) => Cow::Owned(value.to_string()),
        Cell::Number(value) => Cow::Owned(format!("{value:.2}")),
        Cell::NotAvailable if options.blank_not_available => Cow::Borrowed(""),
        Cell::NotAvailable => Cow::Borrowed("0"),
    }
}

/// Whether a cell holds a numeric value, or stands in for one.
pub const fn is_numeric(cell: &Cell) -> bool {
    !matches!(cell, Cell::Text(_))
}
