use compact_str::CompactString;

/// One output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(CompactString),
    Integer(u64),
    Number(f64),
    NotAvailable,
}

impl From<Option<&CompactString>> for Cell {
    fn from(value: Option<&CompactString>) -> Self {
        value.map_or(Self::NotAvailable, |text| Self::Text(text.clone()))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

/// An append-only table: a fixed header written once, then rows in arrival order.
///
/// Rows are never reordered or merged here; all aggregation is complete before a row is
/// appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: &'static str,
    header: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub const fn new(name: &'static str, header: Vec<String>) -> Self {
        Self {
            name,
            header,
            rows: Vec::new(),
        }
    }

    /// Appends a row after the current last row.
    pub fn append(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.header.len(), "row width must match the header of table '{}'", self.name);
        self.rows.push(row);
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_keeps_order() {
        let mut table = Table::new("t", vec!["A".into(), "B".into()]);
        assert!(table.is_empty());
        table.append(vec![Cell::from("x"), Cell::Integer(1)]);
        table.append(vec![Cell::from("y"), Cell::NotAvailable]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], Cell::from("x"));
        assert_eq!(table.rows()[1][1], Cell::NotAvailable);
        assert_eq!(table.header(), ["A", "B"]);
        assert_eq!(table.name(), "t");
    }

    #[test]
    fn test_cell_from_option() {
        let text = CompactString::from("shoe");
        assert_eq!(Cell::from(Some(&text)), Cell::Text("shoe".into()));
        assert_eq!(Cell::from(None::<&CompactString>), Cell::NotAvailable);
    }
}
