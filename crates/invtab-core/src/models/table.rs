//! Raw and cleaned table representations.
//!
//! All cell values stay text throughout the pipeline; no numeric coercion is
//! performed.

/// A raw two-dimensional grid of strings produced by a table detection
/// backend. The header row, if any, is still part of `rows`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Grid rows in document order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a raw table from grid rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a raw table from anything grid-shaped (fixture convenience).
    pub fn from_grid<R, C>(grid: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: grid
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// A table with a promoted header row and standardized column names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedTable {
    /// Column names, in output order.
    pub columns: Vec<String>,
    /// Body rows; each row has one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl CleanedTable {
    /// Append a column carrying the same value in every row.
    pub fn push_constant_column(&mut self, name: impl Into<String>, value: &str) {
        self.columns.push(name.into());
        for row in &mut self.rows {
            row.push(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn constant_column_reaches_every_row() {
        let mut table = CleanedTable {
            columns: vec!["Product".to_string()],
            rows: vec![vec!["Widget".to_string()], vec!["Gadget".to_string()]],
        };

        table.push_constant_column("Platform", "Flipkart");

        assert_eq!(table.columns, vec!["Product", "Platform"]);
        assert_eq!(table.rows[0], vec!["Widget", "Flipkart"]);
        assert_eq!(table.rows[1], vec!["Gadget", "Flipkart"]);
    }

    #[test]
    fn from_grid_builds_string_rows() {
        let table = RawTable::from_grid([["a", "b"], ["c", "d"]]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["c", "d"]);
    }
}
