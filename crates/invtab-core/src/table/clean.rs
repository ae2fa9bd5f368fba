//! Table cleaning and column normalization.

use tracing::warn;

use crate::models::table::{CleanedTable, RawTable};

/// Fixed synonym table mapping extractor column spellings to the
/// standardized output names. Columns not listed keep their trimmed
/// original name.
pub const COLUMN_SYNONYMS: &[(&str, &str)] = &[
    ("Description", "Product"),
    ("Qty", "Quantity"),
    ("Qty Gross Amount ₹", "Quantity"),
    ("Taxable Value ₹", "Taxable Value"),
    ("Total Amount", "Total"),
    ("HSN", "HSN/SAC"),
];

/// Standardize column names in place via [`COLUMN_SYNONYMS`]. Idempotent:
/// already-standardized names are left alone.
pub fn rename_columns(columns: &mut [String]) {
    for col in columns.iter_mut() {
        let trimmed = col.trim();
        *col = COLUMN_SYNONYMS
            .iter()
            .find(|(from, _)| *from == trimmed)
            .map(|(_, to)| (*to).to_string())
            .unwrap_or_else(|| trimmed.to_string());
    }
}

/// Clean a raw table: promote the first row to header, drop all-empty
/// columns, remove repeated-header body rows, and standardize column names.
pub fn clean_table(raw: RawTable) -> CleanedTable {
    let mut rows = raw.rows;
    if rows.is_empty() || rows[0].is_empty() {
        warn!("No columns found in table.");
        return CleanedTable::default();
    }

    // Promote the first row to the column header.
    let mut columns = rows.remove(0);
    let width = columns.len();
    for row in rows.iter_mut() {
        row.resize(width, String::new());
    }

    // Drop columns that are empty in every body row. With no body rows every
    // column is vacuously empty, so a header-only table loses all of them.
    let keep: Vec<bool> = (0..width)
        .map(|i| rows.iter().any(|row| !row[i].trim().is_empty()))
        .collect();
    if keep.iter().any(|k| !k) {
        columns = filter_by(&keep, columns);
        rows = rows.into_iter().map(|row| filter_by(&keep, row)).collect();
    }

    if columns.is_empty() {
        warn!("No columns found in table.");
        return CleanedTable { columns, rows };
    }

    // Remove body rows that repeat the header; some extraction paths emit
    // the header once per page.
    let first_header = columns[0].clone();
    rows.retain(|row| row[0].trim() != first_header);

    rename_columns(&mut columns);

    CleanedTable { columns, rows }
}

fn filter_by<T>(keep: &[bool], items: Vec<T>) -> Vec<T> {
    items
        .into_iter()
        .zip(keep)
        .filter_map(|(item, &k)| k.then_some(item))
        .collect()
}
