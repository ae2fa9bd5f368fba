//! Candidate table selection.

use crate::models::table::RawTable;

/// Pick the most plausible line-item table among the candidates.
///
/// Scans candidates in order and returns the first whose header row
/// (lower-cased) has a cell containing "product" or "description" as a
/// substring; if none match, falls back to the first candidate.
///
/// The candidate list must be non-empty; the pipeline checks this before
/// calling.
pub fn choose_best_table(tables: &[RawTable]) -> &RawTable {
    for table in tables {
        if let Some(header) = table.rows.first() {
            let is_line_item_header = header.iter().any(|cell| {
                let cell = cell.to_lowercase();
                cell.contains("product") || cell.contains("description")
            });
            if is_line_item_header {
                return table;
            }
        }
    }
    &tables[0]
}
