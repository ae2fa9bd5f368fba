//! Spreadsheet output.

mod xlsx;

pub use xlsx::write_xlsx;
