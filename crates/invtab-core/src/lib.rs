//! Core library for converting e-commerce invoice PDFs into cleaned
//! spreadsheets.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Table detection (lattice and stream flavors) behind a swappable engine
//! - Table selection heuristics and column normalization
//! - Invoice metadata extraction (Order ID, Invoice Date, Invoice Number,
//!   Seller, GSTIN)
//! - XLSX export of the cleaned tables

pub mod error;
pub mod export;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod table;

pub use error::{InvtabError, Result};
pub use invoice::{InvoiceMetadata, MetadataExtractor, NOT_FOUND};
pub use models::config::InvtabConfig;
pub use models::table::{CleanedTable, RawTable};
pub use pdf::{PdfExtractor, PdfTextEngine, TextEngine, TextSource};
pub use pipeline::{
    BatchEntry, InvoiceProcessor, ProcessOutcome, assemble_table, list_input_files, platform_label,
};
pub use table::{
    DetectionParams, Flavor, TableEngine, TextGridEngine, choose_best_table, clean_table,
    extract_tables,
};
