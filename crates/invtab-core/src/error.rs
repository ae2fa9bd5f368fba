//! Error types for the invtab-core library.

use thiserror::Error;

/// Main error type for the invtab library.
#[derive(Error, Debug)]
pub enum InvtabError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Table detection error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// Spreadsheet export error.
    #[error("export error: {0}")]
    Export(#[from] ExportError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from the PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to table detection.
#[derive(Error, Debug)]
pub enum TableError {
    /// The detection backend failed on this document.
    #[error("table detection failed: {0}")]
    Detection(String),
}

/// Errors related to spreadsheet output.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Failed to write the spreadsheet file.
    #[error("failed to write spreadsheet: {0}")]
    Write(String),
}

/// Result type for the invtab library.
pub type Result<T> = std::result::Result<T, InvtabError>;
