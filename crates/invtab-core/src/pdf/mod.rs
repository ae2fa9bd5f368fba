//! PDF text extraction module.

mod extractor;

pub use extractor::PdfExtractor;

use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for loaded-document text access.
pub trait TextSource {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire document.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a single page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Trait for path-level document text extraction. The pipeline depends on
/// this seam so alternate backends can be substituted without real PDF
/// parsing.
pub trait TextEngine {
    /// Extract the concatenated text of all pages.
    fn extract_text(&self, path: &Path) -> Result<String>;
}

/// Default text engine reading documents from disk with [`PdfExtractor`].
pub struct PdfTextEngine;

impl PdfTextEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfTextEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEngine for PdfTextEngine {
    fn extract_text(&self, path: &Path) -> Result<String> {
        let data = std::fs::read(path)?;
        let mut source = PdfExtractor::new();
        source.load(&data)?;
        source.extract_text()
    }
}
