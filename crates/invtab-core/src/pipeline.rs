//! Per-document conversion pipeline and batch runner.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::export::write_xlsx;
use crate::invoice::{InvoiceMetadata, MetadataExtractor};
use crate::models::config::InvtabConfig;
use crate::models::table::{CleanedTable, RawTable};
use crate::pdf::{PdfTextEngine, TextEngine};
use crate::table::{TableEngine, TextGridEngine, choose_best_table, clean_table, extract_tables};

/// Platform label derived from the input filename: "Amazon" when the name
/// contains "amazon" case-insensitively, otherwise "Flipkart".
pub fn platform_label(file_name: &str) -> &'static str {
    if file_name.to_lowercase().contains("amazon") {
        "Amazon"
    } else {
        "Flipkart"
    }
}

/// Clean the chosen table and append the metadata and platform columns.
pub fn assemble_table(raw: RawTable, metadata: &InvoiceMetadata, file_name: &str) -> CleanedTable {
    let mut table = clean_table(raw);
    for (name, value) in metadata.fields() {
        table.push_constant_column(name, value);
    }
    table.push_constant_column("Platform", platform_label(file_name));
    table
}

/// List `.pdf` files directly inside `input_dir` (non-recursive,
/// case-insensitive extension), in directory enumeration order.
pub fn list_input_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.to_lowercase().ends_with(".pdf"));
        if is_pdf {
            files.push(path);
        }
    }
    Ok(files)
}

/// Outcome of processing one document.
#[derive(Debug)]
pub enum ProcessOutcome {
    /// Spreadsheet written to the given path.
    Written(PathBuf),
    /// Document skipped because no tables were detected.
    NoTables,
}

/// Result of one batch entry; failures are recorded, never propagated.
#[derive(Debug)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: std::result::Result<ProcessOutcome, String>,
}

/// Converts invoice documents into cleaned spreadsheets.
pub struct InvoiceProcessor<T = PdfTextEngine, E = TextGridEngine> {
    config: InvtabConfig,
    text_engine: T,
    table_engine: E,
    extractor: MetadataExtractor,
}

impl InvoiceProcessor {
    /// Processor with the built-in PDF backends.
    pub fn new(config: InvtabConfig) -> Self {
        Self::with_engines(config, PdfTextEngine::new(), TextGridEngine::new())
    }
}

impl<T: TextEngine, E: TableEngine> InvoiceProcessor<T, E> {
    /// Processor with custom text and table backends.
    pub fn with_engines(config: InvtabConfig, text_engine: T, table_engine: E) -> Self {
        let extractor = MetadataExtractor::new()
            .with_gstin_validation(config.extraction.validate_gstin)
            .with_not_found(config.extraction.not_found.clone());
        Self {
            config,
            text_engine,
            table_engine,
            extractor,
        }
    }

    /// Extract only the metadata fields from one document, without running
    /// table detection.
    pub fn extract_metadata(&self, pdf_path: &Path) -> Result<InvoiceMetadata> {
        let text = self.text_engine.extract_text(pdf_path)?;
        Ok(self.extractor.extract(&text))
    }

    /// Process one document: extract metadata and tables, clean, and write
    /// `<basename>_cleaned.xlsx` into `output_dir`.
    ///
    /// A document without detectable tables is skipped with a warning; that
    /// is not an error for the batch.
    pub fn process_document(&self, pdf_path: &Path, output_dir: &Path) -> Result<ProcessOutcome> {
        let metadata = self.extract_metadata(pdf_path)?;
        debug!("Extracted metadata: {:?}", metadata);

        let tables = extract_tables(&self.table_engine, pdf_path, &self.config.detection);
        if tables.is_empty() {
            warn!("No tables found in {}", pdf_path.display());
            return Ok(ProcessOutcome::NoTables);
        }

        let raw = choose_best_table(&tables).clone();
        let file_name = pdf_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or_default();
        let table = assemble_table(raw, &metadata, file_name);

        let stem = pdf_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("invoice");
        let output_path = output_dir.join(format!("{}_cleaned.xlsx", stem));
        write_xlsx(&table, &output_path)?;

        info!("Saved cleaned data to {}", output_path.display());
        Ok(ProcessOutcome::Written(output_path))
    }

    /// Enumerate `.pdf` files in `input_dir` and process each independently,
    /// in enumeration order. One document's failure never aborts the batch.
    pub fn run_batch(&self, input_dir: &Path, output_dir: &Path) -> Result<Vec<BatchEntry>> {
        self.run_batch_with(input_dir, output_dir, |_| {})
    }

    /// Like [`Self::run_batch`], invoking `on_entry` after each document so
    /// callers can report progress.
    pub fn run_batch_with(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        mut on_entry: impl FnMut(&BatchEntry),
    ) -> Result<Vec<BatchEntry>> {
        fs::create_dir_all(output_dir)?;

        let files = list_input_files(input_dir)?;
        if files.is_empty() {
            info!("No PDF files found in {}", input_dir.display());
            return Ok(Vec::new());
        }

        info!("Found {} PDF(s) to process", files.len());

        let mut entries = Vec::with_capacity(files.len());
        for path in files {
            debug!("Processing {}", path.display());
            let outcome = self.process_document(&path, output_dir).map_err(|e| {
                warn!("Failed to process {}: {}", path.display(), e);
                e.to_string()
            });
            let entry = BatchEntry { path, outcome };
            on_entry(&entry);
            entries.push(entry);
        }
        Ok(entries)
    }
}
