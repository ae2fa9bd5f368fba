//! Table detection, selection, and normalization.

mod clean;
mod detect;
mod select;

pub use clean::{COLUMN_SYNONYMS, clean_table, rename_columns};
pub use detect::TextGridEngine;
pub use select::choose_best_table;

use std::ops::RangeInclusive;
use std::path::Path;

use tracing::warn;

use crate::error::TableError;
use crate::models::config::DetectionConfig;
use crate::models::table::RawTable;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Table detection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// Rely on visible ruling lines between cells.
    Lattice,
    /// Infer columns from whitespace alignment.
    Stream,
}

/// Tuning parameters for table detection.
#[derive(Debug, Clone)]
pub struct DetectionParams {
    /// Pages to scan (1-indexed, inclusive); `None` scans all pages.
    pub pages: Option<RangeInclusive<u32>>,
    /// How permissively the stream detector groups text into columns.
    pub edge_tolerance: u32,
}

impl Default for DetectionParams {
    fn default() -> Self {
        Self {
            pages: None,
            edge_tolerance: 50,
        }
    }
}

/// Trait for table detection backends.
pub trait TableEngine {
    /// Detect candidate tables in the document, in document order.
    fn detect(&self, path: &Path, flavor: Flavor, params: &DetectionParams)
    -> Result<Vec<RawTable>>;
}

/// Detect candidate tables for one document.
///
/// Runs the lattice flavor over the configured page range first (all pages
/// by default); if it yields nothing, falls back to the stream flavor with
/// the configured wide edge tolerance. Any engine failure is logged and
/// treated as "zero tables found".
pub fn extract_tables<E: TableEngine>(
    engine: &E,
    path: &Path,
    config: &DetectionConfig,
) -> Vec<RawTable> {
    let pages = config.pages.map(|(first, last)| first..=last);

    let params = DetectionParams {
        pages: pages.clone(),
        ..DetectionParams::default()
    };
    match engine.detect(path, Flavor::Lattice, &params) {
        Ok(tables) if !tables.is_empty() => return tables,
        Ok(_) => {}
        Err(e) => {
            warn!("Error reading tables from {}: {}", path.display(), e);
            return Vec::new();
        }
    }

    let params = DetectionParams {
        pages,
        edge_tolerance: config.stream_edge_tolerance,
    };
    match engine.detect(path, Flavor::Stream, &params) {
        Ok(tables) => tables,
        Err(e) => {
            warn!("Error reading tables from {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingEngine;

    impl TableEngine for FailingEngine {
        fn detect(
            &self,
            _path: &Path,
            _flavor: Flavor,
            _params: &DetectionParams,
        ) -> Result<Vec<RawTable>> {
            Err(TableError::Detection("backend exploded".to_string()))
        }
    }

    struct StreamOnlyEngine;

    impl TableEngine for StreamOnlyEngine {
        fn detect(
            &self,
            _path: &Path,
            flavor: Flavor,
            params: &DetectionParams,
        ) -> Result<Vec<RawTable>> {
            match flavor {
                Flavor::Lattice => Ok(Vec::new()),
                Flavor::Stream => {
                    assert_eq!(params.edge_tolerance, 500);
                    Ok(vec![RawTable::from_grid([["a", "b"], ["1", "2"]])])
                }
            }
        }
    }

    #[test]
    fn engine_failure_yields_zero_tables() {
        let tables = extract_tables(
            &FailingEngine,
            Path::new("invoice.pdf"),
            &DetectionConfig::default(),
        );
        assert!(tables.is_empty());
    }

    #[test]
    fn stream_fallback_uses_configured_edge_tolerance() {
        let tables = extract_tables(
            &StreamOnlyEngine,
            Path::new("invoice.pdf"),
            &DetectionConfig::default(),
        );
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn configured_page_range_reaches_the_engine() {
        struct PageCheckingEngine;

        impl TableEngine for PageCheckingEngine {
            fn detect(
                &self,
                _path: &Path,
                _flavor: Flavor,
                params: &DetectionParams,
            ) -> Result<Vec<RawTable>> {
                assert_eq!(params.pages, Some(1..=2));
                Ok(vec![RawTable::from_grid([["a", "b"], ["1", "2"]])])
            }
        }

        let config = DetectionConfig {
            pages: Some((1, 2)),
            ..DetectionConfig::default()
        };
        let tables = extract_tables(&PageCheckingEngine, Path::new("invoice.pdf"), &config);
        assert_eq!(tables.len(), 1);
    }
}
