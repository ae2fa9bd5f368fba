//! Configuration structures for the conversion pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{InvtabError, Result};
use crate::invoice::NOT_FOUND;

/// Main configuration for the invtab pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InvtabConfig {
    /// Table detection configuration.
    pub detection: DetectionConfig,

    /// Metadata extraction configuration.
    pub extraction: ExtractionConfig,
}

/// Table detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Edge tolerance for the stream-flavor fallback pass. Wider values group
    /// text into columns more permissively.
    pub stream_edge_tolerance: u32,

    /// Inclusive 1-indexed page range to scan; `None` scans all pages.
    pub pages: Option<(u32, u32)>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            stream_edge_tolerance: 500,
            pages: None,
        }
    }
}

/// Metadata extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Reject GSTIN captures that fail the mod-36 checksum. Off by default:
    /// captures are taken as matched, without further validation.
    pub validate_gstin: bool,

    /// Value recorded for fields whose pattern finds no match.
    pub not_found: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            validate_gstin: false,
            not_found: NOT_FOUND.to_string(),
        }
    }
}

impl InvtabConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| InvtabError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| InvtabError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
