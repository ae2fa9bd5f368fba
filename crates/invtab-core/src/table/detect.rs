//! Built-in table detection over extracted document text.
//!
//! Two flavors mirror the classic PDF table strategies: lattice walks visible
//! ruling characters, stream infers columns from whitespace alignment.

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{DetectionParams, Flavor, Result, TableEngine};
use crate::error::TableError;
use crate::models::table::RawTable;
use crate::pdf::{PdfExtractor, TextSource};

lazy_static! {
    /// A run of two or more whitespace characters separates stream columns.
    static ref COLUMN_GAP: Regex = Regex::new(r"\s{2,}|\t").unwrap();
}

/// Text-layout table detector working on extractable PDF text.
pub struct TextGridEngine;

impl TextGridEngine {
    pub fn new() -> Self {
        Self
    }

    /// Detect tables in already-extracted text.
    pub fn detect_in_text(
        &self,
        text: &str,
        flavor: Flavor,
        params: &DetectionParams,
    ) -> Vec<RawTable> {
        let text = normalize_rules(text);
        let tables = match flavor {
            Flavor::Lattice => detect_lattice(&text),
            Flavor::Stream => detect_stream(&text, params),
        };
        debug!("{:?} detection found {} candidate table(s)", flavor, tables.len());
        tables
    }
}

impl Default for TextGridEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TableEngine for TextGridEngine {
    fn detect(
        &self,
        path: &Path,
        flavor: Flavor,
        params: &DetectionParams,
    ) -> Result<Vec<RawTable>> {
        let data = std::fs::read(path).map_err(|e| TableError::Detection(e.to_string()))?;
        let mut source = PdfExtractor::new();
        source
            .load(&data)
            .map_err(|e| TableError::Detection(e.to_string()))?;

        let text = match &params.pages {
            Some(range) => {
                let mut text = String::new();
                for page in range.clone() {
                    let page_text = source
                        .extract_page_text(page)
                        .map_err(|e| TableError::Detection(e.to_string()))?;
                    if !text.is_empty() {
                        text.push('\n');
                    }
                    text.push_str(&page_text);
                }
                text
            }
            None => source
                .extract_text()
                .map_err(|e| TableError::Detection(e.to_string()))?,
        };

        Ok(self.detect_in_text(&text, flavor, params))
    }
}

/// Map box-drawing rules to their ASCII equivalents so both detector paths
/// only deal with `|`, `-`, and `+`.
fn normalize_rules(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '│' | '┃' | '║' => '|',
            '─' | '━' | '═' => '-',
            '┼' | '├' | '┤' | '┬' | '┴' | '┌' | '┐' | '└' | '┘' => '+',
            _ => c,
        })
        .collect()
}

fn detect_lattice(text: &str) -> Vec<RawTable> {
    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if is_rule_line(line) {
            // Ruling between rows stays inside the run.
            continue;
        }
        if line.matches('|').count() >= 2 {
            current.push(split_ruled_row(line));
        } else {
            flush_candidate(&mut current, &mut tables);
        }
    }
    flush_candidate(&mut current, &mut tables);

    tables
}

fn detect_stream(text: &str, params: &DetectionParams) -> Vec<RawTable> {
    // A wider edge tolerance lets a table block absorb short interruptions
    // where the layout collapses to a single column.
    let allowed_gaps = (params.edge_tolerance / 250) as usize;

    let mut tables = Vec::new();
    let mut current: Vec<Vec<String>> = Vec::new();
    let mut gaps = 0usize;

    for line in text.lines() {
        let cells = split_whitespace_columns(line);
        if cells.len() >= 2 {
            current.push(cells);
            gaps = 0;
        } else if !current.is_empty() && !line.trim().is_empty() && gaps < allowed_gaps {
            gaps += 1;
        } else {
            flush_candidate(&mut current, &mut tables);
            gaps = 0;
        }
    }
    flush_candidate(&mut current, &mut tables);

    tables
}

fn is_rule_line(line: &str) -> bool {
    !line.is_empty()
        && line.chars().any(|c| c == '-' || c == '=')
        && line
            .chars()
            .all(|c| matches!(c, '|' | '+' | '-' | '=' | ' ' | ':'))
}

fn split_ruled_row(line: &str) -> Vec<String> {
    let mut cells: Vec<&str> = line.split('|').map(str::trim).collect();
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }
    cells.into_iter().map(str::to_string).collect()
}

fn split_whitespace_columns(line: &str) -> Vec<String> {
    COLUMN_GAP
        .split(line.trim())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep a run of grid rows as a candidate if it has at least two rows and
/// two columns; pad short rows to the widest row.
fn flush_candidate(current: &mut Vec<Vec<String>>, tables: &mut Vec<RawTable>) {
    if current.len() < 2 {
        current.clear();
        return;
    }
    let width = current.iter().map(Vec::len).max().unwrap_or(0);
    if width < 2 {
        current.clear();
        return;
    }

    let mut rows = std::mem::take(current);
    for row in rows.iter_mut() {
        row.resize(width, String::new());
    }
    tables.push(RawTable::new(rows));
}
