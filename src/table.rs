//! CSV table parsing
//!
//! The exports this tool consumes are plain comma-separated values without
//! quoting or escaping, so lines are split on the raw comma character. A cell
//! containing a quote is just data; an embedded comma always starts a new
//! cell. Upgrading to a full CSV grammar would silently change results and is
//! deliberately not done.

use crate::error::{HudiffError, Result};
use std::fs;
use std::path::Path;

/// How strictly rows are checked against the header when parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Every data row must have exactly as many cells as the header
    /// (diff path). Cells are kept verbatim.
    Strict,
    /// Rows of any width are accepted and cells are trimmed (vector path);
    /// unusable rows are filtered out later, per row.
    Lenient,
}

/// An in-memory CSV table: one header line plus zero or more data rows.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// A single data row of raw, untyped cell text.
#[derive(Debug, Clone)]
pub struct Row {
    pub values: Vec<String>,
}

impl Table {
    /// Read and parse a CSV file.
    pub fn read(path: &Path, mode: ParseMode) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path, mode)
    }

    /// Parse raw CSV text. `origin` is only used in error messages.
    ///
    /// The first line is the header; an input without one fails. Blank lines
    /// after the header are skipped but still advance the physical line
    /// number reported by width errors.
    pub fn parse(content: &str, origin: &Path, mode: ParseMode) -> Result<Self> {
        let mut lines = content.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| HudiffError::empty_input(origin))?;
        let headers = split_line(header_line, mode);

        let mut rows = Vec::new();
        for (offset, line) in lines.enumerate() {
            // Header was physical line 1.
            let line_number = offset + 2;
            if line.trim().is_empty() {
                continue;
            }
            let values = split_line(line, mode);
            if mode == ParseMode::Strict && values.len() != headers.len() {
                return Err(HudiffError::row_width(
                    origin,
                    line_number,
                    headers.len(),
                    values.len(),
                ));
            }
            rows.push(Row { values });
        }

        log::debug!(
            "parsed {} with {} columns and {} rows",
            origin.display(),
            headers.len(),
            rows.len()
        );
        Ok(Self { headers, rows })
    }
}

/// Split one line on commas. A trailing comma yields a trailing empty cell.
fn split_line(line: &str, mode: ParseMode) -> Vec<String> {
    line.split(',')
        .map(|cell| match mode {
            ParseMode::Strict => cell.to_string(),
            ParseMode::Lenient => cell.trim().to_string(),
        })
        .collect()
}
