//! Key-aligned cell-level comparison of two CSV tables

use crate::table::{Row, Table};
use crate::KEY_COLUMN_INDEX;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::BTreeSet;

/// One cell pair that differed beyond tolerance.
#[derive(Debug, Clone, Serialize)]
pub struct ValueDifference {
    pub key: String,
    pub column: String,
    pub left: String,
    pub right: String,
    /// Absolute numeric delta, or `None` when either side is non-numeric and
    /// the raw texts differed.
    pub delta: Option<f64>,
}

/// Outcome of comparing two keyed tables.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub first_header: Vec<String>,
    pub second_header: Vec<String>,
    pub headers_match: bool,
    /// Distinct keys per table (duplicates collapse last-wins).
    pub first_row_count: usize,
    pub second_row_count: usize,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
    pub differences: Vec<ValueDifference>,
    pub tolerance: f64,
}

/// Compare two tables aligned on the key column, reporting keys present on
/// only one side and per-column differences beyond `tolerance`.
///
/// Keys are processed in lexicographic order, so output is deterministic and
/// independent of input row order. Columns past the shorter of two aligned
/// rows are skipped.
pub fn compare_keyed(first: &Table, second: &Table, tolerance: f64) -> ComparisonResult {
    let headers_match = first.headers == second.headers;

    let first_rows = key_row_map(first);
    let second_rows = key_row_map(second);

    let all_keys: BTreeSet<&String> = first_rows.keys().chain(second_rows.keys()).collect();

    let mut only_in_first = Vec::new();
    let mut only_in_second = Vec::new();
    let mut differences = Vec::new();

    for &key in &all_keys {
        let left = match first_rows.get(key) {
            Some(row) => row,
            None => {
                only_in_second.push(key.clone());
                continue;
            }
        };
        let right = match second_rows.get(key) {
            Some(row) => row,
            None => {
                only_in_first.push(key.clone());
                continue;
            }
        };

        let column_count = left.values.len().min(right.values.len());
        for column in KEY_COLUMN_INDEX + 1..column_count {
            let name = column_name(&first.headers, column);
            if let Some(difference) = cell_difference(
                key,
                name,
                &left.values[column],
                &right.values[column],
                tolerance,
            ) {
                differences.push(difference);
            }
        }
    }

    ComparisonResult {
        first_header: first.headers.clone(),
        second_header: second.headers.clone(),
        headers_match,
        first_row_count: first_rows.len(),
        second_row_count: second_rows.len(),
        only_in_first,
        only_in_second,
        differences,
        tolerance,
    }
}

/// Build the key -> row mapping for one table. `IndexMap::insert` replaces
/// the value of an existing key, which gives duplicate keys the required
/// last-wins behavior.
fn key_row_map(table: &Table) -> IndexMap<String, &Row> {
    let mut map = IndexMap::new();
    for row in &table.rows {
        let key = row
            .values
            .get(KEY_COLUMN_INDEX)
            .cloned()
            .unwrap_or_default();
        map.insert(key, row);
    }
    map
}

/// Header cell at `index` from the first table, or a placeholder when the
/// header is empty or out of range.
fn column_name(headers: &[String], index: usize) -> String {
    match headers.get(index) {
        Some(header) if !header.is_empty() => header.clone(),
        _ => format!("Column {}", index),
    }
}

fn cell_difference(
    key: &str,
    column: String,
    left: &str,
    right: &str,
    tolerance: f64,
) -> Option<ValueDifference> {
    if let (Some(a), Some(b)) = (parse_number(left), parse_number(right)) {
        let delta = (a - b).abs();
        if delta > tolerance {
            return Some(ValueDifference {
                key: key.to_string(),
                column,
                left: left.to_string(),
                right: right.to_string(),
                delta: Some(delta),
            });
        }
        return None;
    }

    if left != right {
        return Some(ValueDifference {
            key: key.to_string(),
            column,
            left: left.to_string(),
            right: right.to_string(),
            delta: None,
        });
    }
    None
}

pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
