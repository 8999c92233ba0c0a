//! Resolution of the seven Hu-moment columns within a CSV header

use serde::Serialize;

/// The logical Hu column names, in vector order.
pub const HU_COLUMN_NAMES: [&str; 7] = ["hu1", "hu2", "hu3", "hu4", "hu5", "hu6", "hu7"];

/// Dimension of a Hu vector.
pub const HU_COLUMN_COUNT: usize = 7;

/// Zero-based column index for each logical Hu column, in `hu1..hu7` order.
///
/// Built once per table and consumed for every row. Resolution failing is an
/// ordinary outcome, not an error: a table without the full column set simply
/// cannot participate in vector comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnIndexMap {
    indexes: [usize; HU_COLUMN_COUNT],
}

impl ColumnIndexMap {
    /// Locate all seven Hu columns in `headers`, or return `None` if any is
    /// missing. Header cells are trimmed and matched case-insensitively;
    /// columns outside the Hu set are ignored.
    pub fn resolve(headers: &[String]) -> Option<Self> {
        let mut found: [Option<usize>; HU_COLUMN_COUNT] = [None; HU_COLUMN_COUNT];
        for (column, header) in headers.iter().enumerate() {
            let name = header.trim().to_ascii_lowercase();
            if let Some(slot) = HU_COLUMN_NAMES.iter().position(|&n| n == name) {
                // A repeated Hu header keeps the rightmost occurrence.
                found[slot] = Some(column);
            }
        }

        let mut indexes = [0usize; HU_COLUMN_COUNT];
        for (slot, index) in found.iter().enumerate() {
            indexes[slot] = (*index)?;
        }
        Some(Self { indexes })
    }

    /// Column indexes in `hu1..hu7` order.
    pub fn indexes(&self) -> &[usize; HU_COLUMN_COUNT] {
        &self.indexes
    }
}
