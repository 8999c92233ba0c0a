//! # hudiff
//!
//! Compares Hu-moment CSV exports from ImageJ Results tables: keyed
//! cell-level diffing of two exports sharing a schema, and nearest-reference
//! matching of Hu1-Hu7 row vectors by average Euclidean distance.

pub mod cli;
pub mod columns;
pub mod commands;
pub mod diff;
pub mod error;
pub mod matching;
pub mod output;
pub mod table;

pub use diff::{compare_keyed, ComparisonResult};
pub use error::{HudiffError, Result};
pub use matching::{compare_vectors, ReferenceOutcome};
pub use table::{ParseMode, Table};

/// Index of the column used to align rows in diff mode.
pub const KEY_COLUMN_INDEX: usize = 0;

/// Maximum number of value differences rendered in a diff report.
pub const MAX_DIFFERENCE_OUTPUT: usize = 50;
