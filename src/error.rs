//! Error types for hudiff operations

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HudiffError>;

#[derive(Error, Debug)]
pub enum HudiffError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File \"{}\" is empty", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Row {line} in \"{}\" has {found} columns but header has {expected}", path.display())]
    RowWidth {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Generic error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl HudiffError {
    pub fn empty_input(path: impl Into<PathBuf>) -> Self {
        Self::EmptyInput { path: path.into() }
    }

    pub fn row_width(path: impl Into<PathBuf>, line: usize, expected: usize, found: usize) -> Self {
        Self::RowWidth {
            path: path.into(),
            line,
            expected,
            found,
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }
}
