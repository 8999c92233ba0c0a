//! Common test utilities and helpers

#![allow(dead_code)]

use hudiff::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture managing a temporary directory of CSV inputs
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self> {
        Ok(Self {
            temp_dir: TempDir::new()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a test CSV file with sample data
    pub fn create_csv(&self, name: &str, data: &[Vec<&str>]) -> Result<PathBuf> {
        let mut content = String::new();
        for row in data {
            content.push_str(&row.join(","));
            content.push('\n');
        }
        self.create_csv_raw(name, &content)
    }

    /// Create a test CSV file with raw string content
    pub fn create_csv_raw(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Create a Hu-moment CSV with an `idx,hu1..hu7` header and one data row
    /// per vector.
    pub fn create_hu_csv(&self, name: &str, vectors: &[[f64; 7]]) -> Result<PathBuf> {
        let mut content = String::from("idx,hu1,hu2,hu3,hu4,hu5,hu6,hu7\n");
        for (i, vector) in vectors.iter().enumerate() {
            content.push_str(&i.to_string());
            for value in vector {
                content.push(',');
                content.push_str(&value.to_string());
            }
            content.push('\n');
        }
        self.create_csv_raw(name, &content)
    }
}
