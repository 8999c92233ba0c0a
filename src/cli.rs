//! Command-line interface for hudiff

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hudiff")]
#[command(about = "Compare Hu-moment CSV exports")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two CSV files cell by cell, aligned on the first column
    Diff {
        /// First CSV file
        file_a: PathBuf,

        /// Second CSV file
        file_b: PathBuf,

        /// Numeric tolerance; a difference must strictly exceed it to be reported
        #[arg(default_value = "0.0")]
        tolerance: String,

        /// Output format
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },

    /// Match a query CSV against reference CSVs by Hu-vector distance
    Match {
        /// Query CSV file
        query: PathBuf,

        /// Reference CSV files
        #[arg(required = true)]
        references: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "pretty")]
        format: OutputFormat,
    },
}

/// Output format for rendered reports. Rejecting an unknown value is an
/// argument error, handled by clap at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Pretty,
    Json,
}

/// Parse the tolerance argument. Invalid text is not fatal: it warns and
/// falls back to exact matching.
pub fn parse_tolerance(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(tolerance) => tolerance,
        Err(_) => {
            log::warn!("Invalid tolerance value \"{}\". Falling back to 0.0.", raw);
            0.0
        }
    }
}
