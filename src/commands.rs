//! Command implementations for the hudiff CLI

use crate::cli::{parse_tolerance, Commands, OutputFormat};
use crate::diff;
use crate::error::Result;
use crate::matching::{self, ReferenceTable};
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::table::{ParseMode, Table};
use std::path::{Path, PathBuf};

/// Execute a command
pub fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Diff {
            file_a,
            file_b,
            tolerance,
            format,
        } => diff_command(&file_a, &file_b, &tolerance, format),
        Commands::Match {
            query,
            references,
            format,
        } => match_command(&query, &references, format),
    }
}

/// Compare two CSV exports aligned on the key column.
fn diff_command(file_a: &Path, file_b: &Path, tolerance: &str, format: OutputFormat) -> Result<()> {
    let tolerance = parse_tolerance(tolerance);

    let first = Table::read(file_a, ParseMode::Strict)?;
    let second = Table::read(file_b, ParseMode::Strict)?;
    let result = diff::compare_keyed(&first, &second, tolerance);

    match format {
        OutputFormat::Pretty => print!("{}", PrettyPrinter::render_diff_report(&result)),
        OutputFormat::Json => println!("{}", JsonFormatter::format(&result)?),
    }
    Ok(())
}

/// Match a query export against reference exports by Hu-vector distance.
///
/// A query that cannot be read or parsed aborts the run; a reference that
/// cannot be read only fails its own outcome.
fn match_command(
    query_path: &Path,
    reference_paths: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let query = Table::read(query_path, ParseMode::Lenient)?;
    let references: Vec<ReferenceTable> = reference_paths
        .iter()
        .map(|path| {
            let table = Table::read(path, ParseMode::Lenient).map_err(|e| e.to_string());
            if let Err(message) = &table {
                log::warn!("reference {} is unusable: {}", path.display(), message);
            }
            ReferenceTable {
                name: display_name(path),
                table,
            }
        })
        .collect();

    let outcomes = matching::compare_vectors(&query, &references);

    match format {
        OutputFormat::Pretty => {
            let query_has_vectors = matching::extract_vectors(&query)
                .map(|vectors| !vectors.is_empty())
                .unwrap_or(false);
            if !query_has_vectors {
                println!("Query file contains no rows with Hu1-Hu7 values.");
                return Ok(());
            }
            print!(
                "{}",
                PrettyPrinter::render_match_report(&display_name(query_path), &outcomes)
            );
        }
        OutputFormat::Json => println!("{}", JsonFormatter::format(&outcomes)?),
    }
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
