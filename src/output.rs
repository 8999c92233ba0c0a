//! Report rendering for diff and match results

use crate::diff::ComparisonResult;
use crate::error::Result;
use crate::matching::ReferenceOutcome;
use crate::MAX_DIFFERENCE_OUTPUT;

/// Human-readable report renderer
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Render a keyed-diff comparison report.
    pub fn render_diff_report(result: &ComparisonResult) -> String {
        let mut out = String::new();

        out.push_str("=== Hu Moment CSV Comparison ===\n");
        out.push_str(&format!("Tolerance: {}\n", result.tolerance));
        out.push_str(&format!(
            "Rows - first file: {}, second file: {}\n",
            result.first_row_count, result.second_row_count
        ));

        if result.headers_match {
            out.push_str(&format!(
                "Headers match ({} columns).\n",
                result.first_header.len()
            ));
        } else {
            out.push_str("\nHeader mismatch detected.\n");
            out.push_str(&format!("First : {}\n", result.first_header.join(", ")));
            out.push_str(&format!("Second: {}\n", result.second_header.join(", ")));
        }

        render_missing_keys(&mut out, "Only in first file", &result.only_in_first);
        render_missing_keys(&mut out, "Only in second file", &result.only_in_second);

        if result.differences.is_empty() {
            out.push_str("\nNo value differences beyond tolerance.\n");
            return out;
        }

        out.push_str(&format!(
            "\nValue differences ({}):\n",
            result.differences.len()
        ));
        for difference in result.differences.iter().take(MAX_DIFFERENCE_OUTPUT) {
            let delta_text = match difference.delta {
                Some(delta) => format!("Δ={}", delta),
                None => "(non-numeric)".to_string(),
            };
            out.push_str(&format!(
                "  Row {} column \"{}\": {} vs {} {}\n",
                difference.key, difference.column, difference.left, difference.right, delta_text
            ));
        }
        if result.differences.len() > MAX_DIFFERENCE_OUTPUT {
            out.push_str(&format!(
                "  ...and {} more differences.\n",
                result.differences.len() - MAX_DIFFERENCE_OUTPUT
            ));
        }

        out
    }

    /// Render the vector-match report: summary lines, the outcome table, and
    /// notes for any references that could not be read.
    pub fn render_match_report(query_name: &str, outcomes: &[ReferenceOutcome]) -> String {
        let mut out = String::new();
        out.push_str(&format!("Query file: {}\n", query_name));
        out.push_str(&format!("References: {} file(s)\n\n", outcomes.len()));
        out.push_str(&Self::render_match_table(outcomes));

        let unreadable: Vec<&ReferenceOutcome> =
            outcomes.iter().filter(|o| o.error.is_some()).collect();
        if !unreadable.is_empty() {
            out.push_str("\nUnreadable references:\n");
            for outcome in unreadable {
                out.push_str(&format!(
                    "  - {}: {}\n",
                    outcome.name,
                    outcome.error.as_deref().unwrap_or("")
                ));
            }
        }

        out
    }

    /// Render one ASCII box table with a row per reference, columns sized to
    /// their widest cell.
    pub fn render_match_table(outcomes: &[ReferenceOutcome]) -> String {
        const HEADERS: [&str; 6] = [
            "Reference",
            "Average Distance",
            "Closest Match",
            "Segmentation OK",
            "Hu Columns OK",
            "Overall Result",
        ];

        let rows: Vec<[String; 6]> = outcomes
            .iter()
            .map(|outcome| {
                [
                    outcome.name.clone(),
                    outcome
                        .average_distance
                        .map(format_distance)
                        .unwrap_or_else(|| "-".to_string()),
                    yes_no(outcome.is_closest_match).to_string(),
                    outcome.segmentation.as_str().to_string(),
                    yes_no(outcome.vector_columns_present).to_string(),
                    outcome.overall_result.as_str().to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.len()).collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let border: String = widths
            .iter()
            .map(|w| format!("+{}", "-".repeat(w + 2)))
            .collect::<String>()
            + "+\n";

        let mut out = String::new();
        out.push_str(&border);
        out.push_str(&render_table_row(&HEADERS.map(String::from), &widths));
        out.push_str(&border);
        for row in &rows {
            out.push_str(&render_table_row(row, &widths));
        }
        out.push_str(&border);
        out
    }
}

fn render_missing_keys(out: &mut String, label: &str, keys: &[String]) {
    if keys.is_empty() {
        return;
    }
    out.push_str(&format!("\n{} ({}):\n", label, keys.len()));
    for key in keys {
        out.push_str(&format!("  - {}\n", key));
    }
}

fn render_table_row(cells: &[String; 6], widths: &[usize]) -> String {
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(
            "| {}{} ",
            cell,
            " ".repeat(width - cell.chars().count())
        ));
    }
    line.push_str("|\n");
    line
}

/// Scientific notation with five significant digits, e.g. `1.2346E-3`.
pub fn format_distance(distance: f64) -> String {
    if !distance.is_finite() {
        return distance.to_string();
    }
    format!("{:.4E}", distance)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }
}
