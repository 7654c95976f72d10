//! CSV export of a project's test table.
//!
//! One row per test, blanks before trials, with the same columns the
//! evaluation table shows.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::project::{Project, Test};
use crate::selection::pressure_range;
use crate::sort::natural_cmp;

/// Errors that can occur while exporting
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// I/O error creating the output file
    #[error("Failed to write export: {0}")]
    IoError(#[from] std::io::Error),

    /// CSV encoding error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// One row of the evaluation table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestRow {
    /// Test name
    #[serde(rename = "Name")]
    pub name: String,
    /// Report label
    #[serde(rename = "Label")]
    pub label: String,
    /// "Blank" or "Trial"
    #[serde(rename = "Type")]
    pub kind: &'static str,
    /// Elapsed minutes of the last reading
    #[serde(rename = "Minutes")]
    pub minutes: f64,
    /// Selection policy
    #[serde(rename = "Pump")]
    pub pump: String,
    /// Lowest selected pressure
    #[serde(rename = "Baseline")]
    pub baseline: Option<f64>,
    /// Highest selected pressure
    #[serde(rename = "Max")]
    pub max: Option<f64>,
    /// Water clarity
    #[serde(rename = "Clarity")]
    pub clarity: String,
    /// Notes
    #[serde(rename = "Notes")]
    pub notes: String,
    /// Score, trials only
    #[serde(rename = "Result")]
    pub result: Option<f64>,
    /// Included on the report
    #[serde(rename = "Report")]
    pub report: bool,
}

impl TestRow {
    /// Build the table row for one test
    pub fn from_test(test: &Test) -> Self {
        let range = pressure_range(test);
        Self {
            name: test.name.clone(),
            label: test.label().to_string(),
            kind: if test.is_blank { "Blank" } else { "Trial" },
            minutes: test.duration_min(),
            pump: test.to_consider.to_string(),
            baseline: range.map(|(lo, _)| lo),
            max: range.map(|(_, hi)| hi),
            clarity: test.clarity.clone(),
            notes: test.notes.clone(),
            result: test.result,
            report: test.include_on_rep,
        }
    }
}

/// Table rows: blanks then trials, each group in project order or, with
/// `sort`, in natural name order.
pub fn table_rows(project: &Project, sort: bool) -> Vec<TestRow> {
    let mut blanks: Vec<&Test> = project.blanks().collect();
    let mut trials: Vec<&Test> = project.trials().collect();
    if sort {
        blanks.sort_by(|a, b| natural_cmp(&a.name, &b.name));
        trials.sort_by(|a, b| natural_cmp(&a.name, &b.name));
    }
    blanks
        .into_iter()
        .chain(trials)
        .map(TestRow::from_test)
        .collect()
}

/// Write the table as CSV, returning the number of rows written
pub fn write_csv<W: Write>(project: &Project, writer: W) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let rows = table_rows(project, false);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(rows.len())
}

/// Write the table as CSV to a file
pub fn export_csv<P: AsRef<Path>>(project: &Project, path: P) -> Result<usize, ExportError> {
    let path = path.as_ref();
    let rows = write_csv(project, File::create(path)?)?;
    log::info!("Exported {} rows to {}", rows, path.display());
    Ok(rows)
}
