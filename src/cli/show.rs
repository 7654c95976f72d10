use anyhow::{Context, Result};
use std::path::PathBuf;

use scalewiz::export::table_rows;
use scalewiz::project::Project;

#[cfg(feature = "colorized_output")]
use console::style;

fn cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(feature = "colorized_output")]
fn heading(text: &str) -> String {
    style(text).bold().cyan().to_string()
}

#[cfg(not(feature = "colorized_output"))]
fn heading(text: &str) -> String {
    text.to_string()
}

/// Print the project's data table
pub fn run(project_path: PathBuf, sort: bool) -> Result<()> {
    let project = Project::load_json(&project_path)
        .with_context(|| format!("Failed to load project {}", project_path.display()))?;

    println!("{} {}", project.numbers, project.name);
    println!("=======================");
    println!("File: {}", project_path.display());
    println!(
        "Limits: {} min, {} psi; interval {} s; baseline {} psi",
        project.limit_min, project.limit_psi, project.interval, project.baseline
    );
    println!();

    println!(
        "{:<24} {:<16} {:>7} {:<8} {:>8} {:>8} {:<10} {:<20} {:>7} {:<6}",
        "Name", "Label", "Minutes", "Pump", "Baseline", "Max", "Clarity", "Notes", "Result", "Report"
    );

    let rows = table_rows(&project, sort);
    let mut printed_trials = false;
    for (i, row) in rows.iter().enumerate() {
        if i == 0 && row.kind == "Blank" {
            println!("{}", heading("Blanks:"));
        }
        if row.kind == "Trial" && !printed_trials {
            println!("{}", heading("Trials:"));
            printed_trials = true;
        }
        println!(
            "{:<24} {:<16} {:>7.2} {:<8} {:>8} {:>8} {:<10} {:<20} {:>7} {:<6}",
            row.name,
            row.label,
            row.minutes,
            row.pump,
            cell(row.baseline),
            cell(row.max),
            row.clarity,
            row.notes,
            cell(row.result),
            if row.report { "yes" } else { "no" }
        );
    }

    Ok(())
}
