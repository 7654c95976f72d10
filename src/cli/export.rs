use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use scalewiz::evaluation::{artifact_path, Artifact};
use scalewiz::export::export_csv;
use scalewiz::project::Project;

/// Export the data table as CSV
pub fn run(project_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let project = Project::load_json(&project_path)
        .with_context(|| format!("Failed to load project {}", project_path.display()))?;

    let output = match output {
        Some(path) => path,
        None => artifact_path(&project, Artifact::Data, None)?,
    };

    let rows = export_csv(&project, &output).context("CSV export failed")?;
    info!("Export complete: {} rows", rows);
    println!("Saved {}", output.display());

    Ok(())
}
